//! Placeholder substitution engine.
//!
//! This module renders parsed templates against a [`FieldRecord`]: it resolves
//! placeholder names through a [`KeyMap`], applies the placeholder-level
//! formatting rules, then the last modifier of the chain.
//!
//! [`FieldRecord`]: crate::FieldRecord

mod context;
mod error;
mod evaluator;
mod key_map;
mod lint;
mod transforms;

pub use context::{DEFAULT_MISSING_VALUE, EvalContext};
pub use error::{Diagnostic, compute_suggestions};
pub use evaluator::{eval_template, process_sub_template};
pub use key_map::KeyMap;
pub use lint::lint_template;
pub use transforms::{apply_modifier, apply_modifier_with};
