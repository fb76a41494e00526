//! Template string parser.
//!
//! Splits a template into literal text and placeholder tokens. Parsing never
//! fails: anything that is not a well-formed token is kept as literal text.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
