//! Per-call evaluation state.

use std::mem;

use crate::interpreter::Diagnostic;

/// Missing-value handler used when none is configured.
pub const DEFAULT_MISSING_VALUE: &str = "x";

/// Evaluation context carried through one or more formatting calls.
///
/// The context tracks:
/// - The missing-value handler substituted for absent fields
/// - Diagnostics reported during evaluation
///
/// Every reported diagnostic is also emitted as a `tracing` warning.
#[derive(Debug, Clone)]
pub struct EvalContext {
    missing_value: String,
    warnings: Vec<Diagnostic>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalContext {
    /// Create a context using [`DEFAULT_MISSING_VALUE`].
    pub fn new() -> Self {
        Self::with_missing_value(DEFAULT_MISSING_VALUE)
    }

    /// Create a context with a custom missing-value handler.
    pub fn with_missing_value(missing_value: impl Into<String>) -> Self {
        Self {
            missing_value: missing_value.into(),
            warnings: Vec::new(),
        }
    }

    /// The string substituted for absent fields.
    pub fn missing_value(&self) -> &str {
        &self.missing_value
    }

    /// Report a diagnostic.
    ///
    /// The diagnostic is logged on every report but stored once.
    pub fn add_warning(&mut self, warning: Diagnostic) {
        tracing::warn!(kind = warning.kind(), "{warning}");
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// Drain all collected diagnostics from this context.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        mem::take(&mut self.warnings)
    }

    /// Get a reference to collected diagnostics.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}
