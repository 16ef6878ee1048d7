//! Per-invocation state shared by the pipeline stages.

use catalog_model::{Diagnostic, Severity};
use tracing::{error, info, warn};

/// Mutable state for one clean invocation.
#[derive(Debug, Default)]
pub struct CleanState {
    pub diagnostics: Vec<Diagnostic>,
    /// Per-row style validity, set by processors that partition the merge.
    pub style_validity: Option<Vec<bool>>,
}

impl CleanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and emits it as a tracing event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code.as_str();
        let rows = diagnostic.affected_rows;
        match diagnostic.severity {
            Severity::Info => info!(code, rows, "{}", diagnostic.message),
            Severity::Warning => warn!(code, rows, "{}", diagnostic.message),
            Severity::Error => error!(code, rows, "{}", diagnostic.message),
        }
        self.diagnostics.push(diagnostic);
    }
}
