use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A non-fatal event raised while cleaning a table.
///
/// Fatal conditions are returned as errors; everything the caller should
/// merely be told about (missing reference data, enrichment statistics,
/// rows with unusable style keys) travels back as diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Stable machine-readable code (e.g. "reference_not_found").
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Number of rows the event applies to, when meaningful.
    pub affected_rows: Option<usize>,
}

impl Diagnostic {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: code.into(),
            message: message.into(),
            affected_rows: None,
        }
    }

    pub fn info(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, message)
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.affected_rows = Some(rows);
        self
    }
}

/// Counts diagnostics at or above warning level.
pub fn warning_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity >= Severity::Warning)
        .count()
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

/// Codes used by the normalizer.
pub mod codes {
    pub const REFERENCE_NOT_FOUND: &str = "reference_not_found";
    pub const REFERENCE_KEY_MISSING: &str = "reference_key_missing";
    pub const INVALID_STYLE: &str = "invalid_style";
    pub const ENRICHMENT: &str = "enrichment";
    pub const LEAGUE_LOOKUP: &str = "league_lookup";
}
