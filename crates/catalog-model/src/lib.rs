//! Data model for brand catalog normalization.

pub mod brand;
pub mod columns;
pub mod diagnostic;
pub mod error;
pub mod profile;

pub use brand::Brand;
pub use diagnostic::{Diagnostic, Severity, codes, has_errors, warning_count};
pub use error::{BrandError, Result};
pub use profile::{
    BrandProfile, EnrichColumns, EnrichmentPass, MergePartition, MissingReference, Projection,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_count_includes_errors() {
        let diagnostics = vec![
            Diagnostic::info(codes::ENRICHMENT, "filled 3 of 4 rows"),
            Diagnostic::warning(codes::REFERENCE_NOT_FOUND, "no reference for Cole Haan"),
            Diagnostic::error(codes::REFERENCE_KEY_MISSING, "reference lacks U_Estilo"),
        ];
        assert_eq!(warning_count(&diagnostics), 2);
        assert!(has_errors(&diagnostics));
    }

    #[test]
    fn diagnostic_serializes() {
        let diagnostic = Diagnostic::warning(codes::INVALID_STYLE, "2 rows").with_rows(2);
        let json = serde_json::to_string(&diagnostic).expect("serialize diagnostic");
        assert!(json.contains("\"severity\":\"warning\""));
        let round: Diagnostic = serde_json::from_str(&json).expect("deserialize diagnostic");
        assert_eq!(round, diagnostic);
    }
}
