//! Psycho Bunny: four-field names with the color keeping any extra `/`.

use catalog_model::Brand;
use catalog_model::columns::{U_DESCRIP_COLOR, U_DESCRIPCION, U_ESTILO, U_TALLA};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{ParsedName, parse_names, project_field, set_string_column};
use crate::error::Result;
use crate::parse::{field, split_fields_n, strip_americana};
use crate::state::CleanState;

pub struct PsychoBunnyProcessor;

fn parse_psycho_bunny(name: Option<&str>) -> ParsedName {
    let fields = name.and_then(|name| split_fields_n(name, '/', 4));
    let fields = fields.as_deref();
    ParsedName {
        style: field(fields, 0).map(|s| s.trim().to_string()),
        style_color: None,
        description: field(fields, 1).map(|d| strip_americana(&d).trim().to_string()),
        talla: field(fields, 2),
        descrip_color: field(fields, 3),
    }
}

impl BrandProcessor for PsychoBunnyProcessor {
    fn brand(&self) -> Brand {
        Brand::Pb
    }

    fn description(&self) -> &'static str {
        "Four-field name split with trimmed style keys"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed = parse_names(df, parse_psycho_bunny)?;
        set_string_column(df, U_ESTILO, project_field(&parsed, |p| p.style.clone()))?;
        set_string_column(df, U_DESCRIPCION, project_field(&parsed, |p| p.description.clone()))?;
        set_string_column(df, U_TALLA, project_field(&parsed, |p| p.talla.clone()))?;
        set_string_column(df, U_DESCRIP_COLOR, project_field(&parsed, |p| p.descrip_color.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_keeps_remainder() {
        let parsed = parse_psycho_bunny(Some(" P100 /Tee Americana 9 /M/Navy/White"));
        assert_eq!(parsed.style.as_deref(), Some("P100"));
        assert_eq!(parsed.description.as_deref(), Some("Tee"));
        assert_eq!(parsed.talla.as_deref(), Some("M"));
        assert_eq!(parsed.descrip_color.as_deref(), Some("Navy/White"));
    }
}
