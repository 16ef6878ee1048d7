//! Fabletics: style and style-color keys come from the `-` segments.

use catalog_model::Brand;
use catalog_model::columns::{U_DESCRIP_COLOR, U_DESCRIPCION, U_ESTILO, U_ESTILO_COLOR, U_TALLA};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{ParsedName, parse_names, project_field, set_string_column};
use crate::error::Result;
use crate::parse::{field, split_fields};
use crate::state::CleanState;

pub struct FableticsProcessor;

/// `FL2-BLK/Legging/Black/M` gives style `FL2`, style-color `FL2-BLK`,
/// description `Legging`, color `Black` and size `M`.
fn parse_fabletics(name: Option<&str>) -> ParsedName {
    let Some(name) = name else {
        return ParsedName::default();
    };
    let dashes = split_fields(name, '-');
    let slashes = split_fields(name, '/');
    ParsedName {
        style: field(dashes.as_deref(), 0),
        style_color: dashes.as_deref().map(|parts| parts[..parts.len().min(2)].join("-")),
        description: field(slashes.as_deref(), 1),
        descrip_color: field(slashes.as_deref(), 2),
        talla: field(slashes.as_deref(), 3),
    }
}

impl BrandProcessor for FableticsProcessor {
    fn brand(&self) -> Brand {
        Brand::Fb
    }

    fn description(&self) -> &'static str {
        "Dash-delimited style keys with a second merge on style-color"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed = parse_names(df, parse_fabletics)?;
        set_string_column(df, U_ESTILO, project_field(&parsed, |p| p.style.clone()))?;
        set_string_column(df, U_ESTILO_COLOR, project_field(&parsed, |p| p.style_color.clone()))?;
        set_string_column(df, U_DESCRIPCION, project_field(&parsed, |p| p.description.clone()))?;
        set_string_column(df, U_DESCRIP_COLOR, project_field(&parsed, |p| p.descrip_color.clone()))?;
        set_string_column(df, U_TALLA, project_field(&parsed, |p| p.talla.clone()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dash_and_slash_layouts() {
        let parsed = parse_fabletics(Some("FL2-BLK-01/Legging/Black/M"));
        assert_eq!(parsed.style.as_deref(), Some("FL2"));
        assert_eq!(parsed.style_color.as_deref(), Some("FL2-BLK"));
        assert_eq!(parsed.description.as_deref(), Some("Legging"));
        assert_eq!(parsed.descrip_color.as_deref(), Some("Black"));
        assert_eq!(parsed.talla.as_deref(), Some("M"));
    }

    #[test]
    fn no_dash_means_no_keys() {
        let parsed = parse_fabletics(Some("FL2/Legging"));
        assert_eq!(parsed.style, None);
        assert_eq!(parsed.style_color, None);
        assert_eq!(parsed.description.as_deref(), Some("Legging"));
    }
}
