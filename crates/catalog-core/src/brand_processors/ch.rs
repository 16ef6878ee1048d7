//! Cole Haan: style letter encodes the product family.

use catalog_model::Brand;
use catalog_model::columns::{U_CATEGORIA, U_DESCRIPCION, U_ESTILO, U_GENERO, U_SEGMENTO, U_TALLA};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{
    labels, parse_names, parse_slash_layout, project_field, set_string_column,
    string_column_or_null,
};
use crate::error::Result;
use crate::rules::{COLE_HAAN_GENDER, cole_haan_segment, first_prefix_match};
use crate::state::CleanState;

pub struct ColeHaanProcessor;

impl BrandProcessor for ColeHaanProcessor {
    fn brand(&self) -> Brand {
        Brand::Ch
    }

    fn description(&self) -> &'static str {
        "Style/description split with family rules from the style letter"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed = parse_names(df, parse_slash_layout)?;
        set_string_column(df, U_ESTILO, project_field(&parsed, |p| p.style.clone()))?;
        set_string_column(df, U_DESCRIPCION, project_field(&parsed, |p| p.description.clone()))?;
        // Size always comes from the name, replacing any uploaded column.
        set_string_column(df, U_TALLA, project_field(&parsed, |p| p.talla.clone()))?;
        Ok(())
    }

    fn derive(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let styles = string_column_or_null(df, U_ESTILO)?;
        let genders: Vec<&'static str> = styles
            .iter()
            .map(|style| first_prefix_match(COLE_HAAN_GENDER, style.as_deref().unwrap_or("")))
            .collect();
        let segments = genders.iter().map(|gender| cole_haan_segment(gender));

        set_string_column(df, U_SEGMENTO, labels(segments))?;
        set_string_column(df, U_CATEGORIA, labels(genders.iter().copied()))?;
        set_string_column(df, U_GENERO, labels(genders))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::string_column;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn derives_family_columns() {
        let mut df = DataFrame::new(vec![
            Series::new(
                "ItemName".into(),
                vec!["F100/Backpack/OS", "W2/Loafer/7", "Z9/Other", "NOSLASH"],
            )
            .into_column(),
        ])
        .unwrap();
        let mut state = CleanState::new();
        let processor = ColeHaanProcessor;
        processor.parse(&mut df, &mut state).unwrap();
        processor.derive(&mut df, &mut state).unwrap();

        let genders = string_column(&df, U_GENERO).unwrap();
        assert_eq!(
            genders,
            vec![
                Some("MACC".to_string()),
                Some("WFW".to_string()),
                Some(String::new()),
                Some(String::new())
            ]
        );
        let segments = string_column(&df, U_SEGMENTO).unwrap();
        assert_eq!(segments[0].as_deref(), Some("ACCESSORIES"));
        assert_eq!(segments[1].as_deref(), Some("FOOTWEAR"));
        assert_eq!(segments[2].as_deref(), Some(""));
        assert_eq!(string_column(&df, U_CATEGORIA).unwrap(), genders);
        let sizes = string_column(&df, U_TALLA).unwrap();
        assert_eq!(sizes, vec![Some("OS".to_string()), Some("7".to_string()), None, None]);
        assert_eq!(string_column(&df, U_ESTILO).unwrap()[3], None);
    }

    #[test]
    fn size_from_name_replaces_uploaded_size() {
        let mut df = DataFrame::new(vec![
            Series::new("ItemName".into(), vec!["F100/Backpack/OS", "W2/Loafer"]).into_column(),
            Series::new("U_Talla".into(), vec!["L", "9"]).into_column(),
        ])
        .unwrap();
        let mut state = CleanState::new();
        ColeHaanProcessor.parse(&mut df, &mut state).unwrap();
        ColeHaanProcessor.derive(&mut df, &mut state).unwrap();
        assert_eq!(
            string_column(&df, U_TALLA).unwrap(),
            vec![Some("OS".to_string()), None]
        );
    }
}
