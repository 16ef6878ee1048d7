//! Columbia: four-field names and gender from the item code.

use catalog_model::Brand;
use catalog_model::columns::{
    CL_COD_COLOR, CL_DESCRIP_COLOR, CL_DESCRIPCION, CL_ESTILO, CL_GENERO, ITEM_CODE, U_TALLA,
};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{
    labels, parse_names, parse_slash_layout, project_field, set_string_column,
    string_column_or_null,
};
use crate::error::Result;
use crate::rules::{COLUMBIA_GENDER, first_prefix_match};
use crate::state::CleanState;

pub struct ColumbiaProcessor;

/// Second `-` token of a color description (`RED-02` gives `02`).
fn color_code(descrip_color: &str) -> Option<String> {
    descrip_color.split('-').nth(1).map(str::to_string)
}

impl BrandProcessor for ColumbiaProcessor {
    fn brand(&self) -> Brand {
        Brand::Cl
    }

    fn description(&self) -> &'static str {
        "Four-field name split with gender from the item code prefix"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed = parse_names(df, parse_slash_layout)?;
        let colors: Vec<String> = parsed
            .iter()
            .map(|p| p.descrip_color.clone().unwrap_or_default())
            .collect();
        let codes: Vec<Option<String>> = colors.iter().map(|c| color_code(c)).collect();

        set_string_column(df, CL_ESTILO, project_field(&parsed, |p| p.style.clone()))?;
        set_string_column(df, CL_DESCRIPCION, project_field(&parsed, |p| p.description.clone()))?;
        set_string_column(df, U_TALLA, project_field(&parsed, |p| p.talla.clone()))?;
        set_string_column(df, CL_DESCRIP_COLOR, colors.into_iter().map(Some).collect())?;
        set_string_column(df, CL_COD_COLOR, codes)?;
        Ok(())
    }

    fn derive(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        // Item codes may arrive numeric; gender rules and the output read them as text.
        let item_codes = string_column_or_null(df, ITEM_CODE)?;
        let genders: Vec<&'static str> = item_codes
            .iter()
            .map(|code| first_prefix_match(COLUMBIA_GENDER, code.as_deref().unwrap_or("")))
            .collect();
        set_string_column(df, ITEM_CODE, item_codes)?;
        set_string_column(df, CL_GENERO, labels(genders))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::string_column;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn color_code_is_second_token() {
        assert_eq!(color_code("RED-02").as_deref(), Some("02"));
        assert_eq!(color_code("RED-02-X").as_deref(), Some("02"));
        assert_eq!(color_code("RED"), None);
        assert_eq!(color_code(""), None);
    }

    #[test]
    fn numeric_item_codes_are_classified() {
        let mut df = DataFrame::new(vec![
            Series::new("ItemName".into(), vec!["A/B/C/D-1", "NOSLASH"]).into_column(),
            Series::new("ItemCode".into(), vec![Some(804100i64), None]).into_column(),
        ])
        .unwrap();
        let mut state = CleanState::new();
        ColumbiaProcessor.parse(&mut df, &mut state).unwrap();
        ColumbiaProcessor.derive(&mut df, &mut state).unwrap();
        assert_eq!(
            string_column(&df, CL_GENERO).unwrap(),
            vec![Some("UNISEX".to_string()), Some(String::new())]
        );
        assert_eq!(
            string_column(&df, CL_DESCRIP_COLOR).unwrap(),
            vec![Some("D-1".to_string()), Some(String::new())]
        );
        assert_eq!(string_column(&df, CL_COD_COLOR).unwrap()[1], None);
        assert!(df.column(ITEM_CODE).unwrap().str().is_ok());
    }
}
