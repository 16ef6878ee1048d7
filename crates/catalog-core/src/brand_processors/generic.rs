use catalog_model::Brand;
use catalog_model::columns::{U_DESCRIPCION, U_ESTILO};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{parse_names, parse_slash_layout, project_field, set_string_column};
use crate::error::Result;
use crate::state::CleanState;

/// Style/description split with no derivation; used by Birkenstock and Adolfo.
pub struct GenericProcessor {
    brand: Brand,
}

impl GenericProcessor {
    pub fn new(brand: Brand) -> Self {
        Self { brand }
    }
}

impl BrandProcessor for GenericProcessor {
    fn brand(&self) -> Brand {
        self.brand
    }

    fn description(&self) -> &'static str {
        "Style/description split; attributes come from the reference"
    }

    fn parse(&self, df: &mut DataFrame, _state: &mut CleanState) -> Result<()> {
        let parsed = parse_names(df, parse_slash_layout)?;
        set_string_column(df, U_ESTILO, project_field(&parsed, |p| p.style.clone()))?;
        set_string_column(df, U_DESCRIPCION, project_field(&parsed, |p| p.description.clone()))?;
        Ok(())
    }
}
