//! Skechers: style keys are validated before they may join the reference.

use catalog_model::columns::{ITEM_NAME, U_DESCRIPCION, U_ESTILO};
use catalog_model::{Brand, Diagnostic, codes};
use polars::prelude::DataFrame;

use super::BrandProcessor;
use super::common::{set_string_column, string_column_or_null};
use crate::error::Result;
use crate::parse::{field, is_valid_style, split_fields, strip_americana};
use crate::state::CleanState;

pub struct SkechersProcessor;

impl BrandProcessor for SkechersProcessor {
    fn brand(&self) -> Brand {
        Brand::Sk
    }

    fn description(&self) -> &'static str {
        "Validated style keys with americana sizes stripped from descriptions"
    }

    fn parse(&self, df: &mut DataFrame, state: &mut CleanState) -> Result<()> {
        let names = string_column_or_null(df, ITEM_NAME)?;
        let existing_descriptions = string_column_or_null(df, U_DESCRIPCION)?;

        let mut styles = Vec::with_capacity(names.len());
        let mut descriptions = Vec::with_capacity(names.len());
        let mut validity = Vec::with_capacity(names.len());
        for (name, existing) in names.iter().zip(existing_descriptions) {
            let fields = name.as_deref().and_then(|name| split_fields(name, '/'));
            let style = field(fields.as_deref(), 0);
            let valid = style.as_deref().is_some_and(is_valid_style);
            if valid {
                styles.push(style);
                descriptions.push(field(fields.as_deref(), 1).map(|d| strip_americana(&d)));
            } else {
                styles.push(None);
                descriptions.push(existing);
            }
            validity.push(valid);
        }

        let invalid = validity.iter().filter(|valid| !**valid).count();
        if invalid > 0 {
            state.push(
                Diagnostic::warning(
                    codes::INVALID_STYLE,
                    format!("{invalid} rows have no usable style key"),
                )
                .with_rows(invalid),
            );
        }

        set_string_column(df, U_ESTILO, styles)?;
        set_string_column(df, U_DESCRIPCION, descriptions)?;
        state.style_validity = Some(validity);
        Ok(())
    }
}
