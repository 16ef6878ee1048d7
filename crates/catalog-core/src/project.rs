//! Final column selection.

use catalog_model::{BrandProfile, Projection};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::frame::has_column;

/// Shapes the enriched table for output.
///
/// Restricted brands keep only their canonical columns, in canonical order,
/// skipping the ones the table lacks. Other brands keep the table as is.
pub fn project(df: &DataFrame, profile: &BrandProfile) -> Result<DataFrame> {
    match profile.projection {
        Projection::KeepAll => Ok(df.clone()),
        Projection::Restrict => {
            let columns: Vec<&str> = profile
                .output_columns
                .iter()
                .copied()
                .filter(|name| has_column(df, name))
                .collect();
            Ok(df.select(columns)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_ingest::column_names;
    use catalog_model::Brand;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Extra".into(), vec!["x"]).into_column(),
            Series::new("U_Estilo".into(), vec!["X1"]).into_column(),
            Series::new("ItemName".into(), vec!["X1/Gorra"]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn restrict_orders_and_drops() {
        let projected = project(&frame(), Brand::Ne.profile()).unwrap();
        assert_eq!(column_names(&projected), vec!["U_Estilo", "ItemName"]);
    }

    #[test]
    fn keep_all_is_identity() {
        let projected = project(&frame(), Brand::Sk.profile()).unwrap();
        assert_eq!(column_names(&projected), vec!["Extra", "U_Estilo", "ItemName"]);
    }
}
