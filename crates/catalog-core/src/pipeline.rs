//! The clean pipeline.
//!
//! A [`Cleaner`] runs one straight-line pass over an input table:
//!
//! 1. **Validate** - mandatory columns must exist
//! 2. **Resolve** - pick the brand's reference collection
//! 3. **Parse** - split `ItemName` into attributes
//! 4. **Derive** - categorical rules over parsed fields
//! 5. **Merge** - fill-only enrichment from the reference
//! 6. **Post-enrich** - lookups that need merged values
//! 7. **Project** - shape the output columns
//!
//! Brands that need their reference stop after step 3 when none is found.
//! Any error aborts the invocation; nothing partial is returned.

use std::time::Instant;

use catalog_ingest::ReferenceSet;
use catalog_model::{
    Brand, BrandProfile, Diagnostic, MergePartition, MissingReference, codes,
};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::brand_processors::{BrandProcessor, default_registry};
use crate::error::{CleanError, Result};
use crate::frame::{ensure_columns, reorder_rows};
use crate::merge::{ReferenceIndex, apply_pass};
use crate::outcome::{CleanOutcome, EnrichmentSummary};
use crate::project::project;
use crate::reference::resolve_reference;
use crate::schema::validate_schema;
use crate::state::CleanState;

/// Knobs that do not change which values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanOptions {
    /// Put rows back in input order after a partitioned merge. When off,
    /// rows come out grouped by partition.
    pub restore_row_order: bool,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            restore_row_order: true,
        }
    }
}

/// Normalizer for one brand.
///
/// Holds only immutable configuration, so one instance can clean any number
/// of tables.
pub struct Cleaner {
    brand: Brand,
    profile: &'static BrandProfile,
    processor: &'static dyn BrandProcessor,
    options: CleanOptions,
}

impl std::fmt::Debug for Cleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cleaner")
            .field("brand", &self.brand)
            .field("processor", &self.processor.description())
            .field("options", &self.options)
            .finish()
    }
}

impl Cleaner {
    /// Builds a cleaner from a brand code (case-insensitive, trimmed).
    pub fn new(code: &str) -> Result<Self> {
        Self::for_brand(Brand::parse_code(code)?)
    }

    pub fn for_brand(brand: Brand) -> Result<Self> {
        let processor = default_registry()
            .get(brand)
            .ok_or_else(|| CleanError::UnsupportedBrand {
                code: brand.code().to_string(),
            })?;
        Ok(Self {
            brand,
            profile: brand.profile(),
            processor,
            options: CleanOptions::default(),
        })
    }

    #[must_use]
    pub fn with_options(mut self, options: CleanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn profile(&self) -> &'static BrandProfile {
        self.profile
    }

    /// Cleans `input` using the brand's collection from `references`.
    ///
    /// The input and the references are only read.
    pub fn clean(&self, input: &DataFrame, references: &ReferenceSet) -> Result<CleanOutcome> {
        let span = info_span!("clean", brand = %self.brand, rows = input.height());
        let _guard = span.enter();
        let start = Instant::now();

        validate_schema(input)?;

        let mut state = CleanState::new();
        let reference = resolve_reference(self.profile, references);
        match reference {
            Some(found) => info!(
                collection = found.name,
                rows = found.data.height(),
                "resolved reference collection"
            ),
            None => state.push(Diagnostic::warning(
                codes::REFERENCE_NOT_FOUND,
                format!(
                    "no reference collection found for {}",
                    self.profile.display_name
                ),
            )),
        }

        let mut df = input.clone();
        let mut summary = EnrichmentSummary::new(df.height());

        if reference.is_none() && self.profile.missing_reference == MissingReference::ParseOnly {
            self.processor.parse(&mut df, &mut state)?;
            info!(
                rows = df.height(),
                duration_ms = start.elapsed().as_millis(),
                "parsed without reference; derivation and enrichment skipped"
            );
            return Ok(CleanOutcome {
                data: df,
                diagnostics: state.diagnostics,
                enrichment: summary,
                reference: None,
            });
        }

        ensure_columns(&mut df, self.profile.placeholder_columns)?;
        self.processor.parse(&mut df, &mut state)?;
        self.processor.derive(&mut df, &mut state)?;
        debug!(columns = df.width(), "parsed and derived");

        if let Some(found) = reference
            && self.profile.has_enrichment()
        {
            df = self.enrich(df, found.data, &mut state, &mut summary)?;
        }

        self.processor.post_enrich(&mut df, &mut state)?;
        let data = project(&df, self.profile)?;

        info!(
            rows = data.height(),
            columns = data.width(),
            enriched_rows = summary.enriched_rows,
            duration_ms = start.elapsed().as_millis(),
            "clean complete"
        );
        Ok(CleanOutcome {
            data,
            diagnostics: state.diagnostics,
            enrichment: summary,
            reference: reference.map(|found| found.name.to_string()),
        })
    }

    fn enrich(
        &self,
        mut df: DataFrame,
        reference: &DataFrame,
        state: &mut CleanState,
        summary: &mut EnrichmentSummary,
    ) -> Result<DataFrame> {
        let height = df.height();
        let mut gained = vec![false; height];
        let mut passes_run = 0;
        let mut regroup: Option<Vec<usize>> = None;

        for pass in self.profile.enrichment {
            let Some(index) = ReferenceIndex::build(reference, pass)? else {
                state.push(Diagnostic::error(
                    codes::REFERENCE_KEY_MISSING,
                    format!("reference collection has no {} column; merge skipped", pass.key),
                ));
                continue;
            };
            let groups = row_groups(pass.partition, state, height);
            let report = apply_pass(&mut df, &index, pass.trim_keys, &groups)?;
            debug!(
                key = pass.key,
                reference_keys = index.len(),
                matched_rows = report.matched_rows,
                filled_cells = report.filled_cells,
                "merge pass"
            );

            if passes_run == 0 {
                summary.reference_keys = index.len();
            }
            passes_run += 1;
            summary.filled_cells += report.filled_cells;
            for (total, row) in gained.iter_mut().zip(&report.gained) {
                *total |= *row;
            }
            if pass.partition != MergePartition::Whole && !self.options.restore_row_order {
                regroup = Some(groups.concat());
            }
        }

        if passes_run > 0 {
            summary.enriched_rows = gained.iter().filter(|g| **g).count();
            state.push(
                Diagnostic::info(
                    codes::ENRICHMENT,
                    format!(
                        "{}: enriched {} of {} rows using {} reference keys",
                        self.profile.display_name,
                        summary.enriched_rows,
                        summary.total_rows,
                        summary.reference_keys
                    ),
                )
                .with_rows(summary.enriched_rows),
            );
        }

        match regroup {
            Some(order) => reorder_rows(&df, &order),
            None => Ok(df),
        }
    }
}

/// Row groups merged independently for a partition scheme.
fn row_groups(partition: MergePartition, state: &CleanState, height: usize) -> Vec<Vec<usize>> {
    match (partition, state.style_validity.as_deref()) {
        (MergePartition::ByStyleValidity, Some(validity)) => {
            let (valid, invalid): (Vec<usize>, Vec<usize>) =
                (0..height).partition(|&row| validity.get(row).copied().unwrap_or(false));
            vec![valid, invalid]
        }
        _ => vec![(0..height).collect()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_split_by_validity() {
        let state = CleanState {
            style_validity: Some(vec![false, true, true, false]),
            ..CleanState::default()
        };
        assert_eq!(
            row_groups(MergePartition::ByStyleValidity, &state, 4),
            vec![vec![1, 2], vec![0, 3]]
        );
        assert_eq!(row_groups(MergePartition::Whole, &state, 2), vec![vec![0, 1]]);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = Cleaner::new("zz").unwrap_err();
        assert!(matches!(err, CleanError::UnsupportedBrand { ref code } if code == "zz"));
    }

    #[test]
    fn code_is_normalized() {
        assert_eq!(Cleaner::new(" sk ").unwrap().brand(), Brand::Sk);
    }
}
