//! Brand record normalization.
//!
//! Takes a raw catalog table and a set of reference collections and returns
//! a cleaned table for one brand: `ItemName` parsed into attributes,
//! categorical columns derived, missing attributes filled from the brand's
//! reference collection, and columns shaped to the brand's schema.
//!
//! ```ignore
//! use catalog_core::Cleaner;
//!
//! let outcome = Cleaner::new("ch")?.clean(&table, &references)?;
//! for diagnostic in &outcome.diagnostics {
//!     println!("{}: {}", diagnostic.code, diagnostic.message);
//! }
//! ```

pub mod brand_processors;
pub mod error;
pub mod frame;
pub mod merge;
pub mod outcome;
pub mod parse;
pub mod pipeline;
pub mod project;
pub mod reference;
pub mod rules;
pub mod schema;
pub mod state;

pub use brand_processors::{BrandProcessor, ProcessorRegistry, default_registry};
pub use error::{CleanError, Result};
pub use merge::{MergeReport, ReferenceIndex};
pub use outcome::{CleanOutcome, EnrichmentSummary};
pub use parse::ParsedName;
pub use pipeline::{CleanOptions, Cleaner};
pub use reference::{ResolvedReference, resolve_reference};
pub use schema::{missing_columns, validate_schema};
pub use state::CleanState;
