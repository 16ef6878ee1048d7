//! Picks the reference collection that belongs to a brand.

use catalog_ingest::ReferenceSet;
use catalog_model::BrandProfile;
use polars::prelude::DataFrame;

/// The collection matched for a brand.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedReference<'a> {
    pub name: &'a str,
    pub data: &'a DataFrame,
}

/// Returns the first collection whose name contains the brand's display name,
/// compared case-insensitively.
///
/// A matching collection with no rows is treated as no match.
pub fn resolve_reference<'a>(
    profile: &BrandProfile,
    references: &'a ReferenceSet,
) -> Option<ResolvedReference<'a>> {
    let needle = profile.display_name.to_lowercase();
    references
        .iter()
        .find(|(name, _)| name.to_lowercase().contains(&needle))
        .filter(|(_, data)| data.height() > 0)
        .map(|(name, data)| ResolvedReference { name, data })
}
