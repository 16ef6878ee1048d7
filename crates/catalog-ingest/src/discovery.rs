//! Brand detection from upload file names.

use std::sync::LazyLock;

use catalog_model::Brand;
use regex::Regex;

/// Lot marker: `L`, a lot number, then a two-letter brand code.
static LOT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"L\d+([A-Z]{2})").expect("Invalid lot marker regex"));

/// Brands recognised by a bare code anywhere in the name, in priority order.
const DIRECT_CODES: [Brand; 4] = [Brand::Ch, Brand::Cl, Brand::Ne, Brand::Sk];

/// Guesses the brand of an upload from its file name.
///
/// A lot marker such as `L1CH` or `L12SK` wins when its two letters name a
/// supported brand. Otherwise the first of `CH`, `CL`, `NE`, `SK` found in
/// the upper-cased name is used.
///
/// ```
/// use catalog_ingest::detect_brand_from_filename;
/// use catalog_model::Brand;
///
/// assert_eq!(detect_brand_from_filename("carga_L2SK_octubre.csv"), Some(Brand::Sk));
/// assert_eq!(detect_brand_from_filename("items_ne.xlsx"), Some(Brand::Ne));
/// assert_eq!(detect_brand_from_filename("inventario.csv"), None);
/// ```
pub fn detect_brand_from_filename(name: &str) -> Option<Brand> {
    let upper = name.to_uppercase();
    if let Some(code) = LOT_MARKER
        .captures(&upper)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Brand::parse_code(m.as_str()).ok())
    {
        return Some(code);
    }
    DIRECT_CODES
        .into_iter()
        .find(|brand| upper.contains(brand.code()))
}
