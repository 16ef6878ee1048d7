//! Splitting `ItemName` into positional attributes.
//!
//! A composite name such as `F100/Backpack/OS` carries the style key, the
//! description and sometimes a size and a color. Parsing never fails: a
//! name without the delimiter yields no fields at all, and missing trailing
//! fields are simply absent.

use std::sync::LazyLock;

use regex::Regex;

/// Size annotations such as `Americana 10` or `americana9.5` embedded in
/// descriptions.
static AMERICANA_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)americana\s*\d+(?:\.\d+)?").expect("Invalid americana size regex")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Attributes read out of one `ItemName`.
///
/// Every field is optional; which ones a brand fills depends on its layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    pub style: Option<String>,
    pub style_color: Option<String>,
    pub description: Option<String>,
    pub talla: Option<String>,
    pub descrip_color: Option<String>,
}

/// Splits `value` on `delimiter`, or `None` when the delimiter is absent.
pub fn split_fields(value: &str, delimiter: char) -> Option<Vec<&str>> {
    value
        .contains(delimiter)
        .then(|| value.split(delimiter).collect())
}

/// Like [`split_fields`], keeping at most `limit` fields; the last one holds
/// the remainder.
pub fn split_fields_n(value: &str, delimiter: char, limit: usize) -> Option<Vec<&str>> {
    value
        .contains(delimiter)
        .then(|| value.splitn(limit, delimiter).collect())
}

/// Field `idx` of a split name, as an owned string.
pub fn field(fields: Option<&[&str]>, idx: usize) -> Option<String> {
    fields
        .and_then(|fields| fields.get(idx))
        .map(|value| (*value).to_string())
}

/// Positional `/` layout shared by most brands: style, description, size,
/// color description.
pub fn parse_slash_layout(name: Option<&str>) -> ParsedName {
    let fields = name.and_then(|name| split_fields(name, '/'));
    let fields = fields.as_deref();
    ParsedName {
        style: field(fields, 0),
        style_color: None,
        description: field(fields, 1),
        talla: field(fields, 2),
        descrip_color: field(fields, 3),
    }
}

/// Removes `americana <size>` annotations.
pub fn strip_americana(value: &str) -> String {
    AMERICANA_SIZE.replace_all(value, "").into_owned()
}

/// Collapses runs of whitespace to one space and trims the ends.
pub fn collapse_whitespace(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, " ").trim().to_string()
}

/// A style key is usable when it has at least two characters and starts
/// with a letter or digit.
pub fn is_valid_style(style: &str) -> bool {
    let mut chars = style.chars();
    match chars.next() {
        Some(first) => first.is_alphanumeric() && chars.next().is_some(),
        None => false,
    }
}
