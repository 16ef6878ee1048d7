//! Header normalization.

use std::collections::HashMap;

/// Normalizes a header value by trimming whitespace and a stray BOM.
fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Normalizes a header row so every column name is non-empty and unique.
///
/// Blank names become `Unnamed: <index>`; repeated names get `.1`, `.2`, ...
/// suffixes in order of appearance, so the first occurrence keeps its name.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();
    for (idx, value) in raw.into_iter().enumerate() {
        let mut name = normalize_header(value.as_ref());
        if name.is_empty() {
            name = format!("Unnamed: {idx}");
        }
        let count = seen.entry(name.clone()).or_insert(0);
        if *count > 0 {
            let renamed = format!("{name}.{count}");
            *count += 1;
            headers.push(renamed);
        } else {
            *count = 1;
            headers.push(name);
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  ItemName  "), "ItemName");
        assert_eq!(normalize_header("\u{feff}ItemName"), "ItemName");
    }

    #[test]
    fn duplicates_get_suffixes() {
        let headers = normalize_headers(["ItemName", "U_Estilo", "U_Estilo", "U_Estilo"]);
        assert_eq!(headers, vec!["ItemName", "U_Estilo", "U_Estilo.1", "U_Estilo.2"]);
    }

    #[test]
    fn blank_headers_are_named_by_position() {
        let headers = normalize_headers(["ItemName", "", "Empresa"]);
        assert_eq!(headers, vec!["ItemName", "Unnamed: 1", "Empresa"]);
    }
}
