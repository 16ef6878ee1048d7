//! Reference collections.
//!
//! A reference collection is a table exported from the attribute store, one
//! file per collection. The collection name is the file stem, so
//! `Catalogo Cole Haan.json` becomes the collection `Catalogo Cole Haan`.

use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::csv::{normalize_headers, read_csv_table};
use crate::error::{IngestError, Result};
use crate::polars_utils::string_frame;

/// Named reference tables in load order.
///
/// Lookups that scan the set (see the resolver in `catalog-core`) honor
/// insertion order, so the first matching collection wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    collections: Vec<(String, DataFrame)>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a collection, replacing any existing one with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, data: DataFrame) {
        let name = name.into();
        if let Some(slot) = self.collections.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = data;
        } else {
            self.collections.push((name, data));
        }
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_collection(mut self, name: impl Into<String>, data: DataFrame) -> Self {
        self.insert(name, data);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DataFrame> {
        self.collections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, df)| df)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DataFrame)> {
        self.collections.iter().map(|(n, df)| (n.as_str(), df))
    }

    pub fn names(&self) -> Vec<&str> {
        self.collections.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, DataFrame)> for ReferenceSet {
    fn from_iter<T: IntoIterator<Item = (S, DataFrame)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (name, df) in iter {
            set.insert(name, df);
        }
        set
    }
}

/// Lists `*.csv` and `*.json` files in a directory, sorted by file name.
pub fn list_reference_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_reference = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("json"));
        if is_reference {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Loads every collection file in `dir`.
///
/// `limit` caps the rows kept per collection.
pub fn load_reference_dir(dir: &Path, limit: Option<usize>) -> Result<ReferenceSet> {
    let mut set = ReferenceSet::new();
    for path in list_reference_files(dir)? {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let mut df = load_reference_file(&path)?;
        if let Some(limit) = limit {
            df = df.head(Some(limit));
        }
        debug!(
            collection = name,
            rows = df.height(),
            columns = df.width(),
            "loaded reference collection"
        );
        set.insert(name, df);
    }
    info!(
        dir = %dir.display(),
        collections = set.len(),
        "loaded reference collections"
    );
    Ok(set)
}

/// Loads a single collection file (`.csv` or `.json`).
pub fn load_reference_file(path: &Path) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "csv" => read_csv_table(path),
        "json" => read_json_collection(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        }),
    }
}

/// Reads a JSON export: either one array of documents or one document per line.
pub fn read_json_collection(path: &Path) -> Result<DataFrame> {
    let text = fs::read_to_string(path).map_err(|e| IngestError::open(path, e))?;
    let documents = parse_documents(&text).map_err(|message| IngestError::Json {
        path: path.to_path_buf(),
        message,
    })?;
    documents_to_frame(&documents)
}

fn parse_documents(text: &str) -> std::result::Result<Vec<Map<String, Value>>, String> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('[') {
        let value: Value = serde_json::from_str(trimmed).map_err(|e| e.to_string())?;
        let Value::Array(items) = value else {
            return Err("expected a JSON array".to_string());
        };
        return items.into_iter().map(into_document).collect();
    }
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let value: Value =
                serde_json::from_str(line).map_err(|e| format!("line {}: {e}", idx + 1))?;
            into_document(value)
        })
        .collect()
}

fn into_document(value: Value) -> std::result::Result<Map<String, Value>, String> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected an object, found {other}")),
    }
}

/// Renders a JSON value as a cell.
///
/// Extended-JSON wrappers such as `{"$oid": "..."}` collapse to their inner
/// scalar.
fn value_to_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) if map.len() == 1 => {
            let (key, inner) = map.iter().next()?;
            if key.starts_with('$') {
                value_to_cell(inner)
            } else {
                Some(value.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

fn documents_to_frame(documents: &[Map<String, Value>]) -> Result<DataFrame> {
    let mut keys: Vec<String> = Vec::new();
    for doc in documents {
        for key in doc.keys() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    let rows: Vec<Vec<Option<String>>> = documents
        .iter()
        .map(|doc| {
            keys.iter()
                .map(|key| doc.get(key).and_then(value_to_cell))
                .collect()
        })
        .collect();
    let headers = normalize_headers(&keys);
    Ok(string_frame(&headers, &rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame(values: &[&str]) -> DataFrame {
        DataFrame::new(vec![
            Series::new("U_Estilo".into(), values.to_vec()).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn insertion_order_is_kept() {
        let set: ReferenceSet = vec![("Zeta", frame(&["A"])), ("Alpha", frame(&["B"]))]
            .into_iter()
            .collect();
        assert_eq!(set.names(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn insert_replaces_same_name() {
        let set = ReferenceSet::new()
            .with_collection("Catalogo", frame(&["A"]))
            .with_collection("Otro", frame(&["B"]))
            .with_collection("Catalogo", frame(&["C", "D"]));
        assert_eq!(set.len(), 2);
        assert_eq!(set.names(), vec!["Catalogo", "Otro"]);
        assert_eq!(set.get("Catalogo").unwrap().height(), 2);
    }

    #[test]
    fn json_array_and_lines_parse_alike() {
        let array = r#"[{"U_Estilo": "F100", "U_Zone": "A"}, {"U_Estilo": "W2", "U_Zone": null}]"#;
        let lines = "{\"U_Estilo\": \"F100\", \"U_Zone\": \"A\"}\n\n{\"U_Estilo\": \"W2\", \"U_Zone\": null}\n";
        let a = documents_to_frame(&parse_documents(array).unwrap()).unwrap();
        let b = documents_to_frame(&parse_documents(lines).unwrap()).unwrap();
        assert!(a.equals_missing(&b));
        assert_eq!(a.column("U_Zone").unwrap().null_count(), 1);
    }

    #[test]
    fn extended_json_wrappers_unwrap() {
        let value: Value = serde_json::from_str(r#"{"$oid": "65f0c2"}"#).unwrap();
        assert_eq!(value_to_cell(&value), Some("65f0c2".to_string()));
        let number: Value = serde_json::from_str("312345").unwrap();
        assert_eq!(value_to_cell(&number), Some("312345".to_string()));
    }

    #[test]
    fn scalar_json_is_rejected() {
        assert!(parse_documents("[1, 2]").is_err());
    }
}
