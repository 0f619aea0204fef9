//! Canned responses for the datatype endpoints.
//!
//! The table is built once on first use and never mutated afterwards, so
//! `FixtureTable::global()` can be read from any thread without locking.
//! Bodies are stored as the exact JSON text a server would send; decoding
//! happens only when a caller asks for it via [`Entry::parse`].

use crate::core::DatatypesSource;
use crate::utils::error::{FixtureError, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

const MAPPING_BODY: &str = r#"{"ext_to_class_name" : {"txt" : "Text", "data":"Data","tabular":"Tabular", "binary": "Binary", "bam": "Bam" }, "class_to_classes": { "Data": { "Data": true }, "Text": { "Text": true, "Data": true }, "Tabular": { "Tabular": true, "Text": true, "Data": true }, "Binary": { "Data": true, "Binary": true }, "Bam": { "Data": true, "Binary": true, "Bam": true }}}"#;

const EXTENSIONS_BODY: &str = r#"["RData", "ab1", "affybatch", "txt"]"#;

const ENTRIES: [(&str, Entry); 2] = [
    ("api/datatypes/mapping", Entry { data: MAPPING_BODY }),
    ("api/datatypes", Entry { data: EXTENSIONS_BODY }),
];

static GLOBAL: Lazy<FixtureTable> = Lazy::new(FixtureTable::new);

/// A single registered response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub data: &'static str,
}

impl Entry {
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(self.data)?)
    }
}

#[derive(Debug)]
pub struct FixtureTable {
    entries: HashMap<&'static str, Entry>,
}

impl FixtureTable {
    fn new() -> Self {
        let entries: HashMap<_, _> = ENTRIES.into_iter().collect();
        tracing::debug!("Fixture table loaded with {} entries", entries.len());
        Self { entries }
    }

    pub fn global() -> &'static FixtureTable {
        &GLOBAL
    }

    /// Exact-match lookup. Unregistered paths yield `None`.
    pub fn lookup(&self, path: &str) -> Option<&'static str> {
        self.entry(path).map(|entry| entry.data)
    }

    pub fn entry(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Like [`lookup`](Self::lookup), but accepts a request path as an HTTP
    /// layer sees it: leading slashes and any query string are ignored.
    pub fn resolve(&self, request_path: &str) -> Option<&'static str> {
        let path = request_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_start_matches('/');
        self.lookup(path)
    }

    /// Registered paths, sorted.
    pub fn paths(&self) -> Vec<&'static str> {
        let mut paths: Vec<_> = self.entries.keys().copied().collect();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl DatatypesSource for FixtureTable {
    async fn fetch(&self, path: &str) -> Result<String> {
        match self.resolve(path) {
            Some(body) => Ok(body.to_string()),
            None => {
                tracing::warn!("No fixture registered for {}", path);
                Err(FixtureError::NotFound {
                    path: path.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DatatypeExtensions, DatatypesMapping, Endpoint};

    #[test]
    fn test_mapping_has_both_sections() {
        let body = crate::lookup("api/datatypes/mapping").unwrap();
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert!(value.get("ext_to_class_name").is_some());
        assert!(value.get("class_to_classes").is_some());
    }

    #[test]
    fn test_txt_maps_to_text() {
        let mapping: DatatypesMapping = FixtureTable::global()
            .entry(Endpoint::Mapping.path())
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(mapping.ext_to_class_name["txt"], "Text");
    }

    #[test]
    fn test_bam_hierarchy() {
        let mapping: DatatypesMapping = FixtureTable::global()
            .entry("api/datatypes/mapping")
            .unwrap()
            .parse()
            .unwrap();
        let bam = &mapping.class_to_classes["Bam"];
        assert_eq!(bam.len(), 3);
        for class in ["Data", "Binary", "Bam"] {
            assert_eq!(bam.get(class), Some(&true));
        }
    }

    #[test]
    fn test_extension_list() {
        let exts: DatatypeExtensions = FixtureTable::global()
            .entry("api/datatypes")
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(exts.0, vec!["RData", "ab1", "affybatch", "txt"]);
    }

    #[test]
    fn test_body_is_byte_exact() {
        assert_eq!(
            FixtureTable::global().lookup("api/datatypes"),
            Some(r#"["RData", "ab1", "affybatch", "txt"]"#)
        );
        assert!(FixtureTable::global()
            .lookup("api/datatypes/mapping")
            .unwrap()
            .starts_with(r#"{"ext_to_class_name" : {"txt" : "Text", "data":"Data""#));
    }

    #[test]
    fn test_unknown_path_is_absent() {
        let table = FixtureTable::global();
        assert_eq!(table.lookup("nonexistent/path"), None);
        assert_eq!(table.lookup(""), None);
        // lookup 不做正規化
        assert_eq!(table.lookup("/api/datatypes"), None);
        assert_eq!(table.lookup("api/datatypes/"), None);
    }

    #[test]
    fn test_repeated_lookups_return_same_string() {
        let table = FixtureTable::global();
        let first = table.lookup("api/datatypes/mapping").unwrap();
        for _ in 0..10 {
            let again = table.lookup("api/datatypes/mapping").unwrap();
            assert_eq!(first, again);
            assert!(std::ptr::eq(first, again));
        }
    }

    #[test]
    fn test_every_body_is_well_formed_json() {
        let table = FixtureTable::global();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        for path in table.paths() {
            let parsed: serde_json::Result<serde_json::Value> =
                serde_json::from_str(table.lookup(path).unwrap());
            assert!(parsed.is_ok(), "{} is not valid JSON", path);
        }
    }

    #[test]
    fn test_resolve_strips_request_decoration() {
        let table = FixtureTable::global();
        assert_eq!(table.resolve("/api/datatypes"), table.lookup("api/datatypes"));
        assert_eq!(
            table.resolve("/api/datatypes/mapping?upload_only=true"),
            table.lookup("api/datatypes/mapping")
        );
        assert_eq!(table.resolve("/api/histories"), None);
    }

    #[test]
    fn test_concurrent_reads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| FixtureTable::global().lookup("api/datatypes").unwrap())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), EXTENSIONS_BODY);
        }
    }

    #[tokio::test]
    async fn test_fetch_miss_is_not_found() {
        let err = FixtureTable::global()
            .fetch("nonexistent/path")
            .await
            .unwrap_err();
        assert!(matches!(err, FixtureError::NotFound { ref path } if path == "nonexistent/path"));
    }

    #[tokio::test]
    async fn test_fetch_hit_returns_body() {
        let body = FixtureTable::global().fetch("api/datatypes").await.unwrap();
        assert_eq!(body, EXTENSIONS_BODY);
    }
}
