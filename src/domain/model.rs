use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The datatype endpoints a server exposes to its web client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Extension -> class name, plus the class hierarchy.
    Mapping,
    /// Flat list of known extensions.
    Extensions,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Mapping, Endpoint::Extensions];

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Mapping => "api/datatypes/mapping",
            Endpoint::Extensions => "api/datatypes",
        }
    }
}

/// Body of `api/datatypes/mapping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatatypesMapping {
    pub ext_to_class_name: BTreeMap<String, String>,
    pub class_to_classes: BTreeMap<String, BTreeMap<String, bool>>,
}

/// Body of `api/datatypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatatypeExtensions(pub Vec<String>);

impl DatatypeExtensions {
    pub fn contains(&self, ext: &str) -> bool {
        self.0.iter().any(|e| e == ext)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths_are_distinct() {
        assert_eq!(Endpoint::Mapping.path(), "api/datatypes/mapping");
        assert_eq!(Endpoint::Extensions.path(), "api/datatypes");
        assert_ne!(Endpoint::ALL[0].path(), Endpoint::ALL[1].path());
    }

    #[test]
    fn test_extensions_deserialize_from_bare_array() {
        let exts: DatatypeExtensions = serde_json::from_str(r#"["bed", "vcf"]"#).unwrap();
        assert_eq!(exts.len(), 2);
        assert!(exts.contains("vcf"));
        assert!(!exts.contains("bam"));
    }

    #[test]
    fn test_mapping_rejects_missing_hierarchy() {
        let result: serde_json::Result<DatatypesMapping> =
            serde_json::from_str(r#"{"ext_to_class_name": {"txt": "Text"}}"#);
        assert!(result.is_err());
    }
}
