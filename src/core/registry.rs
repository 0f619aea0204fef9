use crate::domain::model::DatatypesMapping;

/// Answers datatype questions over a decoded `api/datatypes/mapping` body.
#[derive(Debug, Clone)]
pub struct DatatypeRegistry {
    mapping: DatatypesMapping,
}

impl DatatypeRegistry {
    pub fn from_mapping(mapping: DatatypesMapping) -> Self {
        Self { mapping }
    }

    pub fn class_for_extension(&self, ext: &str) -> Option<&str> {
        self.mapping.ext_to_class_name.get(ext).map(String::as_str)
    }

    /// Classes `class` is considered an instance of, itself included. Sorted.
    pub fn ancestors(&self, class: &str) -> Vec<&str> {
        self.mapping
            .class_to_classes
            .get(class)
            .map(|parents| {
                parents
                    .iter()
                    .filter(|(_, is_parent)| **is_parent)
                    .map(|(name, _)| name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn is_subclass(&self, child: &str, parent: &str) -> bool {
        self.mapping
            .class_to_classes
            .get(child)
            .and_then(|parents| parents.get(parent))
            .copied()
            .unwrap_or(false)
    }

    /// Whether a dataset with extension `ext` can be used where `class` is expected.
    pub fn extension_matches(&self, ext: &str, class: &str) -> bool {
        match self.class_for_extension(ext) {
            Some(own) => self.is_subclass(own, class),
            None => {
                tracing::debug!("Unknown extension {}", ext);
                false
            }
        }
    }

    pub fn extensions(&self) -> Vec<&str> {
        self.mapping
            .ext_to_class_name
            .keys()
            .map(String::as_str)
            .collect()
    }

    pub fn mapping(&self) -> &DatatypesMapping {
        &self.mapping
    }
}
