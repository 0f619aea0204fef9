use crate::core::registry::DatatypeRegistry;
use crate::core::DatatypesSource;
use crate::domain::model::{DatatypeExtensions, DatatypesMapping, Endpoint};
use crate::utils::error::Result;

/// Typed access to the datatype endpoints of any [`DatatypesSource`].
pub struct DatatypesService<S: DatatypesSource> {
    source: S,
}

impl<S: DatatypesSource> DatatypesService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn raw(&self, endpoint: Endpoint) -> Result<String> {
        self.source.fetch(endpoint.path()).await
    }

    pub async fn mapping(&self) -> Result<DatatypesMapping> {
        let body = self.raw(Endpoint::Mapping).await?;
        let mapping: DatatypesMapping = serde_json::from_str(&body)?;
        tracing::debug!(
            "Decoded mapping: {} extensions, {} classes",
            mapping.ext_to_class_name.len(),
            mapping.class_to_classes.len()
        );
        Ok(mapping)
    }

    pub async fn extensions(&self) -> Result<DatatypeExtensions> {
        let body = self.raw(Endpoint::Extensions).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn registry(&self) -> Result<DatatypeRegistry> {
        Ok(DatatypeRegistry::from_mapping(self.mapping().await?))
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
