use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can answer a datatype endpoint path with a raw response body.
#[async_trait]
pub trait DatatypesSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<String>;
}

#[async_trait]
impl<T: DatatypesSource + ?Sized> DatatypesSource for &T {
    async fn fetch(&self, path: &str) -> Result<String> {
        (**self).fetch(path).await
    }
}

#[async_trait]
impl<T: DatatypesSource + ?Sized> DatatypesSource for Box<T> {
    async fn fetch(&self, path: &str) -> Result<String> {
        (**self).fetch(path).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
    fn pretty(&self) -> bool;
}
