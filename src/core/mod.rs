pub mod fixture;
pub mod http_source;
pub mod registry;
pub mod service;

pub use crate::domain::model::{DatatypeExtensions, DatatypesMapping, Endpoint};
pub use crate::domain::ports::{ConfigProvider, DatatypesSource};
pub use crate::utils::error::Result;
