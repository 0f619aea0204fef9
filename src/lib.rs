#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{
    fixture::{Entry, FixtureTable},
    http_source::HttpSource,
    registry::DatatypeRegistry,
    service::DatatypesService,
};
pub use crate::domain::model::{DatatypeExtensions, DatatypesMapping, Endpoint};
pub use crate::domain::ports::DatatypesSource;
pub use crate::utils::error::{FixtureError, Result};

/// Shorthand for `FixtureTable::global().lookup(path)`.
pub fn lookup(path: &str) -> Option<&'static str> {
    FixtureTable::global().lookup(path)
}
