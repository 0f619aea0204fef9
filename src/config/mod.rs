pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "datatypes-fixture")]
#[command(about = "Serve and query canned datatype API responses")]
pub struct CliConfig {
    /// Endpoint path to print, e.g. api/datatypes/mapping
    #[arg(long)]
    pub path: Option<String>,

    /// List registered endpoint paths
    #[arg(long)]
    pub list: bool,

    /// Resolve a file extension to its datatype class
    #[arg(long)]
    pub extension: Option<String>,

    /// With --extension, check whether the extension satisfies this class
    #[arg(long, requires = "extension")]
    pub class: Option<String>,

    #[arg(long, help = "Pretty-print JSON bodies")]
    pub pretty: bool,

    /// Query a live server instead of the built-in fixture
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout for --base-url (default 30)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數優先，TOML 只補上未設定的值
    pub fn apply_toml(&mut self, toml: &toml_config::TomlConfig) {
        if self.base_url.is_none() {
            self.base_url = toml.base_url().map(str::to_string);
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = toml.source.timeout_seconds;
        }
        self.pretty |= toml.pretty();
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn pretty(&self) -> bool {
        self.pretty
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.base_url {
            validate_url("base_url", url)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
