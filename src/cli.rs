use crate::config::toml_config::TomlConfig;
use crate::config::CliConfig;
use crate::core::fixture::FixtureTable;
use crate::core::service::DatatypesService;
use crate::core::{DatatypesSource, Endpoint};
use crate::utils::error::{ErrorSeverity, FixtureError, Result};
use std::io::Write;

/// Answers one CLI query, writing the result to `out`.
pub async fn run<S: DatatypesSource, W: Write>(
    config: &CliConfig,
    service: &DatatypesService<S>,
    out: &mut W,
) -> Result<()> {
    if let Some(path) = &config.path {
        let body = service.source().fetch(path).await?;
        if config.pretty {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        } else {
            writeln!(out, "{}", body)?;
        }
        return Ok(());
    }

    if let Some(ext) = &config.extension {
        let registry = service.registry().await?;
        match (registry.class_for_extension(ext), &config.class) {
            (Some(own), Some(class)) => writeln!(
                out,
                "{} ({}) -> {}: {}",
                ext,
                own,
                class,
                registry.extension_matches(ext, class)
            )?,
            (Some(own), None) => writeln!(
                out,
                "{} -> {} [{}]",
                ext,
                own,
                registry.ancestors(own).join(", ")
            )?,
            (None, _) => {
                return Err(FixtureError::NotFound {
                    path: format!("extension '{}'", ext),
                })
            }
        }
        return Ok(());
    }

    if config.list {
        if config.base_url.is_some() {
            // 逐一請求，確認伺服器真的提供這些端點
            for endpoint in Endpoint::ALL {
                service.source().fetch(endpoint.path()).await?;
                writeln!(out, "{}", endpoint.path())?;
            }
        } else {
            for path in FixtureTable::global().paths() {
                writeln!(out, "{}", path)?;
            }
        }
        return Ok(());
    }

    Err(FixtureError::ConfigValidationError {
        field: "query".to_string(),
        message: "one of --path, --list or --extension is required".to_string(),
    })
}

/// 根據錯誤嚴重程度決定退出碼
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

/// `--verbose` wins, then `output.log_level` from TOML, then `info`.
pub fn log_level<'a>(config: &CliConfig, toml: Option<&'a TomlConfig>) -> &'a str {
    match (toml, config.verbose) {
        (_, true) => "debug",
        (Some(toml), false) => toml.log_level(),
        (None, false) => "info",
    }
}
