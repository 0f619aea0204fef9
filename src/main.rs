use anyhow::Context;
use clap::Parser;
use datatypes_fixture::cli::{self, exit_code};
use datatypes_fixture::config::toml_config::TomlConfig;
use datatypes_fixture::core::ConfigProvider;
use datatypes_fixture::utils::error::FixtureError;
use datatypes_fixture::utils::{logger, validation::Validate};
use datatypes_fixture::{CliConfig, DatatypesService, DatatypesSource, FixtureTable, HttpSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置（可選）
    let toml = match &config.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    // 初始化日誌
    let level = cli::log_level(&config, toml.as_ref());
    if config.json_logs {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    if let Some(toml) = &toml {
        if let Err(e) = toml.validate() {
            exit_with(&e);
        }
        config.apply_toml(toml);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }
    tracing::debug!("CLI config: {:?}", config);

    let source: Box<dyn DatatypesSource> = match config.base_url() {
        Some(base_url) => {
            tracing::info!("Querying live server at {}", base_url);
            match HttpSource::new(base_url, config.timeout_seconds()) {
                Ok(source) => Box::new(source),
                Err(e) => exit_with(&e),
            }
        }
        None => Box::new(FixtureTable::global()),
    };
    let service = DatatypesService::new(source);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = cli::run(&config, &service, &mut stdout).await {
        tracing::error!(
            "Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }

    Ok(())
}

fn exit_with(e: &FixtureError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()));
}
