use clap::Parser;
use dinosaur_facts::adapters::dataset_from_path;
use dinosaur_facts::utils::{logger, validation::Validate};
use dinosaur_facts::{CliConfig, DinoError, QueryEngine, Settings, TomlConfig};

fn main() {
    let config = CliConfig::parse();

    // 載入並驗證 TOML 配置
    let toml_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(toml_config) => toml_config,
        Err(e) => exit_with(&e),
    };
    if let Some(toml_config) = &toml_config {
        if let Err(e) = toml_config.validate() {
            exit_with(&e);
        }
    }

    // 初始化日誌
    let level = toml_config.as_ref().and_then(TomlConfig::log_level);
    if config.log_json || toml_config.as_ref().is_some_and(TomlConfig::log_json) {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(config.verbose, level);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = Settings::resolve(config.data.clone(), config.format, toml_config.as_ref());
    let source = dataset_from_path(settings.dataset_path.as_deref());
    let engine = QueryEngine::new(source, settings);

    match engine.run(&config.command.into()) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Query failed: {} (Category: {:?})", e, e.category());
            exit_with(&e);
        }
    }
}

fn exit_with(e: &DinoError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
