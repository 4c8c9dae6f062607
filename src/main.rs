use clap::Parser;
use klaviyo_models::app::inspect::{read_payload, render_payload, InspectOptions};
use klaviyo_models::utils::error::{ErrorSeverity, KlaviyoError};
use klaviyo_models::utils::{logger, validation::Validate};
use klaviyo_models::{CliConfig, ModelFactory, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting klaviyo-models CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Model build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<String, KlaviyoError> {
    // 載入 TOML 配置
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config
        }
        None => TomlConfig::default(),
    };

    let factory = ModelFactory::new(file_config.type_registry());
    let raw = read_payload(&config.input)?;

    let options = InspectOptions {
        model_type: config.model_type.clone(),
        unset: config.unset.clone(),
        pretty: config.pretty || file_config.pretty_output(),
    };

    render_payload(&factory, &raw, &options)
}
