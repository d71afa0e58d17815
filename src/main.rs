use clap::Parser;
use person_weather::utils::{logger, validation::Validate};
use person_weather::{CliConfig, ReportEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting person-weather CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證命令列參數 (--name 與 --age 需同時提供)
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let input = match config.resolve() {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("❌ Failed to load input: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 驗證合併後的輸入 (包含設定檔中的人員)
    if let Err(e) = input.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let engine = ReportEngine::new(input);
    match engine.run_and_render() {
        Ok(rendered) => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            tracing::error!("❌ Rendering failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
