use clap::Parser;
use design_patterns::utils::{logger, validation::Validate};
use design_patterns::{build_runner, CliArgs, ConsoleNarrator, LocalStorage};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(args.verbose, &config.logging.level, config.logging.format);

    tracing::info!("Starting design-patterns");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let runner = build_runner(&config, LocalStorage::default(), Arc::new(ConsoleNarrator));
    tracing::debug!("Examples to run: {:?}", runner.names());

    match runner.run().await {
        Ok(count) => {
            tracing::info!("✅ {} example(s) completed", count);
        }
        Err(e) => {
            tracing::error!(
                "❌ Example run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
