use clap::Parser;
use pdbench_status::utils::{logger, validation::Validate};
use pdbench_status::{CliConfig, StatusError, StatusPrinter};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pdbench-status");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!("❌ {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<(), StatusError> {
    let config = cli.resolve()?;
    config.validate()?;

    StatusPrinter::new(config).run()
}
