use anyhow::Context;
use clap::Parser;
use container_fleet::utils::error::ErrorSeverity;
use container_fleet::utils::{logger, validation::Validate};
use container_fleet::{run_demo, CliConfig, ConsoleReporter, FleetManager, FleetShell};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(config.logging.verbose);
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::info!("Starting container-fleet");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut fleet = FleetManager::new(config.serial.build_source(), ConsoleReporter::stdout());
    for spec in &config.ships {
        fleet
            .add_ship(spec.clone())
            .with_context(|| format!("failed to register preset ship '{}'", spec.name))?;
    }

    let stdin = io::stdin();
    let mut shell = FleetShell::new(stdin.lock(), io::stdout(), &config.shell);

    if config.shell.run_demo {
        let index = run_demo(&mut fleet).context("demo scenario failed")?;
        shell.show_summary(&mut fleet, index)?;
    }

    if let Err(e) = shell.run(&mut fleet) {
        tracing::error!(
            "❌ Session ended with an error: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

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

    tracing::info!("✅ Session finished with {} ships registered", fleet.registry().len());
    Ok(())
}
