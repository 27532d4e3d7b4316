use crate::config::toml_config::{FleetConfig, SerialStrategy, SummaryFormat};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "container-fleet")]
#[command(about = "Interactive inventory of container ships and their cargo containers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    /// Skip the start-up demo scenario
    #[arg(long)]
    pub no_demo: bool,

    #[arg(long, value_enum)]
    pub serial_strategy: Option<SerialStrategy>,

    #[arg(long, value_enum)]
    pub summary_format: Option<SummaryFormat>,
}

impl CliConfig {
    /// 載入設定檔（若有指定），再套用命令列覆蓋
    pub fn resolve(&self) -> Result<FleetConfig> {
        let mut config = match &self.config {
            Some(path) => FleetConfig::from_file(path)?,
            None => FleetConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut FleetConfig) {
        if self.verbose {
            config.logging.verbose = true;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.no_demo {
            config.shell.run_demo = false;
        }
        if let Some(strategy) = self.serial_strategy {
            config.serial.strategy = strategy;
        }
        if let Some(format) = self.summary_format {
            config.shell.summary_format = format;
        }
    }
}
