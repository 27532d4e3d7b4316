use crate::adapters::serial::{RandomSerialGenerator, SequentialSerialGenerator, DEFAULT_PREFIX, DEFAULT_SUFFIX_LENGTH};
use crate::core::ship::ContainerShip;
use crate::domain::model::ShipSpec;
use crate::domain::ports::SerialNumberSource;
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_SUFFIX_LENGTH: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetConfig {
    pub serial: SerialConfig,
    pub shell: ShellConfig,
    pub logging: LoggingConfig,
    /// 啟動時預先登錄的船隻
    pub ships: Vec<ShipSpec>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SerialStrategy {
    #[default]
    Random,
    Sequential,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerialConfig {
    pub prefix: String,
    pub strategy: SerialStrategy,
    pub suffix_length: usize,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            strategy: SerialStrategy::Random,
            suffix_length: DEFAULT_SUFFIX_LENGTH,
        }
    }
}

impl SerialConfig {
    pub fn build_source(&self) -> Box<dyn SerialNumberSource> {
        match self.strategy {
            SerialStrategy::Random => Box::new(RandomSerialGenerator::new(
                self.prefix.clone(),
                self.suffix_length,
            )),
            SerialStrategy::Sequential => Box::new(SequentialSerialGenerator::new(
                self.prefix.clone(),
                self.suffix_length,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub prompt: String,
    pub run_demo: bool,
    pub summary_format: SummaryFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            run_demo: true,
            summary_format: SummaryFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
    pub json: bool,
}

impl FleetConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FleetError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FleetError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FLEET_PREFIX})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FleetError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("serial.prefix", &self.serial.prefix)?;
        validate_range(
            "serial.suffix_length",
            self.serial.suffix_length,
            1,
            MAX_SUFFIX_LENGTH,
        )?;

        for (i, spec) in self.ships.iter().enumerate() {
            ContainerShip::from_spec(spec.clone()).map_err(|e| {
                FleetError::ConfigValidationError {
                    field: format!("ships[{}]", i),
                    message: e.to_string(),
                }
            })?;
        }

        Ok(())
    }
}

impl Validate for FleetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
