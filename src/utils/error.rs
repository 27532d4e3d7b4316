use thiserror::Error;

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("Cargo exceeds container capacity: {requested} kg requested for {serial}, max payload {max_payload} kg")]
    Overfill {
        serial: String,
        requested: f64,
        max_payload: f64,
    },

    #[error("Index {index} is out of range for {len} ships")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid measurement for {field}: {value} ({reason})")]
    InvalidMeasurement {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("Validation error for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Container {serial} has no hazard notification capability")]
    HazardUnsupported { serial: String },

    #[error("Container {serial} not found on {ship}")]
    ContainerNotFound { serial: String, ship: String },

    #[error("Invalid input for {field}: '{input}'")]
    InvalidInput { field: String, input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Capacity,
    Lookup,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FleetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FleetError::Overfill { .. } => ErrorCategory::Capacity,
            FleetError::IndexOutOfRange { .. }
            | FleetError::ContainerNotFound { .. }
            | FleetError::HazardUnsupported { .. } => ErrorCategory::Lookup,
            FleetError::InvalidMeasurement { .. }
            | FleetError::ValidationError { .. }
            | FleetError::InvalidInput { .. } => ErrorCategory::Input,
            FleetError::ConfigError { .. }
            | FleetError::ConfigValidationError { .. }
            | FleetError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FleetError::IoError(_) | FleetError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup | ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Capacity => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> String {
        match self {
            FleetError::Overfill { max_payload, .. } => {
                format!("Load at most {} kg into this container", max_payload)
            }
            FleetError::IndexOutOfRange { len, .. } => {
                if *len == 0 {
                    "Add a container ship first".to_string()
                } else {
                    format!("Choose a ship number between 1 and {}", len)
                }
            }
            FleetError::InvalidMeasurement { field, .. } => {
                format!("Enter a non-negative number for {}", field)
            }
            FleetError::ValidationError { field, .. } => format!("Check the value of {}", field),
            FleetError::HazardUnsupported { .. } => {
                "Only liquid and gas containers can report hazards".to_string()
            }
            FleetError::ContainerNotFound { .. } => {
                "Use 'Show ship info' to list the loaded serial numbers".to_string()
            }
            FleetError::InvalidInput { field, .. } => format!("Re-enter {}", field),
            FleetError::IoError(_) => "Check that the terminal or file is readable".to_string(),
            FleetError::SerializationError(_) => "Switch the summary format to text".to_string(),
            FleetError::ConfigError { .. }
            | FleetError::ConfigValidationError { .. }
            | FleetError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command-line overrides".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FleetError::Overfill { serial, .. } => {
                format!("Cargo exceeds the capacity of container {}.", serial)
            }
            FleetError::IndexOutOfRange { .. } => "Invalid ship number.".to_string(),
            FleetError::InvalidMeasurement { field, .. } => {
                format!("The {} must be a non-negative number.", field)
            }
            FleetError::InvalidInput { field, input } => {
                format!("'{}' is not a valid {}.", input, field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FleetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_capacity_errors_are_medium_severity() {
        let err = FleetError::Overfill {
            serial: "KON-L-0001".to_string(),
            requested: 6000.0,
            max_payload: 5000.0,
        };
        assert_eq!(err.category(), ErrorCategory::Capacity);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("5000"));
    }

    #[test]
    fn test_index_out_of_range_suggestion_depends_on_fleet_size() {
        let empty = FleetError::IndexOutOfRange { index: 0, len: 0 };
        assert_eq!(empty.recovery_suggestion(), "Add a container ship first");

        let some = FleetError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(some.recovery_suggestion(), "Choose a ship number between 1 and 2");
        assert_eq!(some.user_friendly_message(), "Invalid ship number.");
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = FleetError::InvalidConfigValueError {
            field: "serial.suffix_length".to_string(),
            value: "0".to_string(),
            reason: "Value must be between 1 and 12".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
