use crate::utils::error::{FleetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FleetError::InvalidMeasurement {
            field: field_name.to_string(),
            value,
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value < 0.0 {
        return Err(FleetError::InvalidMeasurement {
            field: field_name.to_string(),
            value,
            reason: "Value cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(FleetError::InvalidMeasurement {
            field: field_name.to_string(),
            value,
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FleetError::ValidationError {
            field: field_name.to_string(),
            message: format!("Value must be at least {}, got {}", min_value, value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::ValidationError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FleetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
