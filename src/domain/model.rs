use crate::utils::error::FleetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Liquid,
    Gas,
    Refrigerated,
}

impl ContainerKind {
    /// 序號中的種類代碼
    pub fn tag(self) -> char {
        match self {
            ContainerKind::Liquid => 'L',
            ContainerKind::Gas => 'G',
            ContainerKind::Refrigerated => 'R',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Liquid => "liquid",
            ContainerKind::Gas => "gas",
            ContainerKind::Refrigerated => "refrigerated",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContainerKind {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "liquid" => Ok(ContainerKind::Liquid),
            "gas" => Ok(ContainerKind::Gas),
            "refrigerated" => Ok(ContainerKind::Refrigerated),
            _ => Err(FleetError::InvalidInput {
                field: "container type".to_string(),
                input: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SerialNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Physical attributes shared by every container kind. Masses in kg, lengths in cm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub mass: f64,
    pub height: f64,
    pub tare_weight: f64,
    pub depth: f64,
}

/// Liquid and gas containers: payload cap in kg, pressure in atm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadSpec {
    pub max_payload: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefrigerationSpec {
    pub product_type: String,
    pub temperature: f64,
}

/// 由 shell 收集的欄位值，尚未取得序號
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContainerSpec {
    Liquid {
        measurements: Measurements,
        payload: PayloadSpec,
    },
    Gas {
        measurements: Measurements,
        payload: PayloadSpec,
    },
    Refrigerated {
        measurements: Measurements,
        refrigeration: RefrigerationSpec,
    },
}

impl ContainerSpec {
    pub fn kind(&self) -> ContainerKind {
        match self {
            ContainerSpec::Liquid { .. } => ContainerKind::Liquid,
            ContainerSpec::Gas { .. } => ContainerKind::Gas,
            ContainerSpec::Refrigerated { .. } => ContainerKind::Refrigerated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    /// knots
    pub max_speed: f64,
    pub max_container_num: usize,
    /// tons
    pub max_weight: f64,
}

/// Confirmation returned by a successful cargo fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoLoaded {
    pub serial: SerialNumber,
    pub kind: ContainerKind,
    pub cargo_mass: f64,
}

impl fmt::Display for CargoLoaded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cargo of {} kg loaded into {} container {}.",
            self.cargo_mass, self.kind, self.serial
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HazardAlert {
    pub container_id: String,
}

impl fmt::Display for HazardAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hazardous situation detected in container {}.",
            self.container_id
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

/// 一則給使用者看的狀態訊息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_kind_parses_case_insensitively() {
        assert_eq!("Liquid".parse::<ContainerKind>().unwrap(), ContainerKind::Liquid);
        assert_eq!(" GAS ".parse::<ContainerKind>().unwrap(), ContainerKind::Gas);
        assert_eq!(
            "refrigerated".parse::<ContainerKind>().unwrap(),
            ContainerKind::Refrigerated
        );
        assert!("tanker".parse::<ContainerKind>().is_err());
    }

    #[test]
    fn test_container_kind_tags() {
        assert_eq!(ContainerKind::Liquid.tag(), 'L');
        assert_eq!(ContainerKind::Gas.tag(), 'G');
        assert_eq!(ContainerKind::Refrigerated.tag(), 'R');
    }

    #[test]
    fn test_container_spec_deserializes_from_tagged_json() {
        let json = serde_json::json!({
            "kind": "refrigerated",
            "measurements": {"mass": 2000.0, "height": 300.0, "tare_weight": 150.0, "depth": 200.0},
            "refrigeration": {"product_type": "Bananas", "temperature": 5.0}
        });
        let spec: ContainerSpec = serde_json::from_value(json).unwrap();
        assert_eq!(spec.kind(), ContainerKind::Refrigerated);
    }

    #[test]
    fn test_report_messages() {
        let alert = HazardAlert {
            container_id: "KON-G-AB12".to_string(),
        };
        assert_eq!(
            alert.to_string(),
            "Hazardous situation detected in container KON-G-AB12."
        );
        assert_eq!(Report::warning(alert.to_string()).level, ReportLevel::Warning);
    }
}
