use crate::core::container::Container;
use crate::domain::model::{SerialNumber, ShipSpec};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_positive, validate_positive_number,
};
use serde::Serialize;
use std::fmt;

/// Why a container was not placed on a ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadRejection {
    CapacityReached { max_containers: usize },
    WeightExceeded {
        current_mass: f64,
        container_mass: f64,
        max_weight: f64,
    },
}

impl fmt::Display for LoadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadRejection::CapacityReached { .. } => {
                f.write_str("Cannot load more containers. Maximum capacity reached.")
            }
            LoadRejection::WeightExceeded { .. } => {
                f.write_str("Cannot load container. Maximum weight exceeded.")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded { serial: SerialNumber },
    /// 未裝載的貨櫃原封不動交還給呼叫端
    Rejected {
        container: Container,
        reason: LoadRejection,
    },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnloadOutcome {
    Unloaded(Container),
    NotFound { serial: String },
}

impl UnloadOutcome {
    pub fn is_unloaded(&self) -> bool {
        matches!(self, UnloadOutcome::Unloaded(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceOutcome {
    pub unloaded: UnloadOutcome,
    pub loaded: LoadOutcome,
}

/// Read-only snapshot of a ship for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipSummary {
    pub name: String,
    pub max_speed: f64,
    pub max_container_num: usize,
    pub max_weight: f64,
    pub container_count: usize,
    pub total_mass: f64,
    pub serials: Vec<SerialNumber>,
}

impl fmt::Display for ShipSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ship Name: {}", self.name)?;
        writeln!(f, "Max Speed: {} knots", self.max_speed)?;
        writeln!(f, "Max Container Capacity: {}", self.max_container_num)?;
        writeln!(f, "Max Weight Capacity: {} tons", self.max_weight)?;
        writeln!(f, "Number of Containers Loaded: {}", self.container_count)?;
        writeln!(f, "Total Container Mass: {}", self.total_mass)?;
        write!(f, "List of Containers:")?;
        for serial in &self.serials {
            write!(f, "\n- {}", serial)?;
        }
        Ok(())
    }
}

/// A container ship with a fixed container-count and weight capacity.
///
/// Containers are kept in load order. After every successful mutation the
/// ship holds at most `max_container_num` containers whose masses sum to at
/// most `max_weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerShip {
    name: String,
    max_speed: f64,
    max_container_num: usize,
    max_weight: f64,
    containers: Vec<Container>,
}

impl ContainerShip {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        max_container_num: usize,
        max_weight: f64,
    ) -> Result<Self> {
        let name = name.into();
        validate_non_empty_string("ship name", &name)?;
        validate_non_negative("max speed", max_speed)?;
        validate_positive_number("max container count", max_container_num, 1)?;
        validate_positive("max weight", max_weight)?;

        Ok(Self {
            name,
            max_speed,
            max_container_num,
            max_weight,
            containers: Vec::new(),
        })
    }

    pub fn from_spec(spec: ShipSpec) -> Result<Self> {
        Self::new(
            spec.name,
            spec.max_speed,
            spec.max_container_num,
            spec.max_weight,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_container_num(&self) -> usize {
        self.max_container_num
    }

    pub fn max_weight(&self) -> f64 {
        self.max_weight
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.containers.iter().map(Container::mass).sum()
    }

    pub fn remaining_capacity(&self) -> usize {
        self.max_container_num.saturating_sub(self.containers.len())
    }

    pub fn find_container(&self, serial: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.serial() == serial)
    }

    pub fn load_container(&mut self, container: Container) -> LoadOutcome {
        if self.containers.len() >= self.max_container_num {
            tracing::warn!("{} is at its capacity of {} containers", self.name, self.max_container_num);
            return LoadOutcome::Rejected {
                container,
                reason: LoadRejection::CapacityReached {
                    max_containers: self.max_container_num,
                },
            };
        }

        let current_mass = self.total_mass();
        if current_mass + container.mass() > self.max_weight {
            tracing::warn!(
                "{} cannot take {} ({} + {} > {})",
                self.name,
                container.serial(),
                current_mass,
                container.mass(),
                self.max_weight
            );
            return LoadOutcome::Rejected {
                reason: LoadRejection::WeightExceeded {
                    current_mass,
                    container_mass: container.mass(),
                    max_weight: self.max_weight,
                },
                container,
            };
        }

        let serial = container.serial().clone();
        self.containers.push(container);
        tracing::debug!("Loaded {} onto {} ({} on board)", serial, self.name, self.containers.len());
        LoadOutcome::Loaded { serial }
    }

    pub fn unload_container(&mut self, serial: &str) -> UnloadOutcome {
        match self.containers.iter().position(|c| c.serial() == serial) {
            Some(index) => {
                let container = self.containers.remove(index);
                tracing::debug!("Unloaded {} from {}", serial, self.name);
                UnloadOutcome::Unloaded(container)
            }
            None => {
                tracing::warn!("Container {} not found on {}", serial, self.name);
                UnloadOutcome::NotFound {
                    serial: serial.to_string(),
                }
            }
        }
    }

    /// Unloads `serial` (if present) and then loads `new_container`.
    ///
    /// This is not an atomic swap: when the new container is rejected the
    /// old one stays unloaded and the ship ends up one container lighter.
    pub fn replace_container(&mut self, serial: &str, new_container: Container) -> ReplaceOutcome {
        let unloaded = self.unload_container(serial);
        let loaded = self.load_container(new_container);
        ReplaceOutcome { unloaded, loaded }
    }

    pub fn summary(&self) -> ShipSummary {
        ShipSummary {
            name: self.name.clone(),
            max_speed: self.max_speed,
            max_container_num: self.max_container_num,
            max_weight: self.max_weight,
            container_count: self.containers.len(),
            total_mass: self.total_mass(),
            serials: self.containers.iter().map(|c| c.serial().clone()).collect(),
        }
    }
}
