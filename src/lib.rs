pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FleetConfig;

pub use adapters::{ConsoleReporter, MemoryReporter, RandomSerialGenerator, SequentialSerialGenerator};
pub use app::{run_demo, FleetShell};
pub use crate::core::{
    Container, ContainerShip, FleetManager, FleetRegistry, LoadOutcome, ShipSummary, UnloadOutcome,
};
pub use utils::error::{FleetError, Result};
