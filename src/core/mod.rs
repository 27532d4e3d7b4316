pub mod container;
pub mod fleet;
pub mod registry;
pub mod ship;

pub use crate::domain::model::{
    CargoLoaded, ContainerKind, ContainerSpec, HazardAlert, Measurements, PayloadSpec,
    RefrigerationSpec, Report, ReportLevel, SerialNumber, ShipSpec,
};
pub use crate::domain::ports::{CargoHold, HazardNotifier, ReportSink, SerialNumberSource};
pub use crate::utils::error::Result;
pub use container::{Container, GasContainer, LiquidContainer, RefrigeratedContainer};
pub use fleet::FleetManager;
pub use registry::FleetRegistry;
pub use ship::{ContainerShip, LoadOutcome, LoadRejection, ReplaceOutcome, ShipSummary, UnloadOutcome};
