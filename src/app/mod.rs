// Application layer: the interactive shell and the start-up demo built on the core.

pub mod demo;
pub mod shell;

pub use demo::run_demo;
pub use shell::{FleetShell, MenuChoice};
