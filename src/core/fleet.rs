use crate::core::container::Container;
use crate::core::registry::FleetRegistry;
use crate::core::ship::{ContainerShip, LoadOutcome, ReplaceOutcome, ShipSummary, UnloadOutcome};
use crate::domain::model::{CargoLoaded, ContainerSpec, HazardAlert, Report, ShipSpec};
use crate::domain::ports::{ReportSink, SerialNumberSource};
use crate::utils::error::{FleetError, Result};

/// Front door for every fleet operation.
///
/// Owns the registry together with the serial source and the report sink.
/// Each call forwards a rendered message to the sink: hard failures are
/// reported at error level and returned as `Err`, soft failures are reported
/// as warnings and returned as outcome values.
pub struct FleetManager<G: SerialNumberSource, R: ReportSink> {
    registry: FleetRegistry,
    serials: G,
    sink: R,
}

impl<G: SerialNumberSource, R: ReportSink> FleetManager<G, R> {
    pub fn new(serials: G, sink: R) -> Self {
        Self::with_registry(FleetRegistry::new(), serials, sink)
    }

    pub fn with_registry(registry: FleetRegistry, serials: G, sink: R) -> Self {
        Self {
            registry,
            serials,
            sink,
        }
    }

    pub fn registry(&self) -> &FleetRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    /// 把錯誤轉成使用者訊息後再往上傳
    fn fail<T>(&mut self, err: FleetError) -> Result<T> {
        tracing::debug!("Operation failed: {} ({:?})", err, err.category());
        self.sink.report(Report::error(err.user_friendly_message()));
        Err(err)
    }

    pub fn add_ship(&mut self, spec: ShipSpec) -> Result<usize> {
        let ship = match ContainerShip::from_spec(spec) {
            Ok(ship) => ship,
            Err(e) => return self.fail(e),
        };
        let message = format!("Container ship '{}' added successfully.", ship.name());
        let index = self.registry.add_ship(ship);
        self.sink.report(Report::info(message));
        Ok(index)
    }

    pub fn remove_ship(&mut self, index: usize) -> Result<ContainerShip> {
        match self.registry.remove_ship(index) {
            Ok(ship) => {
                self.sink.report(Report::info(format!(
                    "Container ship '{}' removed successfully.",
                    ship.name()
                )));
                Ok(ship)
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn create_container(&mut self, spec: ContainerSpec) -> Result<Container> {
        match Container::create(spec, &mut self.serials) {
            Ok(container) => Ok(container),
            Err(e) => self.fail(e),
        }
    }

    pub fn load_container(&mut self, ship_index: usize, container: Container) -> Result<LoadOutcome> {
        let (ship_name, outcome) = match self.registry.ship_mut(ship_index) {
            Ok(ship) => (ship.name().to_string(), ship.load_container(container)),
            Err(e) => return self.fail(e),
        };
        self.report_load(&ship_name, &outcome);
        Ok(outcome)
    }

    pub fn unload_container(&mut self, ship_index: usize, serial: &str) -> Result<UnloadOutcome> {
        let (ship_name, outcome) = match self.registry.ship_mut(ship_index) {
            Ok(ship) => (ship.name().to_string(), ship.unload_container(serial)),
            Err(e) => return self.fail(e),
        };
        self.report_unload(&ship_name, &outcome);
        Ok(outcome)
    }

    pub fn replace_container(
        &mut self,
        ship_index: usize,
        serial: &str,
        new_container: Container,
    ) -> Result<ReplaceOutcome> {
        let (ship_name, outcome) = match self.registry.ship_mut(ship_index) {
            Ok(ship) => (
                ship.name().to_string(),
                ship.replace_container(serial, new_container),
            ),
            Err(e) => return self.fail(e),
        };
        self.report_unload(&ship_name, &outcome.unloaded);
        self.report_load(&ship_name, &outcome.loaded);
        Ok(outcome)
    }

    /// Simulates filling a liquid or gas container; the container itself is not changed.
    pub fn load_cargo(&mut self, container: &Container, cargo_mass: f64) -> Result<CargoLoaded> {
        let result = match container.as_cargo_hold() {
            Some(hold) => hold.load_cargo(cargo_mass),
            None => Err(FleetError::ValidationError {
                field: "container type".to_string(),
                message: format!("{} containers carry no payload cap", container.kind()),
            }),
        };

        match result {
            Ok(loaded) => {
                self.sink.report(Report::info(loaded.to_string()));
                Ok(loaded)
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn notify_hazard(&mut self, container: &Container) -> Result<HazardAlert> {
        match container.as_hazard_notifier() {
            Some(notifier) => {
                let alert = notifier.notify_hazard(container.serial().as_str());
                tracing::warn!("⚠️ {}", alert);
                self.sink.report(Report::warning(alert.to_string()));
                Ok(alert)
            }
            None => self.fail(FleetError::HazardUnsupported {
                serial: container.serial().to_string(),
            }),
        }
    }

    /// Raises a hazard alert for a container currently loaded on a ship.
    pub fn notify_hazard_on(&mut self, ship_index: usize, serial: &str) -> Result<HazardAlert> {
        let lookup = self.registry.ship(ship_index).and_then(|ship| {
            ship.find_container(serial)
                .cloned()
                .ok_or_else(|| FleetError::ContainerNotFound {
                    serial: serial.to_string(),
                    ship: ship.name().to_string(),
                })
        });

        match lookup {
            Ok(container) => self.notify_hazard(&container),
            Err(e) => self.fail(e),
        }
    }

    pub fn ship_summary(&mut self, ship_index: usize) -> Result<ShipSummary> {
        match self.registry.ship(ship_index) {
            Ok(ship) => Ok(ship.summary()),
            Err(e) => self.fail(e),
        }
    }

    fn report_load(&mut self, ship_name: &str, outcome: &LoadOutcome) {
        let report = match outcome {
            LoadOutcome::Loaded { serial } => {
                Report::info(format!("Container {} loaded onto {}.", serial, ship_name))
            }
            LoadOutcome::Rejected { reason, .. } => Report::warning(reason.to_string()),
        };
        self.sink.report(report);
    }

    fn report_unload(&mut self, ship_name: &str, outcome: &UnloadOutcome) {
        let report = match outcome {
            UnloadOutcome::Unloaded(container) => Report::info(format!(
                "Container {} unloaded from {}.",
                container.serial(),
                ship_name
            )),
            UnloadOutcome::NotFound { serial } => {
                Report::warning(format!("Container {} not found on {}.", serial, ship_name))
            }
        };
        self.sink.report(report);
    }
}
