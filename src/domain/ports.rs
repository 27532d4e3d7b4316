use crate::domain::model::{CargoLoaded, ContainerKind, HazardAlert, Report, SerialNumber};
use crate::utils::error::Result;

/// Hands out container serial numbers, unique for the lifetime of the source.
pub trait SerialNumberSource {
    fn next_serial(&mut self, kind: ContainerKind) -> SerialNumber;
}

/// Receives human-readable status messages produced by fleet operations.
pub trait ReportSink {
    fn report(&mut self, report: Report);
}

/// Implemented only by containers that can raise a hazard alert (liquid, gas).
pub trait HazardNotifier {
    fn notify_hazard(&self, container_id: &str) -> HazardAlert;
}

/// Containers with a payload cap that can simulate a cargo fill.
pub trait CargoHold {
    fn max_payload(&self) -> f64;
    fn load_cargo(&self, cargo_mass: f64) -> Result<CargoLoaded>;
}

impl<S: SerialNumberSource + ?Sized> SerialNumberSource for Box<S> {
    fn next_serial(&mut self, kind: ContainerKind) -> SerialNumber {
        (**self).next_serial(kind)
    }
}

impl<R: ReportSink + ?Sized> ReportSink for Box<R> {
    fn report(&mut self, report: Report) {
        (**self).report(report)
    }
}
