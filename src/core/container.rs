use crate::domain::model::{
    CargoLoaded, ContainerKind, ContainerSpec, HazardAlert, Measurements, PayloadSpec,
    RefrigerationSpec, SerialNumber,
};
use crate::domain::ports::{CargoHold, HazardNotifier, SerialNumberSource};
use crate::utils::error::{FleetError, Result};
use crate::utils::validation::{validate_finite, validate_non_empty_string, validate_non_negative};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidContainer {
    serial: SerialNumber,
    measurements: Measurements,
    payload: PayloadSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasContainer {
    serial: SerialNumber,
    measurements: Measurements,
    payload: PayloadSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefrigeratedContainer {
    serial: SerialNumber,
    measurements: Measurements,
    refrigeration: RefrigerationSpec,
}

/// A cargo container of one of the three supported kinds.
///
/// Attributes are fixed at creation; the serial number is drawn from the
/// [`SerialNumberSource`] only after every field has been validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Container {
    Liquid(LiquidContainer),
    Gas(GasContainer),
    Refrigerated(RefrigeratedContainer),
}

fn validate_measurements(measurements: &Measurements) -> Result<()> {
    validate_non_negative("mass", measurements.mass)?;
    validate_non_negative("height", measurements.height)?;
    validate_non_negative("tare weight", measurements.tare_weight)?;
    validate_non_negative("depth", measurements.depth)?;
    Ok(())
}

fn validate_payload(payload: &PayloadSpec) -> Result<()> {
    validate_non_negative("max payload", payload.max_payload)?;
    validate_finite("pressure", payload.pressure)?;
    Ok(())
}

fn fill_cargo(
    serial: &SerialNumber,
    kind: ContainerKind,
    payload: &PayloadSpec,
    cargo_mass: f64,
) -> Result<CargoLoaded> {
    validate_non_negative("cargo mass", cargo_mass)?;

    if cargo_mass > payload.max_payload {
        tracing::debug!(
            "Rejected {} kg for {} (max payload {} kg)",
            cargo_mass,
            serial,
            payload.max_payload
        );
        return Err(FleetError::Overfill {
            serial: serial.to_string(),
            requested: cargo_mass,
            max_payload: payload.max_payload,
        });
    }

    Ok(CargoLoaded {
        serial: serial.clone(),
        kind,
        cargo_mass,
    })
}

impl LiquidContainer {
    pub fn new<S: SerialNumberSource + ?Sized>(
        serials: &mut S,
        measurements: Measurements,
        payload: PayloadSpec,
    ) -> Result<Self> {
        validate_measurements(&measurements)?;
        validate_payload(&payload)?;

        Ok(Self {
            serial: serials.next_serial(ContainerKind::Liquid),
            measurements,
            payload,
        })
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn pressure(&self) -> f64 {
        self.payload.pressure
    }
}

impl CargoHold for LiquidContainer {
    fn max_payload(&self) -> f64 {
        self.payload.max_payload
    }

    fn load_cargo(&self, cargo_mass: f64) -> Result<CargoLoaded> {
        fill_cargo(&self.serial, ContainerKind::Liquid, &self.payload, cargo_mass)
    }
}

impl HazardNotifier for LiquidContainer {
    fn notify_hazard(&self, container_id: &str) -> HazardAlert {
        HazardAlert {
            container_id: container_id.to_string(),
        }
    }
}

impl GasContainer {
    pub fn new<S: SerialNumberSource + ?Sized>(
        serials: &mut S,
        measurements: Measurements,
        payload: PayloadSpec,
    ) -> Result<Self> {
        validate_measurements(&measurements)?;
        validate_payload(&payload)?;

        Ok(Self {
            serial: serials.next_serial(ContainerKind::Gas),
            measurements,
            payload,
        })
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn pressure(&self) -> f64 {
        self.payload.pressure
    }
}

impl CargoHold for GasContainer {
    fn max_payload(&self) -> f64 {
        self.payload.max_payload
    }

    fn load_cargo(&self, cargo_mass: f64) -> Result<CargoLoaded> {
        fill_cargo(&self.serial, ContainerKind::Gas, &self.payload, cargo_mass)
    }
}

impl HazardNotifier for GasContainer {
    fn notify_hazard(&self, container_id: &str) -> HazardAlert {
        HazardAlert {
            container_id: container_id.to_string(),
        }
    }
}

impl RefrigeratedContainer {
    pub fn new<S: SerialNumberSource + ?Sized>(
        serials: &mut S,
        measurements: Measurements,
        refrigeration: RefrigerationSpec,
    ) -> Result<Self> {
        validate_measurements(&measurements)?;
        validate_non_empty_string("product type", &refrigeration.product_type)?;
        validate_finite("temperature", refrigeration.temperature)?;

        Ok(Self {
            serial: serials.next_serial(ContainerKind::Refrigerated),
            measurements,
            refrigeration,
        })
    }

    pub fn serial(&self) -> &SerialNumber {
        &self.serial
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn product_type(&self) -> &str {
        &self.refrigeration.product_type
    }

    pub fn temperature(&self) -> f64 {
        self.refrigeration.temperature
    }
}

impl Container {
    /// 驗證欄位並配發序號
    pub fn create<S: SerialNumberSource + ?Sized>(spec: ContainerSpec, serials: &mut S) -> Result<Self> {
        let container = match spec {
            ContainerSpec::Liquid {
                measurements,
                payload,
            } => Container::Liquid(LiquidContainer::new(serials, measurements, payload)?),
            ContainerSpec::Gas {
                measurements,
                payload,
            } => Container::Gas(GasContainer::new(serials, measurements, payload)?),
            ContainerSpec::Refrigerated {
                measurements,
                refrigeration,
            } => Container::Refrigerated(RefrigeratedContainer::new(
                serials,
                measurements,
                refrigeration,
            )?),
        };

        tracing::debug!("Created {} container {}", container.kind(), container.serial());
        Ok(container)
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Liquid(_) => ContainerKind::Liquid,
            Container::Gas(_) => ContainerKind::Gas,
            Container::Refrigerated(_) => ContainerKind::Refrigerated,
        }
    }

    pub fn serial(&self) -> &SerialNumber {
        match self {
            Container::Liquid(c) => c.serial(),
            Container::Gas(c) => c.serial(),
            Container::Refrigerated(c) => c.serial(),
        }
    }

    pub fn measurements(&self) -> &Measurements {
        match self {
            Container::Liquid(c) => c.measurements(),
            Container::Gas(c) => c.measurements(),
            Container::Refrigerated(c) => c.measurements(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.measurements().mass
    }

    pub fn as_cargo_hold(&self) -> Option<&dyn CargoHold> {
        match self {
            Container::Liquid(c) => Some(c),
            Container::Gas(c) => Some(c),
            Container::Refrigerated(_) => None,
        }
    }

    pub fn as_hazard_notifier(&self) -> Option<&dyn HazardNotifier> {
        match self {
            Container::Liquid(c) => Some(c),
            Container::Gas(c) => Some(c),
            Container::Refrigerated(_) => None,
        }
    }
}

impl From<LiquidContainer> for Container {
    fn from(container: LiquidContainer) -> Self {
        Container::Liquid(container)
    }
}

impl From<GasContainer> for Container {
    fn from(container: GasContainer) -> Self {
        Container::Gas(container)
    }
}

impl From<RefrigeratedContainer> for Container {
    fn from(container: RefrigeratedContainer) -> Self {
        Container::Refrigerated(container)
    }
}
