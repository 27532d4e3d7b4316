use crate::core::fleet::FleetManager;
use crate::domain::model::{ContainerSpec, Measurements, PayloadSpec, RefrigerationSpec, ShipSpec};
use crate::domain::ports::{ReportSink, SerialNumberSource};
use crate::utils::error::Result;

/// Start-up scenario: one ship, one container of each kind, two cargo fills.
///
/// Returns the registry index of the demo ship. An overfill during the cargo
/// fills is reported through the sink and does not stop the scenario.
pub fn run_demo<G, R>(fleet: &mut FleetManager<G, R>) -> Result<usize>
where
    G: SerialNumberSource,
    R: ReportSink,
{
    tracing::info!("🚢 Running demo scenario");

    let index = fleet.add_ship(ShipSpec {
        name: "Ship 1".to_string(),
        max_speed: 10.0,
        max_container_num: 100,
        max_weight: 40000.0,
    })?;

    let liquid = fleet.create_container(ContainerSpec::Liquid {
        measurements: Measurements {
            mass: 1000.0,
            height: 200.0,
            tare_weight: 100.0,
            depth: 150.0,
        },
        payload: PayloadSpec {
            max_payload: 5000.0,
            pressure: 2.5,
        },
    })?;
    let gas = fleet.create_container(ContainerSpec::Gas {
        measurements: Measurements {
            mass: 1500.0,
            height: 250.0,
            tare_weight: 120.0,
            depth: 180.0,
        },
        payload: PayloadSpec {
            max_payload: 6000.0,
            pressure: 3.0,
        },
    })?;
    let refrigerated = fleet.create_container(ContainerSpec::Refrigerated {
        measurements: Measurements {
            mass: 2000.0,
            height: 300.0,
            tare_weight: 150.0,
            depth: 200.0,
        },
        refrigeration: RefrigerationSpec {
            product_type: "Bananas".to_string(),
            temperature: 5.0,
        },
    })?;

    // 第一筆超載時跳過第二筆
    let fills = fleet
        .load_cargo(&liquid, 4000.0)
        .and_then(|_| fleet.load_cargo(&gas, 5000.0));
    if let Err(e) = fills {
        tracing::warn!("Demo cargo fill stopped: {}", e);
    }

    for container in [liquid, gas, refrigerated] {
        fleet.load_container(index, container)?;
    }

    Ok(index)
}
