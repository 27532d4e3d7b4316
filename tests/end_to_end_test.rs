use anyhow::Result;
use container_fleet::core::{ContainerSpec, Measurements, PayloadSpec, ReportLevel, ShipSpec};
use container_fleet::{FleetError, FleetManager, MemoryReporter, SequentialSerialGenerator};

fn fleet() -> FleetManager<SequentialSerialGenerator, MemoryReporter> {
    FleetManager::new(SequentialSerialGenerator::default(), MemoryReporter::new())
}

fn liquid(mass: f64, max_payload: f64) -> ContainerSpec {
    ContainerSpec::Liquid {
        measurements: Measurements {
            mass,
            height: 200.0,
            tare_weight: 100.0,
            depth: 150.0,
        },
        payload: PayloadSpec {
            max_payload,
            pressure: 2.5,
        },
    }
}

#[test]
fn test_overfill_does_not_prevent_loading_onto_ship() -> Result<()> {
    let mut fleet = fleet();
    let ship = fleet.add_ship(ShipSpec {
        name: "Ship 1".to_string(),
        max_speed: 10.0,
        max_container_num: 100,
        max_weight: 40000.0,
    })?;

    let container = fleet.create_container(liquid(1000.0, 5000.0))?;

    let filled = fleet.load_cargo(&container, 4000.0)?;
    assert_eq!(filled.cargo_mass, 4000.0);

    let overfill = fleet.load_cargo(&container, 6000.0);
    assert!(matches!(overfill, Err(FleetError::Overfill { .. })));
    assert_eq!(fleet.sink().last().map(|r| r.level), Some(ReportLevel::Error));

    assert!(fleet.load_container(ship, container)?.is_loaded());

    let summary = fleet.ship_summary(ship)?;
    assert_eq!(summary.container_count, 1);
    assert_eq!(summary.total_mass, 1000.0);
    Ok(())
}

#[test]
fn test_single_slot_ship_rejects_second_container() -> Result<()> {
    let mut fleet = fleet();
    let ship = fleet.add_ship(ShipSpec {
        name: "Skiff".to_string(),
        max_speed: 8.0,
        max_container_num: 1,
        max_weight: 40000.0,
    })?;

    let a = fleet.create_container(liquid(100.0, 500.0))?;
    let a_serial = a.serial().clone();
    let b = fleet.create_container(liquid(100.0, 500.0))?;

    assert!(fleet.load_container(ship, a)?.is_loaded());
    assert!(!fleet.load_container(ship, b)?.is_loaded());

    let summary = fleet.ship_summary(ship)?;
    assert_eq!(summary.serials, vec![a_serial]);
    assert_eq!(
        fleet.sink().last().map(|r| r.message.as_str()),
        Some("Cannot load more containers. Maximum capacity reached.")
    );
    Ok(())
}

#[test]
fn test_removing_ship_discards_its_containers() -> Result<()> {
    let mut fleet = fleet();
    let first = fleet.add_ship(ShipSpec {
        name: "Ship 1".to_string(),
        max_speed: 10.0,
        max_container_num: 10,
        max_weight: 40000.0,
    })?;
    fleet.add_ship(ShipSpec {
        name: "Ship 2".to_string(),
        max_speed: 12.0,
        max_container_num: 10,
        max_weight: 40000.0,
    })?;

    let container = fleet.create_container(liquid(500.0, 500.0))?;
    fleet.load_container(first, container)?;

    let removed = fleet.remove_ship(first)?;
    assert_eq!(removed.container_count(), 1);
    assert_eq!(fleet.registry().len(), 1);
    assert_eq!(fleet.registry().ship(0)?.name(), "Ship 2");

    assert!(matches!(
        fleet.remove_ship(1),
        Err(FleetError::IndexOutOfRange { index: 1, len: 1 })
    ));
    Ok(())
}
