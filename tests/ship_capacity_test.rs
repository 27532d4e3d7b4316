use container_fleet::core::{
    Container, ContainerShip, ContainerSpec, LoadOutcome, LoadRejection, Measurements, PayloadSpec,
    RefrigerationSpec, SerialNumberSource, UnloadOutcome,
};
use container_fleet::{FleetError, RandomSerialGenerator, SequentialSerialGenerator};
use std::collections::HashSet;

fn measurements(mass: f64) -> Measurements {
    Measurements {
        mass,
        height: 250.0,
        tare_weight: 120.0,
        depth: 180.0,
    }
}

fn gas(serials: &mut impl SerialNumberSource, mass: f64, max_payload: f64) -> Container {
    Container::create(
        ContainerSpec::Gas {
            measurements: measurements(mass),
            payload: PayloadSpec {
                max_payload,
                pressure: 3.0,
            },
        },
        serials,
    )
    .unwrap()
}

fn reefer(serials: &mut impl SerialNumberSource, mass: f64) -> Container {
    Container::create(
        ContainerSpec::Refrigerated {
            measurements: measurements(mass),
            refrigeration: RefrigerationSpec {
                product_type: "Fish".to_string(),
                temperature: -20.0,
            },
        },
        serials,
    )
    .unwrap()
}

#[test]
fn test_serials_are_non_empty_and_distinct() {
    let mut serials = RandomSerialGenerator::default();
    let mut seen = HashSet::new();

    for i in 0..300 {
        let container = if i % 2 == 0 {
            gas(&mut serials, 10.0, 100.0)
        } else {
            reefer(&mut serials, 10.0)
        };
        assert!(!container.serial().as_str().is_empty());
        assert!(seen.insert(container.serial().clone()), "duplicate serial {}", container.serial());
    }
}

#[test]
fn test_load_cargo_succeeds_iff_within_payload() {
    let mut serials = SequentialSerialGenerator::default();
    let container = gas(&mut serials, 1500.0, 6000.0);
    let hold = container.as_cargo_hold().unwrap();
    let before = container.clone();

    for cargo_mass in [0.0, 1.0, 2999.5, 5999.99, 6000.0, 6000.01, 7500.0, 1.0e9] {
        let result = hold.load_cargo(cargo_mass);
        if cargo_mass <= hold.max_payload() {
            assert!(result.is_ok(), "{} should fit", cargo_mass);
        } else {
            assert!(matches!(result, Err(FleetError::Overfill { .. })), "{} should overfill", cargo_mass);
        }
    }

    assert_eq!(container, before);
}

#[test]
fn test_successful_loads_respect_both_bounds() {
    let mut serials = SequentialSerialGenerator::default();
    let mut ship = ContainerShip::new("Feeder", 14.0, 4, 1000.0).unwrap();

    let masses = [300.0, 250.0, 400.0, 100.0, 50.0];
    let mut loaded = 0;
    for mass in masses {
        if ship.load_container(reefer(&mut serials, mass)).is_loaded() {
            loaded += 1;
        }
        assert!(ship.container_count() <= ship.max_container_num());
        assert!(ship.total_mass() <= ship.max_weight());
    }

    // 300 + 250 + 400 = 950; 100 would exceed the weight, 50 fits as the fourth
    assert_eq!(loaded, 4);
    assert_eq!(ship.container_count(), 4);
    assert_eq!(ship.total_mass(), 1000.0);

    let before = ship.summary();
    let outcome = ship.load_container(reefer(&mut serials, 0.0));
    assert!(matches!(
        outcome,
        LoadOutcome::Rejected {
            reason: LoadRejection::CapacityReached { max_containers: 4 },
            ..
        }
    ));
    assert_eq!(ship.summary(), before);
}

#[test]
fn test_unload_same_serial_twice() {
    let mut serials = SequentialSerialGenerator::default();
    let mut ship = ContainerShip::new("Feeder", 14.0, 4, 1000.0).unwrap();
    let container = reefer(&mut serials, 100.0);
    let serial = container.serial().to_string();
    ship.load_container(container);
    ship.load_container(reefer(&mut serials, 100.0));

    assert!(matches!(ship.unload_container(&serial), UnloadOutcome::Unloaded(ref c) if c.serial() == serial.as_str()));
    assert_eq!(ship.container_count(), 1);

    assert!(matches!(ship.unload_container(&serial), UnloadOutcome::NotFound { .. }));
    assert_eq!(ship.container_count(), 1);
}

#[test]
fn test_replace_success_and_non_atomic_failure() {
    let mut serials = SequentialSerialGenerator::default();
    let mut ship = ContainerShip::new("Feeder", 14.0, 2, 1000.0).unwrap();
    let old = reefer(&mut serials, 500.0);
    let old_serial = old.serial().to_string();
    ship.load_container(old);
    ship.load_container(reefer(&mut serials, 300.0));

    let new = reefer(&mut serials, 600.0);
    let new_serial = new.serial().to_string();
    let outcome = ship.replace_container(&old_serial, new);
    assert!(outcome.unloaded.is_unloaded());
    assert!(outcome.loaded.is_loaded());
    assert!(ship.find_container(&old_serial).is_none());
    assert!(ship.find_container(&new_serial).is_some());
    assert_eq!(ship.container_count(), 2);

    // 換上去的貨櫃太重：舊的已卸下，新的也沒裝上
    let too_heavy = reefer(&mut serials, 900.0);
    let heavy_serial = too_heavy.serial().to_string();
    let outcome = ship.replace_container(&new_serial, too_heavy);
    assert!(outcome.unloaded.is_unloaded());
    match outcome.loaded {
        LoadOutcome::Rejected { container, reason } => {
            assert_eq!(container.serial().as_str(), heavy_serial);
            assert!(matches!(reason, LoadRejection::WeightExceeded { .. }));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
    assert!(ship.find_container(&new_serial).is_none());
    assert!(ship.find_container(&heavy_serial).is_none());
    assert_eq!(ship.container_count(), 1);
}

#[test]
fn test_negative_dimensions_are_rejected() {
    let mut serials = SequentialSerialGenerator::default();
    let result = Container::create(
        ContainerSpec::Liquid {
            measurements: Measurements {
                mass: 100.0,
                height: -1.0,
                tare_weight: 10.0,
                depth: 10.0,
            },
            payload: PayloadSpec {
                max_payload: 100.0,
                pressure: 1.0,
            },
        },
        &mut serials,
    );
    assert!(matches!(result, Err(FleetError::InvalidMeasurement { ref field, .. }) if field == "height"));
}
