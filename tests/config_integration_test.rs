use anyhow::Result;
use container_fleet::config::SerialStrategy;
use container_fleet::core::{ContainerKind, SerialNumberSource};
use container_fleet::utils::validation::Validate;
use container_fleet::{run_demo, FleetConfig, FleetError, FleetManager, MemoryReporter};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_config_file_drives_fleet_setup() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(
        temp_file,
        r#"
[serial]
prefix = "CNT"
strategy = "sequential"
suffix_length = 3

[[ships]]
name = "Aurora"
max_speed = 18.5
max_container_num = 200
max_weight = 80000.0
"#
    )?;

    let config = FleetConfig::from_file(temp_file.path())?;
    config.validate()?;
    assert_eq!(config.serial.strategy, SerialStrategy::Sequential);

    let mut fleet = FleetManager::new(config.serial.build_source(), MemoryReporter::new());
    for spec in &config.ships {
        fleet.add_ship(spec.clone())?;
    }
    let demo = run_demo(&mut fleet)?;

    assert_eq!(fleet.registry().len(), 2);
    assert_eq!(fleet.registry().ship(0)?.name(), "Aurora");
    let summary = fleet.ship_summary(demo)?;
    assert_eq!(
        summary.serials.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        vec!["CNT-L-001", "CNT-G-002", "CNT-R-003"]
    );
    Ok(())
}

#[test]
fn test_invalid_preset_ship_fails_validation() -> Result<()> {
    let config = FleetConfig::from_toml_str(
        r#"
[[ships]]
name = "Nowhere"
max_speed = 10.0
max_container_num = 0
max_weight = 1000.0
"#,
    )?;

    match config.validate() {
        Err(FleetError::ConfigValidationError { field, .. }) => assert_eq!(field, "ships[0]"),
        other => panic!("expected validation error, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_shortest_suffix_keeps_issuing_unique_serials() -> Result<()> {
    let config = FleetConfig::from_toml_str("[serial]\nsuffix_length = 1\n")?;
    config.validate()?;

    let mut serials = config.serial.build_source();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        assert!(seen.insert(serials.next_serial(ContainerKind::Gas)));
    }
    Ok(())
}
