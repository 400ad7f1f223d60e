use std::path::Path;

use automatic_door::config::Settings;
use automatic_door::models::DoorEvent;

// Kept in its own test binary: environment variables are process-wide.
#[test]
fn test_environment_overrides_config_files() {
    std::env::set_var("APP__SIMULATION__SCENARIO", "MotionDetected,DoorOpenSignal");
    std::env::set_var("APP__DOOR__NAME", "side");
    std::env::set_var("APP__SIMULATION__STEP_INTERVAL_MS", "250");

    let config_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/config");
    let settings = Settings::from_config_dir(config_dir, "development");

    std::env::remove_var("APP__SIMULATION__SCENARIO");
    std::env::remove_var("APP__DOOR__NAME");
    std::env::remove_var("APP__SIMULATION__STEP_INTERVAL_MS");

    let settings = settings.expect("settings load with overrides");
    assert_eq!(settings.door.name, "side");
    assert_eq!(settings.simulation.step_interval_ms, 250);
    assert_eq!(
        settings.scenario(),
        vec![DoorEvent::MotionDetected, DoorEvent::DoorOpenSignal]
    );
}
