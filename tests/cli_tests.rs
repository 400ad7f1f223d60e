use std::path::Path;
use std::process::Command;

fn simulator() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_automatic-door"));
    command
        .env("RUN_MODE", "development")
        .env("RUST_LOG", "info")
        .env_remove("APP__SIMULATION__SCENARIO");
    command
}

#[test]
fn test_simulator_replays_reference_scenario() {
    let config_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/config");
    let output = simulator()
        .env("CONFIG_DIR", &config_dir)
        .output()
        .expect("simulator starts");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("stopped in state Closed after 6 notifications"), "{}", stdout);
    assert!(stdout.contains("final state Closed"), "{}", stdout);
}

#[test]
fn test_simulator_exits_non_zero_on_failure() {
    let output = simulator()
        .env("CONFIG_DIR", Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist"))
        .output()
        .expect("simulator starts");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Application error"));
}
