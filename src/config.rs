//! # Configuration Management

//! This module handles the configuration loading for the automatic door simulator.
//! It leverages the `config` crate to layer settings from several sources:

//! * YAML configuration files (default.yaml, then development.yaml / production.yaml)
//! * Environment variables

//! The core of this module is the `Settings` struct, which encapsulates all the configuration settings required by the application.

use serde::{Deserialize, Serialize};
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use crate::controllers::automatic_door::DEFAULT_DOOR_NAME;
use crate::errors::DoorControllerError;
use crate::models::DoorEvent;

/// Represents the complete set of configuration settings for the automatic door simulator.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Settings describing the simulated door
    #[serde(default)]
    pub door: DoorSettings,
    /// Settings for application logging
    pub logging: LoggingSettings,
    /// Settings for the event scenario replayed by the driver
    #[serde(default)]
    pub simulation: SimulationSettings,
}

/// Describes the simulated door
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DoorSettings {
    /// The name reported in every notification
    pub name: String,
}

impl Default for DoorSettings {
    fn default() -> Self {
        Self { name: DEFAULT_DOOR_NAME.to_string() }
    }
}

/// Holds the configuration settings for application logging
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingSettings {
    /// The logging level used when `RUST_LOG` is not set (e.g., "info", "debug")
    pub level: String,
    /// The directory path where log files will be stored (optional)
    pub path: Option<PathBuf>,
}

/// Controls how the driver replays events against the door
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SimulationSettings {
    /// Delay between two consecutive events, in milliseconds (0 replays without pausing)
    #[serde(default)]
    pub step_interval_ms: u64,
    /// The events to replay, in order; an empty list replays the reference scenario
    #[serde(default)]
    pub scenario: Vec<DoorEvent>,
}

impl SimulationSettings {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }
}

/// # Settings Initialization
impl Settings {
    /// Loads the application settings from the configuration directory and the environment.
    ///
    /// Sources, in order of precedence (later sources override earlier ones):
    ///
    /// 1. `default.yaml`: Contains default settings for the application (required)
    /// 2. Environment-specific YAML file (e.g., `development.yaml` or `production.yaml`) based on the `RUN_MODE` environment variable
    /// 3. Environment variables prefixed with `APP` (e.g., `APP__DOOR__NAME`, or `APP__SIMULATION__SCENARIO=MotionDetected,DoorOpenSignal`)
    ///
    /// The `CONFIG_DIR` environment variable can be used to specify the directory where the YAML configuration files are located (defaults to "src/config").
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)`: If the settings were loaded and constructed successfully
    /// * `Err(DoorControllerError)`: If there was an error during the loading or construction process
    pub fn new() -> Result<Self, DoorControllerError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "src/config".into());
        debug!("Run Mode: {:?}, Config Dir: {:?}", run_mode, config_dir);

        Self::from_config_dir(config_dir, &run_mode)
    }

    /// Loads the application settings from an explicit configuration directory and run mode.
    ///
    /// Environment variables prefixed with `APP` still take precedence over the files.
    pub fn from_config_dir(config_dir: impl AsRef<Path>, run_mode: &str) -> Result<Self, DoorControllerError> {
        let config_dir = config_dir.as_ref();
        let default_file = config_dir.join("default");
        let run_mode_file = config_dir.join(run_mode);

        let s = Config::builder()
            .add_source(File::with_name(&default_file.to_string_lossy()))
            .add_source(File::with_name(&run_mode_file.to_string_lossy()).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("simulation.scenario")
                    .try_parsing(true),
            )
            .build()?;

        debug!("{:#?}", s);
        let mut s: Self = s.try_deserialize::<Settings>()
            .map_err(DoorControllerError::from)?;

        if let Some(ref mut path) = s.logging.path {
            *path = env::current_dir()?.join(path.clone());
        }

        Ok(s)
    }

    /// The events the driver should replay
    pub fn scenario(&self) -> Vec<DoorEvent> {
        if self.simulation.scenario.is_empty() {
            crate::simulation::reference_scenario()
        } else {
            self.simulation.scenario.clone()
        }
    }
}
