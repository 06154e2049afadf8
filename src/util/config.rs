use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elevator::car::ElevatorKind;
use crate::util::constants;

/// Simulation parameters, fixed for the process lifetime. Fields missing
/// from a config file fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub total_floors: u8,
    pub elevator_count: u8,
    pub max_capacity: u32,
    pub kind: ElevatorKind,
    pub step_ms: u64,
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            total_floors: constants::NUM_FLOORS,
            elevator_count: constants::NUM_ELEVATORS,
            max_capacity: constants::ELEV_MAX_CAPACITY,
            kind: ElevatorKind::Passenger,
            step_ms: constants::STEP_TIME_MS,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<SimConfig, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Simulated time spent travelling one floor.
    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }
}
