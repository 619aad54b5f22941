//! Simulation settings
//!
//! Loaded from JSON; every field is optional and falls back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SEED, FINISH_DELAY, MAX_STEP};

/// Tunables for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for everything random in parsed levels (coin phases)
    pub seed: u64,
    /// Longest slice a tick is split into (seconds)
    pub max_step: f64,
    /// Seconds a decided level keeps running before it reports finished
    pub finish_delay: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_step: MAX_STEP,
            finish_delay: FINISH_DELAY,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_consts() {
        let settings = Settings::default();
        assert_eq!(settings.seed, DEFAULT_SEED);
        assert_eq!(settings.max_step, 0.05);
        assert_eq!(settings.finish_delay, 1.0);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "seed": 9 }"#).unwrap();
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.max_step, MAX_STEP);

        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 3,
            max_step: 0.02,
            finish_delay: 2.5,
        };
        let back = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(Settings::from_json(r#"{ "seed": "nine" }"#).is_err());
    }
}
