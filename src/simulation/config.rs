// src/simulation/config.rs

use crate::simulation::error::SimulationError;
use crate::strategy::implementations::Policy;
use serde::Deserialize;
use std::path::Path;

/// Raw simulation inputs, as typed by a user or loaded from a JSON file.
///
/// Nothing here is validated; convert into
/// [`InventoryParams`](crate::simulation::params::InventoryParams) before running.
/// `policy` is not part of the parameter set; it picks the policy handed to the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub annual_demand: f64,
    pub horizon_days: usize,
    pub lead_time_days: usize,
    pub cycle_days: usize,
    pub order_quantity: f64,
    pub initial_on_hand: f64,
    pub demand_sigma: f64,
    pub policy: Policy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            annual_demand: 2000.0,
            horizon_days: 365,
            lead_time_days: 0,
            cycle_days: 10,
            order_quantity: 55.0,
            initial_on_hand: 55.0,
            demand_sigma: 0.0,
            policy: Policy::Simple,
        }
    }
}

impl SimulationConfig {
    /// Loads a config from a JSON file. Missing fields fall back to the defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "lead_time_days": 5, "demand_sigma": 1.5 }"#).unwrap();

        assert_eq!(config.lead_time_days, 5);
        assert_eq!(config.demand_sigma, 1.5);
        assert_eq!(config.horizon_days, 365);
        assert_eq!(config.order_quantity, 55.0);
        assert_eq!(config.policy, Policy::Simple);
    }

    #[test]
    fn policy_is_read_from_json() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "policy": "lead-time-aware" }"#).unwrap();
        assert_eq!(config.policy, Policy::LeadTimeAware);

        let err = serde_json::from_str::<SimulationConfig>(r#"{ "policy": "kanban" }"#);
        assert!(err.is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        std::fs::write(&path, r#"{ "annual_demand": 730.0, "horizon_days": 73 }"#).unwrap();

        let config = SimulationConfig::from_json_file(&path).unwrap();
        assert_eq!(config.annual_demand, 730.0);
        assert_eq!(config.horizon_days, 73);
        assert_eq!(config.cycle_days, 10);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulationConfig::from_json_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
