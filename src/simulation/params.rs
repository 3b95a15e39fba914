// src/simulation/params.rs

use crate::simulation::config::SimulationConfig;
use crate::simulation::error::SimulationError;

/// The validated, immutable inputs of one simulation run.
///
/// Fields are private: the only way to get one is through [`InventoryParams::new`]
/// or `TryFrom<SimulationConfig>`, both of which enforce the invariants below.
///
/// * `annual_demand > 0`
/// * `horizon_days >= 1`, `cycle_days >= 1`
/// * `order_quantity`, `initial_on_hand`, `demand_sigma >= 0`
/// * every real value finite
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryParams {
    annual_demand: f64,
    horizon_days: usize,
    lead_time_days: usize,
    cycle_days: usize,
    order_quantity: f64,
    initial_on_hand: f64,
    demand_sigma: f64,
}

impl InventoryParams {
    pub fn new(
        annual_demand: f64,
        horizon_days: usize,
        lead_time_days: usize,
        cycle_days: usize,
        order_quantity: f64,
        initial_on_hand: f64,
        demand_sigma: f64,
    ) -> Result<Self, SimulationError> {
        let params = Self {
            annual_demand,
            horizon_days,
            lead_time_days,
            cycle_days,
            order_quantity,
            initial_on_hand,
            demand_sigma,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks every invariant. The engine calls this at entry.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.annual_demand.is_finite() || self.annual_demand <= 0.0 {
            return Err(SimulationError::invalid(
                "annual_demand",
                format!("must be a positive number, got {}", self.annual_demand),
            ));
        }
        if self.horizon_days < 1 {
            return Err(SimulationError::invalid("horizon_days", "must be at least 1 day"));
        }
        if self.cycle_days < 1 {
            return Err(SimulationError::invalid("cycle_days", "must be at least 1 day"));
        }
        non_negative("order_quantity", self.order_quantity)?;
        non_negative("initial_on_hand", self.initial_on_hand)?;
        non_negative("demand_sigma", self.demand_sigma)?;
        Ok(())
    }

    pub fn annual_demand(&self) -> f64 {
        self.annual_demand
    }

    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    pub fn lead_time_days(&self) -> usize {
        self.lead_time_days
    }

    pub fn cycle_days(&self) -> usize {
        self.cycle_days
    }

    pub fn order_quantity(&self) -> f64 {
        self.order_quantity
    }

    pub fn initial_on_hand(&self) -> f64 {
        self.initial_on_hand
    }

    pub fn demand_sigma(&self) -> f64 {
        self.demand_sigma
    }

    /// Mean demand per simulated day: `annual_demand / horizon_days`.
    pub fn base_daily_demand(&self) -> f64 {
        self.annual_demand / self.horizon_days as f64
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), SimulationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimulationError::invalid(
            field,
            format!("must be a non-negative number, got {}", value),
        ))
    }
}

impl TryFrom<SimulationConfig> for InventoryParams {
    type Error = SimulationError;

    fn try_from(config: SimulationConfig) -> Result<Self, Self::Error> {
        Self::new(
            config.annual_demand,
            config.horizon_days,
            config.lead_time_days,
            config.cycle_days,
            config.order_quantity,
            config.initial_on_hand,
            config.demand_sigma,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: SimulationError) -> &'static str {
        match err {
            SimulationError::InvalidParameters { field, .. } => field,
            other => panic!("expected InvalidParameters, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        let params = InventoryParams::try_from(SimulationConfig::default()).unwrap();
        assert_eq!(params.horizon_days(), 365);
        assert_eq!(params.base_daily_demand(), 2000.0 / 365.0);
    }

    #[test]
    fn rejects_non_positive_demand() {
        let err = InventoryParams::new(0.0, 10, 0, 1, 1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(field_of(err), "annual_demand");

        let err = InventoryParams::new(f64::NAN, 10, 0, 1, 1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(field_of(err), "annual_demand");
    }

    #[test]
    fn rejects_zero_horizon_and_cycle() {
        let err = InventoryParams::new(10.0, 0, 0, 1, 1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(field_of(err), "horizon_days");

        let err = InventoryParams::new(10.0, 10, 0, 0, 1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(field_of(err), "cycle_days");
    }

    #[test]
    fn rejects_negative_quantities() {
        let err = InventoryParams::new(10.0, 10, 0, 1, -1.0, 0.0, 0.0).unwrap_err();
        assert_eq!(field_of(err), "order_quantity");

        let err = InventoryParams::new(10.0, 10, 0, 1, 1.0, -0.5, 0.0).unwrap_err();
        assert_eq!(field_of(err), "initial_on_hand");

        let err = InventoryParams::new(10.0, 10, 0, 1, 1.0, 0.0, f64::INFINITY).unwrap_err();
        assert_eq!(field_of(err), "demand_sigma");
    }

    #[test]
    fn zero_quantities_are_allowed() {
        let params = InventoryParams::new(10.0, 1, 0, 1, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(params.order_quantity(), 0.0);
        assert_eq!(params.initial_on_hand(), 0.0);
    }
}
