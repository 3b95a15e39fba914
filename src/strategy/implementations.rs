// src/strategy/implementations.rs

use crate::simulation::error::SimulationError;
use crate::simulation::params::InventoryParams;
use crate::strategy::traits::{is_decision_day, OrderPolicy};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// =========================================================================
// 1. Simple Ordering
// =========================================================================

/// Orders `Q` every cycle and puts it on the shelf the same day.
/// Lead time is ignored entirely.
#[derive(Debug, Clone, Default)]
pub struct SimpleOrdering;

impl OrderPolicy for SimpleOrdering {
    fn calculate_order(&self, day: usize, params: &InventoryParams) -> f64 {
        if is_decision_day(day, params) {
            params.order_quantity()
        } else {
            0.0
        }
    }

    fn arrival_delay(&self, _params: &InventoryParams) -> usize {
        0
    }
}

// =========================================================================
// 2. Lead-time Ordering
// =========================================================================

/// Orders `Q` every cycle; the order lands `lead_time_days` later.
/// Orders that would land past the horizon never reach the shelf.
#[derive(Debug, Clone, Default)]
pub struct LeadTimeOrdering;

impl OrderPolicy for LeadTimeOrdering {
    fn calculate_order(&self, day: usize, params: &InventoryParams) -> f64 {
        if is_decision_day(day, params) {
            params.order_quantity()
        } else {
            0.0
        }
    }

    fn arrival_delay(&self, params: &InventoryParams) -> usize {
        params.lead_time_days()
    }
}

// =========================================================================
// Policy selector
// =========================================================================

/// The ordering policies the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    #[default]
    Simple,
    LeadTimeAware,
}

impl Policy {
    pub fn strategy(self) -> Box<dyn OrderPolicy> {
        match self {
            Policy::Simple => Box::new(SimpleOrdering),
            Policy::LeadTimeAware => Box::new(LeadTimeOrdering),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Policy::Simple => "Simple Ordering",
            Policy::LeadTimeAware => "Lead-time Ordering",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" | "order" | "simple-ordering" => Ok(Policy::Simple),
            "lead-time-aware" | "leadtimeaware" | "lead-time" | "order_leadtime"
            | "lead-time-ordering" => Ok(Policy::LeadTimeAware),
            _ => Err(SimulationError::InvalidPolicy(s.to_string())),
        }
    }
}
