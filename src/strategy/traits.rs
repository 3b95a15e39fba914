// src/strategy/traits.rs

use crate::simulation::params::InventoryParams;
use std::fmt::Debug;

/// Decides when and how much to order, and how long an order takes to land.
///
/// We require `Send` + `Sync` so independent runs can live on different threads.
pub trait OrderPolicy: Debug + Send + Sync {
    /// Quantity to order on `day` (0 on non-decision days).
    fn calculate_order(&self, day: usize, params: &InventoryParams) -> f64;

    /// Days between placing an order and it reaching on-hand inventory.
    fn arrival_delay(&self, params: &InventoryParams) -> usize;
}

/// Periodic review: day `d` is a decision day when `d % cycle_days == 0`.
pub fn is_decision_day(day: usize, params: &InventoryParams) -> bool {
    day % params.cycle_days() == 0
}
