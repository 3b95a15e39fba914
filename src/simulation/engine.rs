// src/simulation/engine.rs

use crate::io::demand::DemandGenerator;
use crate::model::queues::TimeDelayQueue;
use crate::model::stock::StockPoint;
use crate::simulation::error::SimulationError;
use crate::simulation::params::InventoryParams;
use crate::strategy::implementations::Policy;
use crate::strategy::traits::OrderPolicy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// One simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub day: usize,
    pub demand: f64,
    pub order: f64,
    pub ioh: f64,
}

/// One record per simulated day, in increasing day order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    records: Vec<SimulationRecord>,
}

impl ResultTable {
    pub fn records(&self) -> &[SimulationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SimulationRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationRecord> {
        self.records.iter()
    }

    pub fn ioh_series(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.ioh).collect()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a SimulationRecord;
    type IntoIter = std::slice::Iter<'a, SimulationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Runs one simulation over the whole horizon.
///
/// The RNG is only drawn from when `demand_sigma > 0`. Either every day is
/// simulated and returned, or an error comes back before any record exists.
pub fn run<R: Rng + ?Sized>(
    params: &InventoryParams,
    policy: Policy,
    rng: &mut R,
) -> Result<ResultTable, SimulationError> {
    params.validate()?;
    let mut sim = InventorySimulation::new(params, policy.strategy())?;
    sim.run(rng);

    let table = sim.finish();
    info!(
        policy = %policy,
        days = table.len(),
        final_ioh = table.records.last().map(|r| r.ioh),
        "simulation complete"
    );
    Ok(table)
}

/// Parses `policy` and runs the simulation; unknown selectors fail with
/// [`SimulationError::InvalidPolicy`].
pub fn run_named<R: Rng + ?Sized>(
    params: &InventoryParams,
    policy: &str,
    rng: &mut R,
) -> Result<ResultTable, SimulationError> {
    run(params, policy.parse()?, rng)
}

/// Day-stepping state of a single run.
struct InventorySimulation<'a> {
    params: &'a InventoryParams,
    policy: Box<dyn OrderPolicy>,
    demand: DemandGenerator,

    stock: StockPoint,
    // Orders placed but not yet on the shelf
    pipeline: TimeDelayQueue,

    current_day: usize,
    history: Vec<SimulationRecord>,
}

impl<'a> InventorySimulation<'a> {
    fn new(
        params: &'a InventoryParams,
        policy: Box<dyn OrderPolicy>,
    ) -> Result<Self, SimulationError> {
        let demand = DemandGenerator::new(params.base_daily_demand(), params.demand_sigma())?;
        let pipeline = TimeDelayQueue::new(policy.arrival_delay(params), params.horizon_days());
        debug!(
            ?policy,
            delay = pipeline.delay(),
            stochastic = !demand.is_deterministic(),
            "simulation initialised"
        );

        Ok(Self {
            params,
            policy,
            demand,
            stock: StockPoint::new(params.initial_on_hand()),
            pipeline,
            current_day: 0,
            history: Vec::with_capacity(params.horizon_days()),
        })
    }

    fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        while self.current_day < self.params.horizon_days() {
            self.step(rng);
        }
    }

    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let day = self.current_day;

        // 1. Ordering decision
        let order = self.policy.calculate_order(day, self.params);
        self.stock.place_order(order);
        let arrives_on = self.pipeline.push_departure(day, order);
        if order > 0.0 {
            debug!(day, quantity = order, arrives_on, "order placed");
        }

        // 2. Arrivals (orders placed `delay` days ago, or today's with no delay)
        let arrival = self.pipeline.pop_arrival();
        self.stock.receive_shipment(arrival);

        // 3. Demand
        let demand = self.demand.next_day(rng);
        self.stock.consume(demand);

        trace!(
            day,
            demand,
            arrival = self.stock.last_arrival,
            ioh = self.stock.on_hand,
            in_transit = self.pipeline.in_transit(),
            "day simulated"
        );
        if self.stock.is_stocked_out() {
            debug!(day, ioh = self.stock.on_hand, "stockout");
        }

        self.record_history();
        self.current_day += 1;
    }

    fn record_history(&mut self) {
        self.history.push(SimulationRecord {
            day: self.current_day,
            demand: self.stock.last_demand,
            order: self.stock.last_order_placed,
            ioh: self.stock.on_hand,
        });
    }

    fn finish(self) -> ResultTable {
        ResultTable {
            records: self.history,
        }
    }
}
