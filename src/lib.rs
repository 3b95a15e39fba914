//! Day-by-day inventory simulation for a single stocking point.
//!
//! Build an [`InventoryParams`], pick a [`Policy`] and hand both to
//! [`run`] together with an RNG. The returned [`ResultTable`] holds one
//! [`SimulationRecord`] per day; [`ResultTable::summary`] gives the stockout
//! count, minimum and mean inventory on hand.
//!
//! ```
//! use inventory_simulation::{run, InventoryParams, Policy, SimulationConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let params = InventoryParams::try_from(SimulationConfig::default()).unwrap();
//! let mut rng = StdRng::seed_from_u64(1991);
//! let table = run(&params, Policy::Simple, &mut rng).unwrap();
//! assert_eq!(table.len(), 365);
//! ```

pub mod io;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use io::reporting::SimulationSummary;
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{run, run_named, ResultTable, SimulationRecord};
pub use simulation::error::SimulationError;
pub use simulation::params::InventoryParams;
pub use strategy::implementations::Policy;
