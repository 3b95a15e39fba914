use clap::Parser;
use inventory_simulation::io::reporting::{self, SimulationSummary};
use inventory_simulation::{run, InventoryParams, Policy, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Default seed, fixed so a plain invocation always produces the same series.
const DEFAULT_SEED: u64 = 1991;

/// Inventory simulation: demand, orders and inventory on hand, day by day.
#[derive(Parser, Debug)]
#[command(name = "inventory-sim", version, long_about = None)]
struct Cli {
    /// JSON file with simulation parameters (flags below override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Annual demand D (units/year)
    #[arg(long)]
    annual_demand: Option<f64>,

    /// Horizon T_total (days)
    #[arg(long)]
    horizon_days: Option<usize>,

    /// Lead time LD (days)
    #[arg(long)]
    lead_time_days: Option<usize>,

    /// Cycle time T (days)
    #[arg(long)]
    cycle_days: Option<usize>,

    /// Order quantity Q (units)
    #[arg(long)]
    order_quantity: Option<f64>,

    /// Initial inventory on hand (units)
    #[arg(long)]
    initial_on_hand: Option<f64>,

    /// Daily demand standard deviation (units/day); 0 is deterministic
    #[arg(long)]
    demand_sigma: Option<f64>,

    /// Ordering method: `simple` or `lead-time-aware` (default `simple`)
    #[arg(short, long)]
    policy: Option<Policy>,

    /// RNG seed; every run is reseeded with it
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Write the per-day table to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn simulation_config(&self) -> Result<SimulationConfig, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };

        if let Some(v) = self.annual_demand {
            config.annual_demand = v;
        }
        if let Some(v) = self.horizon_days {
            config.horizon_days = v;
        }
        if let Some(v) = self.lead_time_days {
            config.lead_time_days = v;
        }
        if let Some(v) = self.cycle_days {
            config.cycle_days = v;
        }
        if let Some(v) = self.order_quantity {
            config.order_quantity = v;
        }
        if let Some(v) = self.initial_on_hand {
            config.initial_on_hand = v;
        }
        if let Some(v) = self.demand_sigma {
            config.demand_sigma = v;
        }
        if let Some(v) = self.policy {
            config.policy = v;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    execute(&cli).map_err(|e| {
        error!("{e}");
        e
    })
}

fn execute(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.simulation_config()?;
    let policy = config.policy;
    let params = InventoryParams::try_from(config)?;
    if !cli.json {
        print_inputs(&params, policy);
    }

    let mut rng = StdRng::seed_from_u64(cli.seed);
    info!(seed = cli.seed, %policy, "running simulation");
    let table = run(&params, policy, &mut rng)?;

    if let Some(path) = &cli.output {
        reporting::write_simulation_log(path, &table)?;
    }

    if let Some(summary) = table.summary() {
        if cli.json {
            println!("{}", reporting::summary_to_json(&summary)?);
        } else {
            print_summary(&summary);
        }
    }
    Ok(())
}

fn print_inputs(params: &InventoryParams, policy: Policy) {
    println!("=== Inventory Simulation ({policy}) ===");
    println!("Average daily demand: {:.2} units/day", params.base_daily_demand());
    println!("Lead time:            {} days", params.lead_time_days());
    println!("Cycle time:           {} days", params.cycle_days());
    println!("Order quantity Q:     {:.0} units", params.order_quantity());
    println!("Initial IOH:          {:.0} units", params.initial_on_hand());
    println!("Demand sigma:         {:.2} units/day", params.demand_sigma());
}

fn print_summary(summary: &SimulationSummary) {
    println!("\n=== Key Figures ===");
    println!("Stockout days:    {}", summary.stockout_days);
    println!("Min IOH (units):  {:.0}", summary.min_ioh);
    println!("Avg IOH (units):  {:.0}", summary.mean_ioh);
}
