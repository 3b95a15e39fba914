// src/io/reporting.rs

use crate::simulation::engine::{ResultTable, SimulationRecord};
use crate::simulation::error::SimulationError;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Key figures shown under the charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Days that ended with `ioh < 0`.
    pub stockout_days: usize,
    pub min_ioh: f64,
    pub mean_ioh: f64,
    pub total_demand: f64,
    pub total_ordered: f64,
    /// Days on which an order greater than zero was placed.
    pub order_count: usize,
}

impl SimulationSummary {
    /// Returns `None` for an empty table.
    pub fn from_records(records: &[SimulationRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let stockout_days = records.iter().filter(|r| r.ioh < 0.0).count();
        let min_ioh = records
            .iter()
            .map(|r| r.ioh)
            .fold(f64::INFINITY, f64::min);
        let mean_ioh = records.iter().map(|r| r.ioh).sum::<f64>() / records.len() as f64;

        Some(Self {
            stockout_days,
            min_ioh,
            mean_ioh,
            total_demand: records.iter().map(|r| r.demand).sum(),
            total_ordered: records.iter().map(|r| r.order).sum(),
            order_count: records.iter().filter(|r| r.order > 0.0).count(),
        })
    }
}

impl ResultTable {
    pub fn summary(&self) -> Option<SimulationSummary> {
        SimulationSummary::from_records(self.records())
    }
}

/// Writes the result table to a CSV file with the header `day,demand,order,ioh`.
pub fn write_simulation_log(
    file_path: impl AsRef<Path>,
    table: &ResultTable,
) -> Result<(), SimulationError> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for record in table {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    info!(rows = table.len(), path = %path.display(), "exported simulation log");
    Ok(())
}

/// Renders the summary as pretty-printed JSON.
pub fn summary_to_json(summary: &SimulationSummary) -> Result<String, SimulationError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::engine::run;
    use crate::simulation::params::InventoryParams;
    use crate::strategy::implementations::Policy;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(day: usize, demand: f64, order: f64, ioh: f64) -> SimulationRecord {
        SimulationRecord {
            day,
            demand,
            order,
            ioh,
        }
    }

    #[test]
    fn summary_counts_stockouts_and_extremes() {
        let records = vec![
            record(0, 2.0, 4.0, 2.0),
            record(1, 2.0, 0.0, 0.0),
            record(2, 2.0, 0.0, -2.0),
            record(3, 2.0, 4.0, 0.0),
        ];
        let summary = SimulationSummary::from_records(&records).unwrap();

        // ioh == 0 is not a stockout
        assert_eq!(summary.stockout_days, 1);
        assert_eq!(summary.min_ioh, -2.0);
        assert_eq!(summary.mean_ioh, 0.0);
        assert_eq!(summary.total_demand, 8.0);
        assert_eq!(summary.total_ordered, 8.0);
        assert_eq!(summary.order_count, 2);
    }

    #[test]
    fn empty_table_has_no_summary() {
        assert!(SimulationSummary::from_records(&[]).is_none());
        assert!(ResultTable::default().summary().is_none());
    }

    #[test]
    fn csv_has_fixed_columns() {
        let params = InventoryParams::new(30.0, 3, 0, 2, 10.0, 0.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let table = run(&params, Policy::Simple, &mut rng).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        write_simulation_log(&path, &table).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines[0], "day,demand,order,ioh");
        assert_eq!(lines[1], "0,10.0,10.0,0.0");
        assert_eq!(lines[2], "1,10.0,0.0,-10.0");
        assert_eq!(lines[3], "2,10.0,10.0,-10.0");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn summary_json_names_the_kpis() {
        let summary = SimulationSummary::from_records(&[record(0, 1.0, 0.0, -1.0)]).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&summary_to_json(&summary).unwrap()).unwrap();
        assert_eq!(json["stockout_days"], 1);
        assert_eq!(json["min_ioh"], -1.0);
        assert_eq!(json["mean_ioh"], -1.0);
    }
}
