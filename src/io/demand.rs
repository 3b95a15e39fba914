// src/io/demand.rs

use crate::simulation::error::SimulationError;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Produces the realised demand for each simulated day.
///
/// Demand is `base + noise` with `noise ~ Normal(0, sigma)`. With `sigma == 0`
/// every day is exactly `base` and no random number is drawn, so the run does
/// not touch the RNG at all.
///
/// Realised demand is NOT clamped at zero. A large `sigma` relative to `base`
/// can produce negative demand days, which put stock back on the shelf.
#[derive(Debug, Clone)]
pub struct DemandGenerator {
    base: f64,
    noise: Option<Normal<f64>>,
}

impl DemandGenerator {
    pub fn new(base: f64, sigma: f64) -> Result<Self, SimulationError> {
        let noise = if sigma == 0.0 {
            None
        } else {
            let normal = Normal::new(0.0, sigma)
                .map_err(|e| SimulationError::invalid("demand_sigma", e.to_string()))?;
            Some(normal)
        };
        Ok(Self { base, noise })
    }

    pub fn is_deterministic(&self) -> bool {
        self.noise.is_none()
    }

    /// Draws one day of demand.
    pub fn next_day<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.noise {
            Some(normal) => self.base + normal.sample(rng),
            None => self.base,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_sigma_is_constant_and_leaves_rng_untouched() {
        let demand = DemandGenerator::new(5.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut untouched = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(demand.next_day(&mut rng), 5.0);
        }
        assert!(demand.is_deterministic());
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn same_seed_same_draws() {
        let demand = DemandGenerator::new(5.0, 2.0).unwrap();
        let mut a = StdRng::seed_from_u64(1991);
        let mut b = StdRng::seed_from_u64(1991);

        let xs: Vec<f64> = (0..20).map(|_| demand.next_day(&mut a)).collect();
        let ys: Vec<f64> = (0..20).map(|_| demand.next_day(&mut b)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().any(|&x| x != 5.0));
    }

    #[test]
    fn large_sigma_can_produce_negative_demand() {
        let demand = DemandGenerator::new(0.1, 50.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let negative = (0..200).any(|_| demand.next_day(&mut rng) < 0.0);
        assert!(negative, "demand should not be clamped at zero");
    }

    #[test]
    fn sample_mean_is_close_to_base() {
        let demand = DemandGenerator::new(10.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let n = 5_000;
        let mean = (0..n).map(|_| demand.next_day(&mut rng)).sum::<f64>() / n as f64;
        assert!((mean - 10.0).abs() < 0.1, "mean was {mean}");
    }
}
