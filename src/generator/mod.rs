mod components;

pub use components::{month_starts, round_to_cents, seasonal, trend};

use anyhow::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::constants::{EPOCH_MONTH, EPOCH_YEAR, MONTH_COUNT, NOISE_STD_DEV, RNG_SEED};
use crate::model::Region;
use crate::observation::Observation;

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub start: NaiveDate,
    pub month_count: usize,
    pub regions: Vec<Region>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: RNG_SEED,
            start: NaiveDate::from_ymd_opt(EPOCH_YEAR, EPOCH_MONTH, 1)
                .expect("static epoch date is valid"),
            month_count: MONTH_COUNT,
            regions: Region::ALL.to_vec(),
        }
    }
}

/// Generate the full observation set from a fresh RNG seeded with
/// `config.seed`.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<Observation>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_with_rng(config, &mut rng)
}

/// Generate observations drawing noise from `rng`, one draw per
/// observation, all months of a region before the next region. The draw
/// order is a reproducibility contract: reordering it changes every value.
pub fn generate_with_rng(config: &GeneratorConfig, rng: &mut StdRng) -> Result<Vec<Observation>> {
    let months = month_starts(config.start, config.month_count)?;
    let mut observations = Vec::with_capacity(config.regions.len() * months.len());

    for &region in &config.regions {
        let base = region.base_revenue();
        for (index, &date) in months.iter().enumerate() {
            let noise = rng.sample::<f64, _>(StandardNormal) * NOISE_STD_DEV;
            let revenue = base + trend(index, months.len()) + seasonal(index) + noise;
            observations.push(Observation {
                date,
                region,
                revenue: round_to_cents(revenue),
            });
        }
    }

    Ok(observations)
}
