//! Random initial states: uniform density, left-to-right gradient, digit prompts

use super::engine::AutomatonEngine;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Resolution of the discrete draw behind every seeded cell
pub const DRAW_RESOLUTION: u32 = 65536;

/// Largest digit accepted by the density prompt
pub const MAX_DENSITY_DIGIT: u8 = 9;

/// Density entered as a single keystroke: `digit / 11`
pub fn density_from_digit(digit: u8) -> f64 {
    digit as f64 / 11.0
}

/// Seeds cell states from a live-density ratio
#[derive(Debug, Clone)]
pub struct SeedGenerator {
    rng: SmallRng,
}

impl SeedGenerator {
    /// Reproducible generator
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from the configured value, or randomly when absent
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        debug!(seed, "seed generator ready");
        Self::from_seed(seed)
    }

    /// One cell's draw: alive iff a value in `0..65536` is at most `density * 65536`
    pub fn cell_value(&mut self, density: f64) -> bool {
        let cutoff = (DRAW_RESOLUTION as f64 * density) as i64;
        let draw = self.rng.random_range(0..DRAW_RESOLUTION) as i64;
        draw <= cutoff
    }

    /// Fill the current generation at a uniform density
    pub fn uniform(&mut self, engine: &mut AutomatonEngine, density: f64) {
        debug!(density, "uniform reseed");
        engine.reseed(|_| self.cell_value(density));
    }

    /// Fill the current generation with a density ramp from the left edge to the right
    pub fn gradient(&mut self, engine: &mut AutomatonEngine) {
        let columns = engine.columns();
        debug!(columns, "gradient reseed");
        engine.reseed(|index| {
            let density = (index % columns) as f64 / (columns + 1) as f64;
            self.cell_value(density)
        });
    }
}
