//! Injectable noise source for the surrogate model
//!
//! The scoring formula includes a bounded random perturbation. The loop
//! depends on it only through the scoring function, so tests fix it to a
//! known value and reproducible runs pin the generator seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded random perturbation added to each prediction
#[mockall::automock]
pub trait NoiseSource: Send {
    /// Draw the next perturbation value
    fn sample(&mut self) -> f64;
}

/// Uniform noise in [-amplitude, +amplitude]
pub struct UniformNoise {
    rng: StdRng,
    amplitude: f64,
}

impl UniformNoise {
    /// Default amplitude matching the original demo formula
    pub const DEFAULT_AMPLITUDE: f64 = 50.0;

    /// Create an entropy-seeded source with the given amplitude
    pub fn new(amplitude: f64) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            amplitude,
        }
    }

    /// Create a reproducible source from a fixed seed
    pub fn seeded(seed: u64, amplitude: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            amplitude,
        }
    }
}

impl Default for UniformNoise {
    fn default() -> Self {
        Self::new(Self::DEFAULT_AMPLITUDE)
    }
}

impl NoiseSource for UniformNoise {
    fn sample(&mut self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}

/// Constant perturbation, used for deterministic tests and noise-free runs
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&mut self) -> f64 {
        self.0
    }
}
