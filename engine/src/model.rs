//! Placeholder surrogate model for HIC prediction
//!
//! There is no trained model here. The "CNN + DNN hybrid" of the demo is
//! simulated by a fixed linear combination of the four inputs plus a
//! bounded perturbation from the injected noise source.

use crate::noise::NoiseSource;
use serde::{Deserialize, Serialize};
use shared::{ImpactParameters, RiskLevel};

/// Linear coefficients of the surrogate formula
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurrogateWeights {
    pub thickness: f64,
    pub stiffness: f64,
    pub velocity: f64,
    pub penetration: f64,
}

impl Default for SurrogateWeights {
    fn default() -> Self {
        Self {
            thickness: 50.0,
            stiffness: 0.5,
            velocity: 30.0,
            penetration: 10.0,
        }
    }
}

/// Surrogate scorer combining the linear formula with injected noise
pub struct SurrogateModel {
    weights: SurrogateWeights,
    noise: Box<dyn NoiseSource>,
}

impl SurrogateModel {
    /// Create a model with explicit weights and noise source
    pub fn new(weights: SurrogateWeights, noise: Box<dyn NoiseSource>) -> Self {
        Self { weights, noise }
    }

    /// Create a model with the demo's default coefficients
    pub fn with_default_weights(noise: Box<dyn NoiseSource>) -> Self {
        Self::new(SurrogateWeights::default(), noise)
    }

    pub fn weights(&self) -> &SurrogateWeights {
        &self.weights
    }

    /// The noise-free component of the score
    pub fn deterministic_score(&self, params: &ImpactParameters) -> f64 {
        params.thickness * self.weights.thickness
            + params.stiffness * self.weights.stiffness
            + params.velocity * self.weights.velocity
            + params.penetration * self.weights.penetration
    }

    /// Full prediction: deterministic component plus one noise draw
    pub fn predict(&mut self, params: &ImpactParameters) -> f64 {
        self.deterministic_score(params) + self.noise.sample()
    }

    /// Classify a predicted value into its risk band
    pub fn classify(&self, hic: f64) -> RiskLevel {
        RiskLevel::classify(hic)
    }
}

/// Round to two decimals for display, as the original panel does
pub fn round_for_display(hic: f64) -> f64 {
    (hic * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::FixedNoise;

    fn params(thickness: f64, stiffness: f64, velocity: f64, penetration: f64) -> ImpactParameters {
        ImpactParameters {
            thickness,
            stiffness,
            velocity,
            penetration,
        }
    }

    #[test]
    fn test_deterministic_score_matches_formula() {
        let model = SurrogateModel::with_default_weights(Box::new(FixedNoise(0.0)));

        // 1*50 + 100*0.5 + 5*30 + 5*10 = 300
        let score = model.deterministic_score(&params(1.0, 100.0, 5.0, 5.0));
        assert_eq!(score, 300.0);

        // 10*50 + 900*0.5 + 20*30 + 40*10 = 1950
        let score = model.deterministic_score(&params(10.0, 900.0, 20.0, 40.0));
        assert_eq!(score, 1950.0);
    }

    #[test]
    fn test_predict_adds_noise_draw() {
        let mut model = SurrogateModel::with_default_weights(Box::new(FixedNoise(25.0)));
        let score = model.predict(&params(1.0, 100.0, 5.0, 5.0));
        assert_eq!(score, 325.0);
    }

    #[test]
    fn test_classify_uses_shared_bands() {
        let model = SurrogateModel::with_default_weights(Box::new(FixedNoise(0.0)));
        assert_eq!(model.classify(300.0), RiskLevel::Safe);
        assert_eq!(model.classify(800.0), RiskLevel::Moderate);
        assert_eq!(model.classify(1200.0), RiskLevel::Dangerous);
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(123.4567), 123.46);
        assert_eq!(round_for_display(650.0), 650.0);
    }
}
