//! Fixed additive step strategy
//!
//! The demo's only adjustment heuristic: nudge thickness and stiffness
//! upward by constant steps for every flagged row. Deliberately naive;
//! whether this ever brings a row under the threshold depends entirely
//! on the surrogate's coefficients.

use super::super::traits::AdjustmentStrategy;
use super::super::types::AdjustmentSettings;
use shared::ParameterRow;

/// Constant additive adjustment to thickness and stiffness
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStepStrategy {
    thickness_step: f64,
    stiffness_step: f64,
}

impl FixedStepStrategy {
    /// Create a strategy with explicit step sizes
    pub fn new(thickness_step: f64, stiffness_step: f64) -> Self {
        Self {
            thickness_step,
            stiffness_step,
        }
    }

    /// Take the step sizes from an adjustment settings block
    pub fn from_settings(settings: &AdjustmentSettings) -> Self {
        Self::new(settings.thickness_step, settings.stiffness_step)
    }
}

impl Default for FixedStepStrategy {
    fn default() -> Self {
        Self::from_settings(&AdjustmentSettings::default())
    }
}

impl AdjustmentStrategy for FixedStepStrategy {
    fn adjust(&self, row: &mut ParameterRow) {
        row.thickness += self.thickness_step;
        row.stiffness += self.stiffness_step;
    }

    fn name(&self) -> &str {
        "fixed_step"
    }
}
