//! Test helper functions for engine tests

use engine::optimization::{AdjustmentLoop, AdjustmentReport, AdjustmentSettings, FixedStepStrategy};
use engine::{FixedNoise, SurrogateModel, UniformNoise};
use shared::ParameterTable;

/// Common operations shared across test suites
pub struct TestHelpers;

impl TestHelpers {
    /// Model whose predictions carry no noise
    pub fn zero_noise_model() -> SurrogateModel {
        SurrogateModel::with_default_weights(Box::new(FixedNoise(0.0)))
    }

    /// Model with reproducible uniform noise
    pub fn seeded_model(seed: u64, amplitude: f64) -> SurrogateModel {
        SurrogateModel::with_default_weights(Box::new(UniformNoise::seeded(seed, amplitude)))
    }

    /// Run the loop with default settings and the given model
    pub fn run_default_loop(table: &mut ParameterTable, model: &mut SurrogateModel) -> AdjustmentReport {
        Self::run_loop(table, model, AdjustmentSettings::default())
    }

    /// Run the loop with explicit settings and the given model
    pub fn run_loop(
        table: &mut ParameterTable,
        model: &mut SurrogateModel,
        settings: AdjustmentSettings,
    ) -> AdjustmentReport {
        let runner = AdjustmentLoop::new(settings).expect("valid test settings");
        let strategy = FixedStepStrategy::from_settings(&settings);
        runner.run(table, model, &strategy)
    }

    /// Snapshot of (thickness, stiffness) per row, for monotonicity checks
    pub fn adjustable_fields(table: &ParameterTable) -> Vec<(f64, f64)> {
        table.rows().iter().map(|r| (r.thickness, r.stiffness)).collect()
    }
}
