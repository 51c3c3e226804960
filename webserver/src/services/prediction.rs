//! Engine-backed prediction service
//!
//! Wraps the surrogate model and adjustment loop behind the
//! PredictionService trait. The model carries the noise generator, so
//! it sits behind a mutex; the loop itself is synchronous and runs to
//! completion within the request.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use engine::optimization::{AdjustmentLoop, AdjustmentSettings, FixedStepStrategy};
use engine::{grid, SurrogateModel, UniformNoise};
use shared::{ImpactParameters, ParameterTable, RiskLevel};

use crate::error::WebServerResult;
use crate::traits::PredictionService;
use crate::types::{OptimizationOutcome, Prediction, SettingsOverrides};

/// Real prediction service backed by the engine crate
pub struct EnginePredictionService {
    model: Arc<Mutex<SurrogateModel>>,
    defaults: AdjustmentSettings,
}

impl EnginePredictionService {
    /// Create a service around an existing model
    pub fn new(model: SurrogateModel, defaults: AdjustmentSettings) -> Self {
        Self {
            model: Arc::new(Mutex::new(model)),
            defaults,
        }
    }

    /// Create a service with default weights and uniform noise
    ///
    /// A seed pins the noise generator for reproducible demo runs.
    pub fn with_noise(amplitude: f64, seed: Option<u64>, defaults: AdjustmentSettings) -> Self {
        let noise = match seed {
            Some(seed) => UniformNoise::seeded(seed, amplitude),
            None => UniformNoise::new(amplitude),
        };
        Self::new(SurrogateModel::with_default_weights(Box::new(noise)), defaults)
    }

    pub fn defaults(&self) -> &AdjustmentSettings {
        &self.defaults
    }
}

#[async_trait]
impl PredictionService for EnginePredictionService {
    async fn predict(&self, params: ImpactParameters) -> WebServerResult<Prediction> {
        params.validate()?;

        let mut model = self.model.lock().await;
        let predicted_hic = model.predict(&params);

        Ok(Prediction {
            predicted_hic,
            risk_level: RiskLevel::classify(predicted_hic),
        })
    }

    async fn optimize(
        &self,
        mut table: ParameterTable,
        overrides: SettingsOverrides,
        include_grid: bool,
    ) -> WebServerResult<OptimizationOutcome> {
        table.validate()?;

        let settings = overrides.apply(&self.defaults);
        let runner = AdjustmentLoop::new(settings)?;
        let strategy = FixedStepStrategy::from_settings(&settings);

        let report = {
            let mut model = self.model.lock().await;
            runner.run(&mut table, &mut model, &strategy)
        };
        debug!(summary = %report.summary(), "optimization run finished");

        let grid = if include_grid { Some(grid::pivot(&table)?) } else { None };

        Ok(OptimizationOutcome {
            rows: table.into_rows(),
            report,
            grid,
        })
    }
}
