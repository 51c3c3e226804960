//! Request, response, and service data types for the webserver
//!
//! These are component-internal shapes; the domain types they wrap live
//! in the shared crate.

use engine::optimization::{AdjustmentReport, AdjustmentSettings};
use engine::HicGrid;
use serde::{Deserialize, Serialize};
use shared::{ImpactParameters, ParameterRow, RiskLevel};

/// Body of POST /api/predict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub thickness: f64,
    pub stiffness: f64,
    pub velocity: f64,
    pub penetration: f64,
}

impl PredictRequest {
    pub fn parameters(&self) -> ImpactParameters {
        ImpactParameters {
            thickness: self.thickness,
            stiffness: self.stiffness,
            velocity: self.velocity,
            penetration: self.penetration,
        }
    }
}

/// Result of a single prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_hic: f64,
    pub risk_level: RiskLevel,
}

/// Per-request overrides of the server's default adjustment settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SettingsOverrides {
    pub threshold: Option<f64>,
    pub max_iterations: Option<u32>,
    pub thickness_step: Option<f64>,
    pub stiffness_step: Option<f64>,
}

impl SettingsOverrides {
    /// Apply the overrides on top of a base settings block
    pub fn apply(&self, base: &AdjustmentSettings) -> AdjustmentSettings {
        AdjustmentSettings {
            threshold: self.threshold.unwrap_or(base.threshold),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            thickness_step: self.thickness_step.unwrap_or(base.thickness_step),
            stiffness_step: self.stiffness_step.unwrap_or(base.stiffness_step),
        }
    }
}

/// Body of POST /api/optimize
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// JSON mirror of the FEA CSV rows
    pub rows: Vec<ParameterRow>,

    /// Optional settings overrides for this run
    #[serde(default)]
    pub settings: Option<SettingsOverrides>,

    /// Whether to include the pivoted heatmap grid in the response
    #[serde(default)]
    pub include_grid: bool,
}

/// Result of an optimization run
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationOutcome {
    pub rows: Vec<ParameterRow>,
    pub report: AdjustmentReport,
    pub grid: Option<HicGrid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let base = AdjustmentSettings::default();
        let overrides = SettingsOverrides {
            threshold: Some(700.0),
            max_iterations: None,
            thickness_step: None,
            stiffness_step: Some(5.0),
        };

        let settings = overrides.apply(&base);

        assert_eq!(settings.threshold, 700.0);
        assert_eq!(settings.max_iterations, base.max_iterations);
        assert_eq!(settings.thickness_step, base.thickness_step);
        assert_eq!(settings.stiffness_step, 5.0);
    }

    #[test]
    fn test_optimize_request_defaults() {
        let request: OptimizeRequest = serde_json::from_str(
            r#"{"rows": [{"x": 0, "y": 0, "thickness": 2.5, "stiffness": 450.0, "velocity": 11.0, "penetration": 15.0}]}"#,
        )
        .unwrap();

        assert_eq!(request.rows.len(), 1);
        assert!(request.settings.is_none());
        assert!(!request.include_grid);
    }
}
