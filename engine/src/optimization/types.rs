//! Adjustment-loop types and configuration
//!
//! The threshold, iteration cap, and step sizes are explicit
//! configuration rather than embedded literals so callers can override
//! and tests can pin them.

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Configuration for one adjustment run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentSettings {
    /// Scores strictly above this value flag a row for adjustment
    pub threshold: f64,

    /// Hard upper bound on iterations, independent of convergence
    pub max_iterations: u32,

    /// Additive thickness step applied to flagged rows (mm)
    pub thickness_step: f64,

    /// Additive stiffness step applied to flagged rows (MPa)
    pub stiffness_step: f64,
}

impl AdjustmentSettings {
    pub const DEFAULT_THRESHOLD: f64 = 650.0;
    pub const DEFAULT_MAX_ITERATIONS: u32 = 10;
    pub const DEFAULT_THICKNESS_STEP: f64 = 0.5;
    pub const DEFAULT_STIFFNESS_STEP: f64 = 20.0;

    /// Reject settings the loop cannot run with
    pub fn validate(&self) -> EngineResult<()> {
        if !self.threshold.is_finite() {
            return Err(EngineError::ConfigurationError {
                field: "threshold".to_string(),
            });
        }
        if self.max_iterations == 0 {
            return Err(EngineError::ConfigurationError {
                field: "max_iterations".to_string(),
            });
        }
        if !self.thickness_step.is_finite() || self.thickness_step < 0.0 {
            return Err(EngineError::ConfigurationError {
                field: "thickness_step".to_string(),
            });
        }
        if !self.stiffness_step.is_finite() || self.stiffness_step < 0.0 {
            return Err(EngineError::ConfigurationError {
                field: "stiffness_step".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for AdjustmentSettings {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            thickness_step: Self::DEFAULT_THICKNESS_STEP,
            stiffness_step: Self::DEFAULT_STIFFNESS_STEP,
        }
    }
}

/// Outcome of an adjustment run
///
/// "Did not converge within budget" is a normal terminal outcome carried
/// here, not an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentReport {
    /// Iterations actually executed (0 for an empty table)
    pub iterations_executed: u32,

    /// Whether the final iteration adjusted no row
    pub converged: bool,

    /// Number of rows in the table
    pub rows_total: usize,

    /// Rows still above the threshold after the final iteration
    pub rows_flagged: usize,
}

impl AdjustmentReport {
    /// Immediate convergence for an empty table
    pub fn empty() -> Self {
        Self {
            iterations_executed: 0,
            converged: true,
            rows_total: 0,
            rows_flagged: 0,
        }
    }

    /// Human-readable one-line summary for logs
    pub fn summary(&self) -> String {
        if self.converged {
            format!(
                "converged after {} iteration(s): {}/{} rows within threshold",
                self.iterations_executed,
                self.rows_total - self.rows_flagged,
                self.rows_total
            )
        } else {
            format!(
                "iteration budget exhausted after {} iteration(s): {} of {} rows still flagged",
                self.iterations_executed, self.rows_flagged, self.rows_total
            )
        }
    }
}
