//! Adjustment strategy trait definition
//!
//! This module contains only the trait definition for row adjustment
//! strategies, keeping the interface clean and focused.

use shared::ParameterRow;

/// How a flagged row is perturbed between iterations
///
/// The loop calls this once per flagged row per iteration; the adjusted
/// fields are picked up by the next iteration's scoring pass.
#[mockall::automock]
pub trait AdjustmentStrategy: Send + Sync {
    /// Apply the adjustment to a row that exceeded the threshold
    fn adjust(&self, row: &mut ParameterRow);

    /// Strategy name for reports and logs
    fn name(&self) -> &str;
}
