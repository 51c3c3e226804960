//! The row adjustment loop
//!
//! Repeatedly scores every row of a parameter table and perturbs rows
//! that exceed the safety threshold, until an iteration adjusts no row
//! or the iteration budget runs out. Because the score includes bounded
//! random noise, a row can flip between safe and flagged across
//! iterations; that variability is intended demo behavior, not a defect.

use super::traits::AdjustmentStrategy;
use super::types::{AdjustmentReport, AdjustmentSettings};
use crate::error::EngineResult;
use crate::model::SurrogateModel;
use shared::{ParameterTable, Recommendation};
use tracing::debug;

/// Runs the adjustment loop with validated settings
pub struct AdjustmentLoop {
    settings: AdjustmentSettings,
}

impl AdjustmentLoop {
    /// Create a loop runner, rejecting unusable settings up front
    pub fn new(settings: AdjustmentSettings) -> EngineResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &AdjustmentSettings {
        &self.settings
    }

    /// Score and adjust the table in place until convergence or budget
    ///
    /// Each iteration walks the rows in table order: the score and
    /// recommendation from this pass are stored on the row, and flagged
    /// rows are adjusted immediately so the next iteration scores the
    /// perturbed values. An iteration that flags no row ends the loop
    /// before consuming further budget.
    pub fn run(
        &self,
        table: &mut ParameterTable,
        model: &mut SurrogateModel,
        strategy: &dyn AdjustmentStrategy,
    ) -> AdjustmentReport {
        if table.is_empty() {
            return AdjustmentReport::empty();
        }

        let mut iterations_executed = 0;
        let mut converged = false;
        let mut rows_flagged = 0;

        for iteration in 1..=self.settings.max_iterations {
            iterations_executed = iteration;
            rows_flagged = 0;

            for row in table.rows_mut() {
                let score = model.predict(&row.parameters());
                row.predicted_hic = Some(score);

                if score > self.settings.threshold {
                    row.recommendation = Some(Recommendation::NeedsAdjustment);
                    strategy.adjust(row);
                    rows_flagged += 1;
                } else {
                    row.recommendation = Some(Recommendation::Safe);
                }
            }

            debug!(
                iteration,
                rows_flagged,
                strategy = strategy.name(),
                "adjustment pass complete"
            );

            if rows_flagged == 0 {
                converged = true;
                break;
            }
        }

        AdjustmentReport {
            iterations_executed,
            converged,
            rows_total: table.len(),
            rows_flagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SurrogateModel;
    use crate::noise::FixedNoise;
    use crate::optimization::strategies::FixedStepStrategy;
    use shared::ParameterRow;

    fn zero_noise_model() -> SurrogateModel {
        SurrogateModel::with_default_weights(Box::new(FixedNoise(0.0)))
    }

    #[test]
    fn test_empty_table_converges_without_iterating() {
        let runner = AdjustmentLoop::new(AdjustmentSettings::default()).unwrap();
        let mut table = ParameterTable::new();
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert_eq!(report, AdjustmentReport::empty());
    }

    #[test]
    fn test_safe_table_converges_in_one_iteration() {
        let runner = AdjustmentLoop::new(AdjustmentSettings::default()).unwrap();
        // Deterministic score 300, well below 650
        let mut table = ParameterTable::from_rows(vec![ParameterRow::new(0, 0, 1.0, 100.0, 5.0, 5.0)]);
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert_eq!(report.iterations_executed, 1);
        assert!(report.converged);
        assert_eq!(report.rows_flagged, 0);

        let row = &table.rows()[0];
        assert_eq!(row.predicted_hic, Some(300.0));
        assert_eq!(row.recommendation, Some(Recommendation::Safe));
        // Adjustable fields unchanged
        assert_eq!(row.thickness, 1.0);
        assert_eq!(row.stiffness, 100.0);
    }

    #[test]
    fn test_unsafe_row_is_adjusted_each_iteration() {
        let settings = AdjustmentSettings {
            max_iterations: 1,
            ..Default::default()
        };
        let runner = AdjustmentLoop::new(settings).unwrap();
        // Deterministic score 1950, far above 650
        let mut table = ParameterTable::from_rows(vec![ParameterRow::new(0, 0, 10.0, 900.0, 20.0, 40.0)]);
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert_eq!(report.iterations_executed, 1);
        assert!(!report.converged);
        assert_eq!(report.rows_flagged, 1);

        let row = &table.rows()[0];
        assert_eq!(row.predicted_hic, Some(1950.0));
        assert_eq!(row.recommendation, Some(Recommendation::NeedsAdjustment));
        assert_eq!(row.thickness, 10.5);
        assert_eq!(row.stiffness, 920.0);
    }

    #[test]
    fn test_loop_stops_at_iteration_cap() {
        let runner = AdjustmentLoop::new(AdjustmentSettings::default()).unwrap();
        // The fixed step raises the score, so this row never converges
        let mut table = ParameterTable::from_rows(vec![ParameterRow::new(0, 0, 10.0, 900.0, 20.0, 40.0)]);
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert_eq!(report.iterations_executed, 10);
        assert!(!report.converged);

        // Ten adjustments applied in total
        let row = &table.rows()[0];
        assert_eq!(row.thickness, 15.0);
        assert_eq!(row.stiffness, 1100.0);
    }

    #[test]
    fn test_score_equal_to_threshold_is_safe() {
        let runner = AdjustmentLoop::new(AdjustmentSettings::default()).unwrap();
        // 13*50 = 650 exactly
        let mut table = ParameterTable::from_rows(vec![ParameterRow::new(0, 0, 13.0, 0.0, 0.0, 0.0)]);
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert!(report.converged);
        assert_eq!(table.rows()[0].recommendation, Some(Recommendation::Safe));
    }

    #[test]
    fn test_strategy_is_called_once_per_flagged_row() {
        use crate::optimization::traits::MockAdjustmentStrategy;

        let settings = AdjustmentSettings {
            max_iterations: 1,
            ..Default::default()
        };
        let runner = AdjustmentLoop::new(settings).unwrap();
        let mut table = ParameterTable::from_rows(vec![
            ParameterRow::new(0, 0, 1.0, 100.0, 5.0, 5.0),    // safe
            ParameterRow::new(1, 0, 10.0, 900.0, 20.0, 40.0), // flagged
        ]);
        let mut model = zero_noise_model();

        let mut strategy = MockAdjustmentStrategy::new();
        strategy.expect_adjust().times(1).returning(|_| ());
        strategy.expect_name().return_const("mock".to_string());

        let report = runner.run(&mut table, &mut model, &strategy);
        assert_eq!(report.rows_flagged, 1);
    }

    #[test]
    fn test_mixed_table_only_adjusts_flagged_rows() {
        let settings = AdjustmentSettings {
            max_iterations: 1,
            ..Default::default()
        };
        let runner = AdjustmentLoop::new(settings).unwrap();
        let mut table = ParameterTable::from_rows(vec![
            ParameterRow::new(0, 0, 1.0, 100.0, 5.0, 5.0),    // 300, safe
            ParameterRow::new(1, 0, 10.0, 900.0, 20.0, 40.0), // 1950, flagged
        ]);
        let mut model = zero_noise_model();

        let report = runner.run(&mut table, &mut model, &FixedStepStrategy::default());

        assert_eq!(report.rows_total, 2);
        assert_eq!(report.rows_flagged, 1);
        assert_eq!(table.rows()[0].thickness, 1.0);
        assert_eq!(table.rows()[1].thickness, 10.5);
    }
}
