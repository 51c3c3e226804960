//! Core shared types for parameter tables and risk classification

use crate::errors::{SharedError, SharedResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four adjustable/physical inputs the surrogate model scores
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactParameters {
    /// Material thickness in mm
    pub thickness: f64,
    /// Material stiffness in MPa
    pub stiffness: f64,
    /// Impact velocity in m/s
    pub velocity: f64,
    /// Penetration depth in mm
    pub penetration: f64,
}

impl ImpactParameters {
    /// Check that all fields are finite numbers
    pub fn validate(&self) -> SharedResult<()> {
        for (field, value) in [
            ("thickness", self.thickness),
            ("stiffness", self.stiffness),
            ("velocity", self.velocity),
            ("penetration", self.penetration),
        ] {
            if !value.is_finite() {
                return Err(SharedError::NonFiniteValue {
                    field: field.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// A single FEA parameter row with its grid position and derived fields
///
/// `x` and `y` are positional identifiers used only when pivoting the
/// table into a 2-D grid for display; the adjustment loop never
/// interprets them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRow {
    pub x: i64,
    pub y: i64,
    pub thickness: f64,
    pub stiffness: f64,
    pub velocity: f64,
    pub penetration: f64,

    /// Last score computed for this row, if any iteration has run
    #[serde(default)]
    pub predicted_hic: Option<f64>,

    /// Classification from the last evaluated iteration
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

impl ParameterRow {
    /// Create a row with no derived fields populated yet
    pub fn new(x: i64, y: i64, thickness: f64, stiffness: f64, velocity: f64, penetration: f64) -> Self {
        Self {
            x,
            y,
            thickness,
            stiffness,
            velocity,
            penetration,
            predicted_hic: None,
            recommendation: None,
        }
    }

    /// The scoring inputs of this row
    pub fn parameters(&self) -> ImpactParameters {
        ImpactParameters {
            thickness: self.thickness,
            stiffness: self.stiffness,
            velocity: self.velocity,
            penetration: self.penetration,
        }
    }

    /// Check that all numeric fields are finite
    pub fn validate(&self) -> SharedResult<()> {
        self.parameters().validate()
    }
}

/// Ordered collection of parameter rows, mutated in place by the loop
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterTable {
    rows: Vec<ParameterRow>,
}

impl ParameterTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build a table from existing rows, preserving order
    pub fn from_rows(rows: Vec<ParameterRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: ParameterRow) {
        self.rows.push(row);
    }

    /// Read-only view of the rows in table order
    pub fn rows(&self) -> &[ParameterRow] {
        &self.rows
    }

    /// Exclusive access for in-place iteration updates
    pub fn rows_mut(&mut self) -> &mut [ParameterRow] {
        &mut self.rows
    }

    /// Consume the table, returning its rows
    pub fn into_rows(self) -> Vec<ParameterRow> {
        self.rows
    }

    /// Validate every row, reporting the first offending row index
    pub fn validate(&self) -> SharedResult<()> {
        for row in &self.rows {
            row.validate()?;
        }
        Ok(())
    }
}

/// Binary per-row classification written by the adjustment loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Safe,
    NeedsAdjustment,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Safe => "safe",
            Recommendation::NeedsAdjustment => "needs adjustment",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Three-tier risk band used by the single-prediction panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Moderate,
    Dangerous,
}

impl RiskLevel {
    /// Upper bound (exclusive) of the safe band
    pub const SAFE_LIMIT: f64 = 650.0;

    /// Upper bound (inclusive) of the moderate band
    pub const MODERATE_LIMIT: f64 = 1000.0;

    /// Classify a predicted HIC value into its risk band
    pub fn classify(hic: f64) -> Self {
        if hic < Self::SAFE_LIMIT {
            RiskLevel::Safe
        } else if hic <= Self::MODERATE_LIMIT {
            RiskLevel::Moderate
        } else {
            RiskLevel::Dangerous
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Moderate => "moderate",
            RiskLevel::Dangerous => "dangerous",
        }
    }

    /// Uppercase label matching the original prediction panel
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "SAFE",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::Dangerous => "DANGEROUS",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_classification_bands() {
        assert_eq!(RiskLevel::classify(0.0), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify(649.99), RiskLevel::Safe);
        assert_eq!(RiskLevel::classify(650.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(1000.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::classify(1000.01), RiskLevel::Dangerous);
    }

    #[test]
    fn test_row_validation_rejects_non_finite() {
        let mut row = ParameterRow::new(0, 0, 2.5, 450.0, 11.0, 15.0);
        assert!(row.validate().is_ok());

        row.stiffness = f64::NAN;
        let err = row.validate().unwrap_err();
        assert!(matches!(err, SharedError::NonFiniteValue { ref field } if field == "stiffness"));
    }

    #[test]
    fn test_table_round_trip() {
        let rows = vec![
            ParameterRow::new(0, 0, 1.0, 100.0, 5.0, 5.0),
            ParameterRow::new(1, 0, 2.0, 200.0, 6.0, 6.0),
        ];
        let table = ParameterTable::from_rows(rows.clone());
        assert_eq!(table.len(), 2);
        assert_eq!(table.into_rows(), rows);
    }
}
