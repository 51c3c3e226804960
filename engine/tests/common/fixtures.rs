//! Test fixtures and data for engine tests
//!
//! This module provides consistent test data used across the test suites.

use shared::{ParameterRow, ParameterTable};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Standard configuration values
    pub const THRESHOLD: f64 = 650.0;
    pub const ITERATION_CAP: u32 = 10;

    /// CSV with the required column set and two rows
    pub const VALID_CSV: &'static str = "X,Y,Thickness,Stiffness,Velocity,Penetration\n\
                                         0,0,1.0,100.0,5.0,5.0\n\
                                         1,0,10.0,900.0,20.0,40.0\n";

    /// CSV missing the Penetration column
    pub const MISSING_COLUMN_CSV: &'static str = "X,Y,Thickness,Stiffness,Velocity\n\
                                                  0,0,1.0,100.0,5.0\n";

    /// CSV with a non-numeric stiffness value
    pub const NON_NUMERIC_CSV: &'static str = "X,Y,Thickness,Stiffness,Velocity,Penetration\n\
                                               0,0,1.0,soft,5.0,5.0\n";

    /// CSV with two rows at the same grid coordinate
    pub const DUPLICATE_COORD_CSV: &'static str = "X,Y,Thickness,Stiffness,Velocity,Penetration\n\
                                                   0,0,1.0,100.0,5.0,5.0\n\
                                                   0,0,2.0,200.0,6.0,6.0\n";

    /// Row with deterministic score 300, safe under the default threshold
    pub fn safe_row() -> ParameterRow {
        ParameterRow::new(0, 0, 1.0, 100.0, 5.0, 5.0)
    }

    /// Row with deterministic score 1950, always flagged
    pub fn unsafe_row() -> ParameterRow {
        ParameterRow::new(1, 0, 10.0, 900.0, 20.0, 40.0)
    }

    /// Table with one safe and one flagged row
    pub fn mixed_table() -> ParameterTable {
        ParameterTable::from_rows(vec![Self::safe_row(), Self::unsafe_row()])
    }

    /// Table where every row scores below the threshold
    pub fn all_safe_table() -> ParameterTable {
        ParameterTable::from_rows(vec![
            Self::safe_row(),
            ParameterRow::new(1, 0, 2.0, 200.0, 4.0, 6.0),
            ParameterRow::new(0, 1, 0.5, 150.0, 3.0, 2.0),
        ])
    }

    /// Empty table for edge case testing
    pub fn empty_table() -> ParameterTable {
        ParameterTable::new()
    }
}
