//! Pivot a parameter table into a dense 2-D grid for heatmap display
//!
//! Rows carry (x, y) positional identifiers; the pivot lays the last
//! predicted scores out on the grid spanned by the distinct coordinate
//! values. Duplicate coordinates are rejected rather than silently
//! overwritten.

use crate::error::{EngineError, EngineResult};
use serde::Serialize;
use shared::ParameterTable;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Dense grid of predicted HIC values keyed by sorted coordinates
///
/// Cells without a corresponding table row, or whose row was never
/// scored, hold `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HicGrid {
    /// Distinct x coordinates in ascending order
    xs: Vec<i64>,
    /// Distinct y coordinates in ascending order
    ys: Vec<i64>,
    /// Cell values indexed as cells[y_index][x_index]
    cells: Vec<Vec<Option<f64>>>,
}

impl HicGrid {
    pub fn width(&self) -> usize {
        self.xs.len()
    }

    pub fn height(&self) -> usize {
        self.ys.len()
    }

    pub fn xs(&self) -> &[i64] {
        &self.xs
    }

    pub fn ys(&self) -> &[i64] {
        &self.ys
    }

    /// Value at grid coordinates, if that cell exists and was scored
    pub fn value_at(&self, x: i64, y: i64) -> Option<f64> {
        let x_index = self.xs.iter().position(|&v| v == x)?;
        let y_index = self.ys.iter().position(|&v| v == y)?;
        self.cells[y_index][x_index]
    }

    /// Row-major view of the cells for rendering
    pub fn cells(&self) -> &[Vec<Option<f64>>] {
        &self.cells
    }
}

/// Pivot a table into a grid of its predicted scores
pub fn pivot(table: &ParameterTable) -> EngineResult<HicGrid> {
    let mut seen: HashSet<(i64, i64)> = HashSet::new();
    let mut xs: BTreeSet<i64> = BTreeSet::new();
    let mut ys: BTreeSet<i64> = BTreeSet::new();

    for row in table.rows() {
        if !seen.insert((row.x, row.y)) {
            return Err(EngineError::DuplicateCoordinate { x: row.x, y: row.y });
        }
        xs.insert(row.x);
        ys.insert(row.y);
    }

    let xs: Vec<i64> = xs.into_iter().collect();
    let ys: Vec<i64> = ys.into_iter().collect();

    let x_index: HashMap<i64, usize> = xs.iter().enumerate().map(|(i, &x)| (x, i)).collect();
    let y_index: HashMap<i64, usize> = ys.iter().enumerate().map(|(i, &y)| (y, i)).collect();

    let mut cells = vec![vec![None; xs.len()]; ys.len()];
    for row in table.rows() {
        cells[y_index[&row.y]][x_index[&row.x]] = row.predicted_hic;
    }

    Ok(HicGrid { xs, ys, cells })
}
