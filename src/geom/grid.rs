//! Parameter grid and the row-major scalar arrays sampled over it.
//!
//! Rows follow the width parameter `v`, columns follow the angle `u`, so the
//! value at `[i][j]` belongs to `(u[j], v[i])`.

use serde::Serialize;

use super::params::StripParameters;

/// `count` values evenly spaced over `[start, end]`, both endpoints included.
///
/// The last value is pinned to `end` so the closed interval is hit exactly
/// regardless of rounding in the step.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Dense row-major 2D array of `f64`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarGrid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl ScalarGrid {
    /// Wraps `values` as a `rows × cols` grid. Returns `None` on a length mismatch.
    #[must_use]
    pub fn from_row_major(rows: usize, cols: usize, values: Vec<f64>) -> Option<Self> {
        (values.len() == rows * cols).then_some(Self { rows, cols, values })
    }

    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            values: vec![value; rows * cols],
        }
    }

    /// `(rows, cols)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.values[i * self.cols + j])
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.rows {
            Some(&self.values[i * self.cols..(i + 1) * self.cols])
        } else {
            None
        }
    }

    /// Copy of column `j`, one value per row.
    #[must_use]
    pub fn column(&self, j: usize) -> Option<Vec<f64>> {
        if j < self.cols {
            Some((0..self.rows).map(|i| self.values[i * self.cols + j]).collect())
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Nested `[row][col]` copy for callers that want plain arrays.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(<[f64]>::to_vec)
            .collect()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.values.iter().all(|value| value.is_finite())
    }
}

/// Sample positions along both parameter axes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    u: Vec<f64>,
    v: Vec<f64>,
    du: f64,
    dv: f64,
}

impl ParameterGrid {
    /// `u ∈ [0, 2π]` and `v ∈ [−w/2, w/2]`, `resolution` samples each.
    #[must_use]
    pub fn new(params: &StripParameters) -> Self {
        let n = params.resolution;
        let half_width = params.width / 2.0;
        Self {
            u: linspace(0.0, std::f64::consts::TAU, n),
            v: linspace(-half_width, half_width, n),
            du: params.du(),
            dv: params.dv(),
        }
    }

    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    #[must_use]
    pub const fn du(&self) -> f64 {
        self.du
    }

    #[must_use]
    pub const fn dv(&self) -> f64 {
        self.dv
    }

    /// `(rows, cols)` of every field sampled on this grid, i.e. `(|v|, |u|)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.v.len(), self.u.len())
    }

    /// `(u, v)` for grid cell `[i][j]`.
    #[must_use]
    pub fn parameters_at(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        Some((*self.u.get(j)?, *self.v.get(i)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_endpoints() {
        let values = linspace(0.0, std::f64::consts::TAU, 7);
        assert_eq!(values.len(), 7);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[6], std::f64::consts::TAU);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn scalar_grid_indexes_row_major() {
        let grid = ScalarGrid::from_row_major(2, 3, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.get(1, 0), Some(3.0));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.row(0), Some(&[0.0, 1.0, 2.0][..]));
        assert_eq!(grid.column(2), Some(vec![2.0, 5.0]));
        assert_eq!(grid.to_rows(), vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]);
        assert!(ScalarGrid::from_row_major(2, 2, vec![0.0; 3]).is_none());
    }

    #[test]
    fn cell_parameters_follow_row_and_column_axes() {
        let grid = ParameterGrid::new(&StripParameters::new(3.0, 2.0, 3));
        assert_eq!(grid.shape(), (3, 3));
        assert_eq!(grid.v(), &[-1.0, 0.0, 1.0][..]);
        assert_eq!(grid.parameters_at(0, 0), Some((0.0, -1.0)));
        assert_eq!(grid.parameters_at(2, 1), Some((std::f64::consts::PI, 1.0)));
        assert_eq!(grid.parameters_at(3, 0), None);
    }
}
