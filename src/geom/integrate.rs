//! Composite trapezoidal rule on uniformly spaced samples.

use super::grid::ScalarGrid;

/// `Σ dx·(y[k] + y[k+1]) / 2`. Fewer than two samples integrate to zero.
#[must_use]
pub fn trapezoid(samples: &[f64], dx: f64) -> f64 {
    samples
        .windows(2)
        .map(|pair| dx * (pair[0] + pair[1]) / 2.0)
        .sum()
}

/// Integrates every column of `grid` along the row axis.
///
/// Returns one value per column: for a grid indexed `[v][u]` this resolves the
/// `v` integral and leaves a sequence indexed by `u`.
#[must_use]
pub fn trapezoid_columns(grid: &ScalarGrid, dx: f64) -> Vec<f64> {
    let (rows, cols) = grid.shape();
    let mut integrals = vec![0.0; cols];
    if rows < 2 {
        return integrals;
    }

    for i in 0..rows - 1 {
        let (Some(lower), Some(upper)) = (grid.row(i), grid.row(i + 1)) else {
            break;
        };
        for ((acc, a), b) in integrals.iter_mut().zip(lower).zip(upper) {
            *acc += dx * (a + b) / 2.0;
        }
    }

    integrals
}
