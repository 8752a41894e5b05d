//! Grid evaluation of the Möbius parametrisation and its partial derivatives.
//!
//! Every field is evaluated cell by cell at `(u[j], v[i])`. With the `parallel`
//! feature rows are distributed over rayon; each cell is computed by the same
//! expression either way, so both paths produce identical arrays.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::core::{Point3, Vec3};
use super::grid::{ParameterGrid, ScalarGrid};
use super::params::{StripError, StripParameters};
use super::surface::{MobiusSurface, Surface};

/// Positions `(x, y, z)` over the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionField {
    pub x: ScalarGrid,
    pub y: ScalarGrid,
    pub z: ScalarGrid,
}

/// Analytic first partials over the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeField {
    pub x_u: ScalarGrid,
    pub y_u: ScalarGrid,
    pub z_u: ScalarGrid,
    pub x_v: ScalarGrid,
    pub y_v: ScalarGrid,
    pub z_v: ScalarGrid,
}

impl DerivativeField {
    /// `(∂P/∂u, ∂P/∂v)` at cell `[i][j]`.
    #[must_use]
    pub fn partials_at(&self, i: usize, j: usize) -> Option<(Vec3, Vec3)> {
        let du = Vec3::new(self.x_u.get(i, j)?, self.y_u.get(i, j)?, self.z_u.get(i, j)?);
        let dv = Vec3::new(self.x_v.get(i, j)?, self.y_v.get(i, j)?, self.z_v.get(i, j)?);
        Some((du, dv))
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.x_u.shape()
    }
}

/// Owns the strip parameters, the parameter grid and the surface they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricSampler {
    params: StripParameters,
    surface: MobiusSurface,
    grid: ParameterGrid,
}

impl ParametricSampler {
    pub fn new(params: StripParameters) -> Result<Self, StripError> {
        params.validate()?;
        let grid = ParameterGrid::new(&params);
        log::trace!(
            "sampler grid {}x{} du={} dv={}",
            params.resolution,
            params.resolution,
            grid.du(),
            grid.dv()
        );
        Ok(Self {
            params,
            surface: MobiusSurface::new(params.radius, params.width),
            grid,
        })
    }

    #[must_use]
    pub const fn params(&self) -> &StripParameters {
        &self.params
    }

    #[must_use]
    pub const fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    #[must_use]
    pub const fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    #[must_use]
    pub fn sample_positions(&self) -> PositionField {
        let (rows, cols) = self.grid.shape();
        let points = evaluate_cells(rows, cols, |i, j| {
            let (u, v) = (self.grid.u()[j], self.grid.v()[i]);
            self.surface.point_at(u, v)
        });

        PositionField {
            x: component(rows, cols, &points, |p: &Point3| p.x),
            y: component(rows, cols, &points, |p: &Point3| p.y),
            z: component(rows, cols, &points, |p: &Point3| p.z),
        }
    }

    #[must_use]
    pub fn sample_derivatives(&self) -> DerivativeField {
        let (rows, cols) = self.grid.shape();
        let partials = evaluate_cells(rows, cols, |i, j| {
            let (u, v) = (self.grid.u()[j], self.grid.v()[i]);
            self.surface.partial_derivatives_at(u, v)
        });

        DerivativeField {
            x_u: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.0.x),
            y_u: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.0.y),
            z_u: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.0.z),
            x_v: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.1.x),
            y_v: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.1.y),
            z_v: component(rows, cols, &partials, |d: &(Vec3, Vec3)| d.1.z),
        }
    }

    /// `∂P/∂u` at every `u` sample along the curve of constant `v`.
    #[must_use]
    pub fn sample_u_partials_along(&self, v: f64) -> Vec<Vec3> {
        self.grid
            .u()
            .iter()
            .map(|&u| self.surface.u_partial_at(u, v))
            .collect()
    }
}

fn component<T>(rows: usize, cols: usize, cells: &[T], pick: impl Fn(&T) -> f64) -> ScalarGrid {
    let values = cells.iter().map(pick).collect();
    ScalarGrid::from_row_major(rows, cols, values)
        .unwrap_or_else(|| ScalarGrid::filled(rows, cols, f64::NAN))
}

#[cfg(feature = "parallel")]
fn evaluate_cells<T, F>(rows: usize, cols: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    (0..rows)
        .into_par_iter()
        .flat_map_iter(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| f(i, j))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_cells<T, F>(rows: usize, cols: usize, f: F) -> Vec<T>
where
    F: Fn(usize, usize) -> T,
{
    let mut cells = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            cells.push(f(i, j));
        }
    }
    cells
}
