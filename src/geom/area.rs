//! Surface area by nested trapezoidal integration of `|P_u × P_v|`.

use super::grid::ScalarGrid;
use super::integrate::{trapezoid, trapezoid_columns};
use super::sampler::{DerivativeField, ParametricSampler};

/// Pointwise area element `|P_u × P_v|` over the grid.
#[must_use]
pub fn area_element_field(derivatives: &DerivativeField) -> ScalarGrid {
    let (rows, cols) = derivatives.shape();
    let values = (0..rows)
        .flat_map(|i| (0..cols).map(move |j| (i, j)))
        .map(|(i, j)| {
            derivatives
                .partials_at(i, j)
                .map_or(f64::NAN, |(du, dv)| du.cross(dv).length())
        })
        .collect();

    ScalarGrid::from_row_major(rows, cols, values)
        .unwrap_or_else(|| ScalarGrid::filled(rows, cols, f64::NAN))
}

/// Integrates an area-element field: along `v` first (spacing `dv`), then the
/// per-column results along `u` (spacing `du`).
///
/// The magnitude of `dv` is used, so a strip of negative width has the same
/// area as its mirror image.
#[must_use]
pub fn integrate_area_elements(elements: &ScalarGrid, du: f64, dv: f64) -> f64 {
    let per_u = trapezoid_columns(elements, dv.abs());
    trapezoid(&per_u, du)
}

/// Surface area estimate for the sampler's strip.
#[must_use]
pub fn surface_area(sampler: &ParametricSampler) -> f64 {
    let derivatives = sampler.sample_derivatives();
    surface_area_from_derivatives(sampler, &derivatives)
}

/// Same as [`surface_area`], reusing an already sampled derivative field.
#[must_use]
pub fn surface_area_from_derivatives(
    sampler: &ParametricSampler,
    derivatives: &DerivativeField,
) -> f64 {
    let elements = area_element_field(derivatives);
    let grid = sampler.grid();
    let area = integrate_area_elements(&elements, grid.du(), grid.dv());
    log::debug!(
        "surface area R={} w={} n={}: {area}",
        sampler.params().radius,
        sampler.params().width,
        sampler.params().resolution
    );
    area
}
