//! Boundary length by arc-length integration along `v = ±w/2`.
//!
//! Both parametrised edges are integrated and summed as they are. On a Möbius
//! strip the two traversals belong to one closed boundary curve; no attempt is
//! made to detect or merge that.

use serde::Serialize;

use super::core::Vec3;
use super::integrate::trapezoid;
use super::sampler::ParametricSampler;

/// Arc lengths of the two parametrised edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundaryLengths {
    /// Curve at `v = +w/2`.
    pub upper: f64,
    /// Curve at `v = −w/2`.
    pub lower: f64,
}

impl BoundaryLengths {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.upper + self.lower
    }
}

/// Trapezoidal arc length of a curve from its tangent samples.
#[must_use]
pub fn arc_length(tangents: &[Vec3], du: f64) -> f64 {
    let speeds: Vec<f64> = tangents.iter().map(|t| t.length()).collect();
    trapezoid(&speeds, du)
}

#[must_use]
pub fn boundary_lengths(sampler: &ParametricSampler) -> BoundaryLengths {
    let du = sampler.grid().du();
    let [upper_v, lower_v] = sampler.params().boundary_v();

    let upper = arc_length(&sampler.sample_u_partials_along(upper_v), du);
    let lower = arc_length(&sampler.sample_u_partials_along(lower_v), du);
    log::trace!("edge lengths upper={upper} lower={lower}");

    BoundaryLengths { upper, lower }
}

/// Sum of both edge lengths.
#[must_use]
pub fn edge_length(sampler: &ParametricSampler) -> f64 {
    let lengths = boundary_lengths(sampler);
    let total = lengths.total();
    log::debug!(
        "edge length R={} w={} n={}: {total}",
        sampler.params().radius,
        sampler.params().width,
        sampler.params().resolution
    );
    total
}
