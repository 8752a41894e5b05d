//! The strip handle: validated parameters, the sampler built from them and the
//! memoized point mesh.

use serde::Serialize;

use crate::geom::{
    self, BoundaryLengths, GeomMesh, GeomMetrics, GeomTimingReport, ParametricSampler, StripError,
    StripMesh, StripParameters, TimingBucket,
};

/// Summary of one strip evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StripReport {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
    pub surface_area: f64,
    pub edge_length: f64,
}

/// A Möbius strip sampled at a fixed resolution.
///
/// Construction validates the parameters and evaluates the point mesh once.
/// Area and edge length are recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    sampler: ParametricSampler,
    mesh: StripMesh,
}

impl MobiusStrip {
    /// Fails with [`StripError::InvalidResolution`] when `resolution < 2`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self, StripError> {
        Self::from_parameters(StripParameters::new(radius, width, resolution))
    }

    pub fn from_parameters(params: StripParameters) -> Result<Self, StripError> {
        let sampler = ParametricSampler::new(params)?;
        let mesh = geom::build_mesh(&sampler);
        log::debug!(
            "strip R={} w={} n={} ready",
            params.radius,
            params.width,
            params.resolution
        );
        Ok(Self { sampler, mesh })
    }

    #[must_use]
    pub const fn parameters(&self) -> &StripParameters {
        self.sampler.params()
    }

    #[must_use]
    pub const fn sampler(&self) -> &ParametricSampler {
        &self.sampler
    }

    #[must_use]
    pub const fn mesh(&self) -> &StripMesh {
        &self.mesh
    }

    #[must_use]
    pub fn surface_area(&self) -> f64 {
        geom::surface_area(&self.sampler)
    }

    #[must_use]
    pub fn edge_length(&self) -> f64 {
        geom::edge_length(&self.sampler)
    }

    #[must_use]
    pub fn boundary_lengths(&self) -> BoundaryLengths {
        geom::boundary_lengths(&self.sampler)
    }

    /// Triangulated mesh with `(u, v)` coordinates and unit normals.
    #[must_use]
    pub fn triangle_mesh(&self) -> GeomMesh {
        let derivatives = self.sampler.sample_derivatives();
        geom::triangulate_strip(&self.mesh, self.sampler.grid(), Some(&derivatives))
    }

    #[must_use]
    pub fn report(&self) -> StripReport {
        self.profile().0
    }

    /// Report plus per-phase timings when the `mesh_engine_metrics` feature is on.
    #[must_use]
    pub fn profile(&self) -> (StripReport, Option<GeomTimingReport>) {
        let mut metrics = GeomMetrics::default();
        metrics.begin();

        let derivatives = metrics.time(TimingBucket::Sampling, || {
            self.sampler.sample_derivatives()
        });
        let surface_area = metrics.time(TimingBucket::SurfaceArea, || {
            geom::surface_area_from_derivatives(&self.sampler, &derivatives)
        });
        let edge_length = metrics.time(TimingBucket::EdgeLength, || self.edge_length());

        let params = self.parameters();
        let report = StripReport {
            radius: params.radius,
            width: params.width,
            resolution: params.resolution,
            surface_area,
            edge_length,
        };
        (report, metrics.end())
    }
}
