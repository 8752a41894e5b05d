mod area;
mod core;
mod edge;
mod grid;
mod integrate;
mod mesh;
mod metrics;
mod params;
mod sampler;
mod surface;

pub use area::{
    area_element_field, integrate_area_elements, surface_area, surface_area_from_derivatives,
};
pub use self::core::{Point3, Tolerance, Vec3};
pub use edge::{BoundaryLengths, arc_length, boundary_lengths, edge_length};
pub use grid::{ParameterGrid, ScalarGrid, linspace};
pub use integrate::{trapezoid, trapezoid_columns};
pub use mesh::{GeomMesh, StripMesh, build_mesh, triangulate_grid, triangulate_strip};
pub use metrics::{GeomMetrics, GeomTimingReport, TimingBucket};
pub use params::{StripError, StripParameters};
pub use sampler::{DerivativeField, ParametricSampler, PositionField};
pub use surface::{MobiusSurface, Surface};

#[cfg(test)]
mod tests;
