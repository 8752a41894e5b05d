use serde::Serialize;

use super::core::{Point3, Vec3};
use super::grid::{ParameterGrid, ScalarGrid};
use super::sampler::{DerivativeField, ParametricSampler};

/// The strip's point mesh: one `(x, y, z)` per grid cell, `[i][j]` ↔ `(u[j], v[i])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripMesh {
    pub x: ScalarGrid,
    pub y: ScalarGrid,
    pub z: ScalarGrid,
}

impl StripMesh {
    /// The `(x, y, z)` arrays.
    #[must_use]
    pub const fn components(&self) -> (&ScalarGrid, &ScalarGrid, &ScalarGrid) {
        (&self.x, &self.y, &self.z)
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Option<Point3> {
        Some(Point3::new(self.x.get(i, j)?, self.y.get(i, j)?, self.z.get(i, j)?))
    }

    /// All points in row-major order.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 3]> {
        self.x
            .as_slice()
            .iter()
            .zip(self.y.as_slice())
            .zip(self.z.as_slice())
            .map(|((&x, &y), &z)| [x, y, z])
            .collect()
    }
}

/// Point mesh of the sampler's strip, positions exactly as evaluated.
#[must_use]
pub fn build_mesh(sampler: &ParametricSampler) -> StripMesh {
    let positions = sampler.sample_positions();
    StripMesh {
        x: positions.x,
        y: positions.y,
        z: positions.z,
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GeomMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    /// Surface parameters `(u, v)` per vertex.
    pub uvs: Option<Vec<[f64; 2]>>,
    pub normals: Option<Vec<[f64; 3]>>,
}

impl GeomMesh {
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            uvs: None,
            normals: None,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len();
        self.indices.iter().all(|&i| (i as usize) < n)
    }

    #[must_use]
    pub fn has_triangle_indices(&self) -> bool {
        self.indices.len() % 3 == 0
    }

    #[must_use]
    pub fn has_valid_attribute_lengths(&self) -> bool {
        let n = self.positions.len();
        self.uvs.as_ref().is_none_or(|uvs| uvs.len() == n)
            && self.normals.as_ref().is_none_or(|normals| normals.len() == n)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.has_triangle_indices() {
            return Err("mesh indices are not a triangle list (len % 3 != 0)".to_string());
        }
        if self.has_invalid_vertices() {
            return Err("mesh has invalid vertex coordinates (NaN/Inf)".to_string());
        }
        if !self.has_valid_indices() {
            return Err("mesh has out-of-bounds vertex indices".to_string());
        }
        if !self.has_valid_attribute_lengths() {
            return Err("mesh attribute buffers do not match vertex count".to_string());
        }
        Ok(())
    }
}

/// Two triangles per quad of a row-major `rows × cols` vertex grid.
///
/// Empty when the grid is thinner than two vertices in either direction, or
/// when its vertex count does not fit `u32` indices.
#[must_use]
pub fn triangulate_grid(rows: usize, cols: usize) -> Vec<u32> {
    if rows < 2 || cols < 2 {
        return Vec::new();
    }
    let addressable = rows
        .checked_mul(cols)
        .is_some_and(|count| u32::try_from(count - 1).is_ok());
    if !addressable {
        log::warn!("grid {rows}x{cols} exceeds u32 vertex indices; skipping triangulation");
        return Vec::new();
    }

    // Every index below is at most `rows * cols - 1`, which fits `u32`.
    let stride = cols as u32;
    let mut indices = Vec::with_capacity((rows - 1) * (cols - 1) * 6);
    for i in 0..rows - 1 {
        let row = i as u32 * stride;
        for j in 0..cols - 1 {
            let j = j as u32;
            let i0 = row + j;
            let i1 = row + j + 1;
            let i2 = row + stride + j;
            let i3 = row + stride + j + 1;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i2, i1, i3]);
        }
    }
    indices
}

/// Triangulated copy of a strip mesh for renderers and file export.
///
/// UVs carry the `(u, v)` surface parameters. Normals come from
/// `P_u × P_v` when a derivative field is supplied; where that product
/// vanishes the normal falls back to `+z`.
#[must_use]
pub fn triangulate_strip(
    mesh: &StripMesh,
    grid: &ParameterGrid,
    derivatives: Option<&DerivativeField>,
) -> GeomMesh {
    let (rows, cols) = mesh.shape();
    let mut geom = GeomMesh::new(mesh.points(), triangulate_grid(rows, cols));

    geom.uvs = Some(
        (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| {
                let (u, v) = grid.parameters_at(i, j).unwrap_or((f64::NAN, f64::NAN));
                [u, v]
            })
            .collect(),
    );

    geom.normals = derivatives.map(|field| {
        (0..rows)
            .flat_map(|i| (0..cols).map(move |j| (i, j)))
            .map(|(i, j)| {
                field
                    .partials_at(i, j)
                    .and_then(|(du, dv)| du.cross(dv).normalized())
                    .unwrap_or(Vec3::new(0.0, 0.0, 1.0))
                    .to_array()
            })
            .collect()
    });

    geom
}
