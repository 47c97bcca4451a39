//! Flat buffers for an external renderer.
//!
//! The mesh is subsampled every `stride` rows and columns, always keeping the
//! last row and column so the sampled patch covers the whole strip.

use crate::error::{MobiusError, MobiusResult};
use crate::surface::SurfaceMesh;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RENDER_STRIDE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderMesh {
    pub rows: usize,
    pub cols: usize,
    /// Interleaved `x, y, z` per sampled vertex, row-major.
    pub points: Vec<f64>,
    /// Two triangles per sampled quad.
    pub triangles: Vec<u32>,
    /// Line-segment index pairs along sampled rows and columns.
    pub wireframe: Vec<u32>,
}

impl RenderMesh {
    pub fn from_mesh(mesh: &SurfaceMesh, stride: usize) -> MobiusResult<Self> {
        if stride == 0 {
            return Err(MobiusError::invalid_parameter(
                "stride",
                stride,
                "must be at least 1",
            ));
        }
        let (mesh_rows, mesh_cols) = mesh.shape();
        let row_samples = strided_indices(mesh_rows, stride);
        let col_samples = strided_indices(mesh_cols, stride);
        let rows = row_samples.len();
        let cols = col_samples.len();
        vertex_index_limit(rows, cols)?;
        // Every index is below `rows * cols`, checked to fit in u32 above.
        let index = |r: usize, c: usize| -> u32 { (r * cols + c) as u32 };

        let mut points = Vec::with_capacity(rows * cols * 3);
        for &i in &row_samples {
            for &j in &col_samples {
                let p = mesh.point(i, j);
                points.extend([p.x, p.y, p.z]);
            }
        }

        let quads = rows.saturating_sub(1) * cols.saturating_sub(1);
        let mut triangles = Vec::with_capacity(quads * 6);
        let mut wireframe = Vec::new();
        for r in 0..rows {
            for c in 0..cols {
                if c + 1 < cols {
                    wireframe.extend([index(r, c), index(r, c + 1)]);
                }
                if r + 1 < rows {
                    wireframe.extend([index(r, c), index(r + 1, c)]);
                }
                if r + 1 < rows && c + 1 < cols {
                    let a = index(r, c);
                    let b = index(r, c + 1);
                    let d = index(r + 1, c);
                    let e = index(r + 1, c + 1);
                    triangles.extend([a, b, e, a, e, d]);
                }
            }
        }

        Ok(Self {
            rows,
            cols,
            points,
            triangles,
            wireframe,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len() / 3
    }
}

/// Number of sampled vertices, rejected when the `u32` index buffers could not
/// address all of them.
fn vertex_index_limit(rows: usize, cols: usize) -> MobiusResult<u32> {
    rows
        .checked_mul(cols)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| {
            MobiusError::invalid_parameter(
                "stride",
                format!("{rows} x {cols} sampled vertices"),
                "sampled mesh is too large for u32 vertex indices",
            )
        })
}

fn strided_indices(len: usize, stride: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).step_by(stride).collect();
    if let Some(&last) = indices.last() {
        if last + 1 != len {
            indices.push(len - 1);
        }
    }
    indices
}
