//! Finite-difference partial derivatives of the mesh.
//!
//! Interior samples use second-order central differences, the first and last
//! sample along the differentiated axis use first-order one-sided differences.

use crate::surface::SurfaceMesh;
use nalgebra::{DMatrix, Vector3};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along the row index `i`, the direction in which `v` varies.
    Rows,
    /// Along the column index `j`, the direction in which `u` varies.
    Columns,
}

pub fn gradient(field: &DMatrix<f64>, spacing: f64, axis: Axis) -> DMatrix<f64> {
    let (rows, cols) = field.shape();
    let len = match axis {
        Axis::Rows => rows,
        Axis::Columns => cols,
    };
    let at = |i: usize, j: usize, k: usize| -> f64 {
        match axis {
            Axis::Rows => field[(k, j)],
            Axis::Columns => field[(i, k)],
        }
    };
    DMatrix::from_fn(rows, cols, |i, j| {
        if len < 2 {
            return 0.0;
        }
        let k = match axis {
            Axis::Rows => i,
            Axis::Columns => j,
        };
        if k == 0 {
            (at(i, j, 1) - at(i, j, 0)) / spacing
        } else if k == len - 1 {
            (at(i, j, len - 1) - at(i, j, len - 2)) / spacing
        } else {
            (at(i, j, k + 1) - at(i, j, k - 1)) / (2.0 * spacing)
        }
    })
}

/// The six partial-derivative fields `∂(x, y, z)/∂u` and `∂(x, y, z)/∂v`.
#[derive(Debug, Clone, PartialEq)]
pub struct TangentFields {
    pub xu: DMatrix<f64>,
    pub yu: DMatrix<f64>,
    pub zu: DMatrix<f64>,
    pub xv: DMatrix<f64>,
    pub yv: DMatrix<f64>,
    pub zv: DMatrix<f64>,
}

impl TangentFields {
    pub fn estimate(mesh: &SurfaceMesh, du: f64, dv: f64) -> Self {
        let fields = Self {
            xu: gradient(&mesh.x, du, Axis::Columns),
            yu: gradient(&mesh.y, du, Axis::Columns),
            zu: gradient(&mesh.z, du, Axis::Columns),
            xv: gradient(&mesh.x, dv, Axis::Rows),
            yv: gradient(&mesh.y, dv, Axis::Rows),
            zv: gradient(&mesh.z, dv, Axis::Rows),
        };
        debug!(shape = ?fields.shape(), du, dv, "estimated tangent fields");
        fields
    }

    pub fn shape(&self) -> (usize, usize) {
        self.xu.shape()
    }

    pub fn tangent_u(&self, i: usize, j: usize) -> Vector3<f64> {
        Vector3::new(self.xu[(i, j)], self.yu[(i, j)], self.zu[(i, j)])
    }

    pub fn tangent_v(&self, i: usize, j: usize) -> Vector3<f64> {
        Vector3::new(self.xv[(i, j)], self.yv[(i, j)], self.zv[(i, j)])
    }
}
