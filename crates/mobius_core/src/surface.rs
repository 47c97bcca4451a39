//! Maps the parameter grid through the Möbius parametrization.
//!
//! The half-angle `u / 2` is what makes the surface one-sided: after a full
//! sweep of `u` the cross-section has turned by π, so the `v = -w/2` edge
//! reconnects with the `v = +w/2` edge.

use crate::grid::ParameterGrid;
use nalgebra::{DMatrix, Point3};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coordinate {
    X,
    Y,
    Z,
}

/// Three coordinate arrays of identical `n × n` shape; `(x, y, z)[(i, j)]` is
/// the image of `(u, v)[(i, j)]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMesh {
    pub x: DMatrix<f64>,
    pub y: DMatrix<f64>,
    pub z: DMatrix<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

pub fn mobius_point(radius: f64, u: f64, v: f64) -> Point3<f64> {
    let half = u / 2.0;
    let ring = radius + v * half.cos();
    Point3::new(ring * u.cos(), ring * u.sin(), v * half.sin())
}

impl SurfaceMesh {
    pub fn map(grid: &ParameterGrid, radius: f64) -> Self {
        let points = grid.u.zip_map(&grid.v, |u, v| mobius_point(radius, u, v));
        let x = points.map(|p| p.x);
        let y = points.map(|p| p.y);
        let z = points.map(|p| p.z);
        debug!(shape = ?x.shape(), radius, "mapped surface mesh");
        Self { x, y, z }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    pub fn point(&self, i: usize, j: usize) -> Point3<f64> {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    pub fn coordinate(&self, coordinate: Coordinate) -> &DMatrix<f64> {
        match coordinate {
            Coordinate::X => &self.x,
            Coordinate::Y => &self.y,
            Coordinate::Z => &self.z,
        }
    }

    /// Row-major copy of one coordinate array. `DMatrix` stores columns
    /// contiguously, renderers expect rows.
    pub fn coordinate_row_major(&self, coordinate: Coordinate) -> Vec<f64> {
        let matrix = self.coordinate(coordinate);
        let (rows, cols) = matrix.shape();
        let mut out = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                out.push(matrix[(i, j)]);
            }
        }
        out
    }

    pub fn bounds(&self) -> Bounds {
        let axes = [&self.x, &self.y, &self.z];
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for (k, axis) in axes.iter().enumerate() {
            min[k] = axis.min();
            max[k] = axis.max();
        }
        Bounds { min, max }
    }
}
