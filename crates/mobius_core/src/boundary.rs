//! Boundary tracing.
//!
//! The first and last mesh rows are the two geometric edges of the strip.
//! They are joined as row 0 in column order followed by row `n-1` in reverse
//! column order, and the traced curve is measured as an open polyline: the
//! segment from the last point back to the first is not part of `length()`.

use crate::surface::SurfaceMesh;
use nalgebra::Point3;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryCurve {
    points: Vec<Point3<f64>>,
}

impl BoundaryCurve {
    pub fn trace(mesh: &SurfaceMesh) -> Self {
        let (rows, cols) = mesh.shape();
        let mut points = Vec::with_capacity(2 * cols);
        if rows == 0 {
            return Self { points };
        }
        points.extend((0..cols).map(|j| mesh.point(0, j)));
        points.extend((0..cols).rev().map(|j| mesh.point(rows - 1, j)));
        debug!(points = points.len(), "traced boundary curve");
        Self { points }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Sum of the consecutive segment lengths, `2n - 1` for an `n`-column mesh.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }

    /// Distance from the last traced point back to the first.
    pub fn closing_gap(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (first - last).norm(),
            _ => 0.0,
        }
    }

    pub fn closed_length(&self) -> f64 {
        self.length() + self.closing_gap()
    }
}

#[cfg(test)]
mod tests {
    use super::BoundaryCurve;
    use crate::grid::ParameterGrid;
    use crate::params::MobiusParams;
    use crate::surface::SurfaceMesh;
    use nalgebra::{DMatrix, Point3};

    fn strip(radius: f64, width: f64, resolution: usize) -> SurfaceMesh {
        let grid = ParameterGrid::build(&MobiusParams::new(radius, width, resolution))
            .expect("grid should build");
        SurfaceMesh::map(&grid, radius)
    }

    #[test]
    fn trace_concatenates_first_row_and_reversed_last_row() {
        let mesh = strip(1.0, 0.3, 5);
        let curve = BoundaryCurve::trace(&mesh);
        assert_eq!(curve.points().len(), 10);
        for j in 0..5 {
            assert_eq!(curve.points()[j], mesh.point(0, j));
            assert_eq!(curve.points()[5 + j], mesh.point(4, 4 - j));
        }
    }

    #[test]
    fn length_is_open_polyline() {
        let mesh = SurfaceMesh {
            x: DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 0.0, 1.0]),
            y: DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 1.0]),
            z: DMatrix::zeros(2, 2),
        };
        // (0,0) -> (1,0) -> (1,1) -> (0,1), unit square minus its closing side.
        let curve = BoundaryCurve::trace(&mesh);
        assert_eq!(
            curve.points(),
            &[
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ]
        );
        assert!((curve.length() - 3.0).abs() < 1e-15);
        assert!((curve.closing_gap() - 1.0).abs() < 1e-15);
        assert!((curve.closed_length() - 4.0).abs() < 1e-15);
    }

    #[test]
    fn closing_gap_equals_strip_width() {
        let curve = BoundaryCurve::trace(&strip(1.0, 0.4, 50));
        assert!((curve.closing_gap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn length_for_thin_strip_approaches_twice_the_centre_circle() {
        let curve = BoundaryCurve::trace(&strip(1.0, 1e-6, 400));
        let expected = 4.0 * std::f64::consts::PI;
        assert!(
            (curve.length() - expected).abs() < 1e-3,
            "length {} far from {}",
            curve.length(),
            expected
        );
    }
}
