//! Rectangular `(u, v)` parameter grid.
//!
//! Row index `i` selects the `v` sample and column index `j` selects the `u`
//! sample, so `u[(i, j)]` depends only on `j` and `v[(i, j)]` only on `i`.

use crate::error::{MobiusError, MobiusResult};
use crate::params::MobiusParams;
use nalgebra::DMatrix;
use std::f64::consts::PI;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    pub u: DMatrix<f64>,
    pub v: DMatrix<f64>,
    pub du: f64,
    pub dv: f64,
}

impl ParameterGrid {
    /// Samples `u` over `[0, 2π]` and `v` over `[-w/2, w/2]`. The spacings are
    /// the ones `params` reports, so every consumer differentiates and
    /// integrates with the same `du`, `dv`.
    pub fn build(params: &MobiusParams) -> MobiusResult<Self> {
        let resolution = params.resolution;
        if resolution < 2 {
            return Err(MobiusError::invalid_parameter(
                "resolution",
                resolution,
                "at least 2 samples per axis are required",
            ));
        }
        let width = params.width;
        let u_samples = linspace(0.0, 2.0 * PI, resolution);
        let v_samples = linspace(-width / 2.0, width / 2.0, resolution);
        let u = DMatrix::from_fn(resolution, resolution, |_, j| u_samples[j]);
        let v = DMatrix::from_fn(resolution, resolution, |i, _| v_samples[i]);
        debug!(resolution, width, "built parameter grid");
        Ok(Self {
            u,
            v,
            du: params.du(),
            dv: params.dv(),
        })
    }
}

/// `count` evenly spaced samples from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|k| start + step * k as f64).collect();
            samples[count - 1] = end;
            samples
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{linspace, ParameterGrid};
    use crate::error::MobiusError;
    use crate::params::MobiusParams;
    use std::f64::consts::PI;

    #[test]
    fn linspace_includes_both_endpoints() {
        let samples = linspace(-0.2, 0.2, 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], -0.2);
        assert_eq!(samples[4], 0.2);
        assert!(samples[2].abs() < 1e-15);
    }

    #[test]
    fn grid_is_full_outer_product() {
        let grid = ParameterGrid::build(&MobiusParams::new(1.0, 0.4, 4))
            .expect("grid should build");
        assert_eq!(grid.u.shape(), (4, 4));
        assert_eq!(grid.v.shape(), (4, 4));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(grid.u[(i, j)], grid.u[(0, j)], "u must depend on column only");
                assert_eq!(grid.v[(i, j)], grid.v[(i, 0)], "v must depend on row only");
            }
        }
        assert_eq!(grid.u[(0, 0)], 0.0);
        assert_eq!(grid.u[(0, 3)], 2.0 * PI);
        assert_eq!(grid.v[(0, 0)], -0.2);
        assert_eq!(grid.v[(3, 0)], 0.2);
    }

    #[test]
    fn grid_spacing_matches_sample_distance() {
        let grid = ParameterGrid::build(&MobiusParams::new(1.0, 0.3, 7))
            .expect("grid should build");
        assert!((grid.u[(0, 1)] - grid.u[(0, 0)] - grid.du).abs() < 1e-12);
        assert!((grid.v[(1, 0)] - grid.v[(0, 0)] - grid.dv).abs() < 1e-12);
    }

    #[test]
    fn grid_spacing_is_taken_from_params() {
        let params = MobiusParams::new(2.0, 0.25, 11);
        let grid = ParameterGrid::build(&params).expect("grid should build");
        assert_eq!(grid.du, params.du());
        assert_eq!(grid.dv, params.dv());
    }

    #[test]
    fn grid_rejects_fewer_than_two_samples() {
        for resolution in [0, 1] {
            let err = ParameterGrid::build(&MobiusParams::new(1.0, 0.3, resolution))
                .expect_err("should reject");
            assert!(matches!(err, MobiusError::InvalidParameter { .. }));
        }
    }
}
