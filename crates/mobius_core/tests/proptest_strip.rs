//! Property-based tests for strip construction and measurement.
//!
//! Run with: cargo test -p mobius_core -- proptest

use mobius_core::surface::Coordinate;
use mobius_core::{MobiusParams, MobiusStrip};
use proptest::prelude::*;

fn arb_params() -> impl Strategy<Value = MobiusParams> {
    (0.5..5.0f64, 0.01..0.8f64, 3usize..60)
        .prop_map(|(radius, width, resolution)| MobiusParams::new(radius, width, resolution))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_measurements_are_finite_and_positive(params in arb_params()) {
        let strip = MobiusStrip::new(params).expect("valid params should build");
        let m = strip.measurements().expect("measurements should compute");
        prop_assert!(m.surface_area.is_finite() && m.surface_area > 0.0);
        prop_assert!(m.edge_length.is_finite() && m.edge_length > 0.0);
        prop_assert_eq!(m.resolution, params.resolution);
    }

    #[test]
    fn proptest_mesh_shape_is_square(params in arb_params()) {
        let strip = MobiusStrip::new(params).expect("valid params should build");
        let n = params.resolution;
        for coordinate in [Coordinate::X, Coordinate::Y, Coordinate::Z] {
            prop_assert_eq!(strip.mesh().coordinate(coordinate).shape(), (n, n));
            prop_assert_eq!(strip.mesh().coordinate_row_major(coordinate).len(), n * n);
        }
        prop_assert_eq!(strip.boundary().points().len(), 2 * n);
    }

    #[test]
    fn proptest_area_scales_with_radius(
        radius in 2.0..6.0f64,
        width in 0.01..0.2f64,
        resolution in 40usize..80,
    ) {
        let base = MobiusStrip::new(MobiusParams::new(radius, width, resolution))
            .expect("valid params should build")
            .surface_area()
            .expect("area");
        let doubled = MobiusStrip::new(MobiusParams::new(2.0 * radius, width, resolution))
            .expect("valid params should build")
            .surface_area()
            .expect("area");
        let ratio = doubled / base;
        prop_assert!((ratio - 2.0).abs() < 0.02, "ratio {}", ratio);
    }

    #[test]
    fn proptest_invalid_resolution_is_rejected(
        radius in 0.5..5.0f64,
        width in 0.01..0.8f64,
        resolution in 0usize..2,
    ) {
        prop_assert!(MobiusStrip::new(MobiusParams::new(radius, width, resolution)).is_err());
    }
}
