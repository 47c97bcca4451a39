//! The `mobius_core` crate discretizes a Möbius strip on an `n × n` parameter
//! grid and measures it.
//!
//! Key components:
//! - **Params / Grid**: validated configuration and the `(u, v)` outer-product grid.
//! - **Surface**: the half-twist parametrization mapped over the grid (`X`, `Y`, `Z`).
//! - **Gradient / Area**: finite-difference tangents and the Riemann-summed area element.
//! - **Boundary**: the single edge traced from the first and last mesh rows.
//! - **Render**: subsampled flat buffers for an external renderer.

pub mod area;
pub mod boundary;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod params;
pub mod render;
pub mod strip;
pub mod surface;

pub use error::{MobiusError, MobiusResult};
pub use params::MobiusParams;
pub use strip::{Measurements, MobiusStrip};
