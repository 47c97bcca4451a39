//! WASM bridge exposing the Möbius strip mesh and measurements to a
//! JavaScript renderer.

mod strip;

pub use strip::WasmMobiusStrip;
