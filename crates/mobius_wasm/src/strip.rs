use js_sys::Float64Array;
use mobius_core::render::DEFAULT_RENDER_STRIDE;
use mobius_core::surface::Coordinate;
use mobius_core::{MobiusParams, MobiusStrip};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmMobiusStrip {
    strip: MobiusStrip,
    resolution: u32,
}

fn build_strip(params: MobiusParams) -> Result<WasmMobiusStrip, JsValue> {
    console_error_panic_hook::set_once();
    let resolution = checked_resolution(params.resolution)
        .map_err(|e| JsValue::from_str(&format!("Invalid strip parameters: {}", e)))?;
    let strip = MobiusStrip::new(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid strip parameters: {}", e)))?;
    Ok(WasmMobiusStrip { strip, resolution })
}

fn checked_resolution(resolution: usize) -> Result<u32, String> {
    u32::try_from(resolution).map_err(|_| format!("resolution {resolution} does not fit in u32"))
}

#[wasm_bindgen]
impl WasmMobiusStrip {
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, width: f64, resolution: u32) -> Result<WasmMobiusStrip, JsValue> {
        build_strip(MobiusParams::new(radius, width, resolution as usize))
    }

    /// Accepts a partial `{ radius, width, resolution }` object; missing
    /// fields take their defaults.
    pub fn from_params(params: JsValue) -> Result<WasmMobiusStrip, JsValue> {
        let params: MobiusParams = if params.is_undefined() || params.is_null() {
            MobiusParams::default()
        } else {
            from_value(params)
                .map_err(|e| JsValue::from_str(&format!("Invalid params: {}", e)))?
        };
        build_strip(params)
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn surface_area(&self) -> Result<f64, JsValue> {
        self.strip
            .surface_area()
            .map_err(|e| JsValue::from_str(&format!("Surface area failed: {}", e)))
    }

    pub fn edge_length(&self) -> Result<f64, JsValue> {
        self.strip
            .edge_length()
            .map_err(|e| JsValue::from_str(&format!("Edge length failed: {}", e)))
    }

    pub fn x(&self) -> Float64Array {
        self.coordinate(Coordinate::X)
    }

    pub fn y(&self) -> Float64Array {
        self.coordinate(Coordinate::Y)
    }

    pub fn z(&self) -> Float64Array {
        self.coordinate(Coordinate::Z)
    }

    pub fn measurements(&self) -> Result<JsValue, JsValue> {
        let measurements = self
            .strip
            .measurements()
            .map_err(|e| JsValue::from_str(&format!("Measurement failed: {}", e)))?;
        to_value(&measurements)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Subsampled triangle/wireframe buffers; `stride == 0` selects the
    /// default stride.
    pub fn render_mesh(&self, stride: u32) -> Result<JsValue, JsValue> {
        let stride = if stride == 0 {
            DEFAULT_RENDER_STRIDE
        } else {
            stride as usize
        };
        let mesh = self
            .strip
            .render_mesh(stride)
            .map_err(|e| JsValue::from_str(&format!("Render mesh failed: {}", e)))?;
        to_value(&mesh).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

impl WasmMobiusStrip {
    fn coordinate(&self, coordinate: Coordinate) -> Float64Array {
        let values = self.strip.mesh().coordinate_row_major(coordinate);
        Float64Array::from(values.as_slice())
    }
}
