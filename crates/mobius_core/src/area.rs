use crate::error::{MobiusError, MobiusResult};
use crate::gradient::TangentFields;
use nalgebra::DMatrix;

/// Per-point area element `|S_u × S_v|`.
pub fn area_element_field(tangents: &TangentFields) -> DMatrix<f64> {
    let (rows, cols) = tangents.shape();
    DMatrix::from_fn(rows, cols, |i, j| {
        tangents
            .tangent_u(i, j)
            .cross(&tangents.tangent_v(i, j))
            .norm()
    })
}

/// Riemann sum of the area element over the full grid, scaled by the cell
/// size `du * dv`.
pub fn surface_area(tangents: &TangentFields, du: f64, dv: f64) -> MobiusResult<f64> {
    let elements = area_element_field(tangents);
    let area = elements.sum() * du * dv;
    if !area.is_finite() {
        return Err(MobiusError::degeneracy(
            "surface area",
            format!("area element sum is {area} (du = {du}, dv = {dv})"),
        ));
    }
    Ok(area)
}
