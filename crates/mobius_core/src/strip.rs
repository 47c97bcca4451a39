//! The `MobiusStrip` value object: validated parameters plus the grid and mesh
//! built from them, with read-only measurement methods.

use crate::area;
use crate::boundary::BoundaryCurve;
use crate::error::{MobiusError, MobiusResult};
use crate::gradient::TangentFields;
use crate::grid::ParameterGrid;
use crate::params::MobiusParams;
use crate::render::RenderMesh;
use crate::surface::SurfaceMesh;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Below this many samples per axis the discretization is too coarse to say
/// much about the continuous surface.
const COARSE_RESOLUTION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub surface_area: f64,
    pub edge_length: f64,
    pub resolution: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobiusStrip {
    params: MobiusParams,
    grid: ParameterGrid,
    mesh: SurfaceMesh,
}

impl MobiusStrip {
    pub fn new(params: MobiusParams) -> MobiusResult<Self> {
        params.validate()?;
        if params.resolution < COARSE_RESOLUTION {
            warn!(
                resolution = params.resolution,
                "coarse grid, measurements will be crude"
            );
        }
        if params.width / 2.0 >= params.radius {
            warn!(
                radius = params.radius,
                width = params.width,
                "strip half-width reaches the central axis, surface self-intersects"
            );
        }
        let grid = ParameterGrid::build(&params)?;
        let mesh = SurfaceMesh::map(&grid, params.radius);
        Ok(Self { params, grid, mesh })
    }

    pub fn params(&self) -> &MobiusParams {
        &self.params
    }

    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    pub fn tangents(&self) -> TangentFields {
        TangentFields::estimate(&self.mesh, self.grid.du, self.grid.dv)
    }

    pub fn surface_area(&self) -> MobiusResult<f64> {
        area::surface_area(&self.tangents(), self.grid.du, self.grid.dv)
    }

    pub fn boundary(&self) -> BoundaryCurve {
        BoundaryCurve::trace(&self.mesh)
    }

    pub fn edge_length(&self) -> MobiusResult<f64> {
        let length = self.boundary().length();
        if !length.is_finite() {
            return Err(MobiusError::degeneracy(
                "edge length",
                format!("boundary polyline length is {length}"),
            ));
        }
        Ok(length)
    }

    pub fn measurements(&self) -> MobiusResult<Measurements> {
        let measurements = Measurements {
            surface_area: self.surface_area()?,
            edge_length: self.edge_length()?,
            resolution: self.params.resolution,
        };
        info!(
            surface_area = measurements.surface_area,
            edge_length = measurements.edge_length,
            resolution = measurements.resolution,
            "measured mobius strip"
        );
        Ok(measurements)
    }

    pub fn render_mesh(&self, stride: usize) -> MobiusResult<RenderMesh> {
        RenderMesh::from_mesh(&self.mesh, stride)
    }
}
