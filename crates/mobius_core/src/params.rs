use crate::error::{MobiusError, MobiusResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_WIDTH: f64 = 0.3;
pub const DEFAULT_RESOLUTION: usize = 200;

/// Immutable configuration of a strip: central radius `R`, strip width `w`
/// and the number of samples `n` along each parameter axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobiusParams {
    pub radius: f64,
    pub width: f64,
    pub resolution: usize,
}

impl Default for MobiusParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            width: DEFAULT_WIDTH,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl MobiusParams {
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn validate(&self) -> MobiusResult<()> {
        if self.resolution < 2 {
            return Err(MobiusError::invalid_parameter(
                "resolution",
                self.resolution,
                "at least 2 samples per axis are required",
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MobiusError::invalid_parameter(
                "radius",
                self.radius,
                "must be finite and positive",
            ));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(MobiusError::invalid_parameter(
                "width",
                self.width,
                "must be finite and positive",
            ));
        }
        Ok(())
    }

    /// Grid spacing along `u`, which sweeps `[0, 2π]`.
    pub fn du(&self) -> f64 {
        2.0 * PI / (self.resolution - 1) as f64
    }

    /// Grid spacing along `v`, which sweeps `[-w/2, w/2]`.
    pub fn dv(&self) -> f64 {
        self.width / (self.resolution - 1) as f64
    }
}
