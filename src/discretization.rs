//! Uniform heading discretization
//!
//! Closed-form modular binning of continuous headings, used when
//! serializing primitives. Planners address control-set entries by
//! these bin indices.

use std::f64::consts::PI;

use crate::common::{ControlSetError, ControlSetResult, DiscreteAngleModel};

/// Normalize an angle to [0, 2*PI)
pub fn normalize_angle_2pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(2.0 * PI);
    // rem_euclid of a tiny negative angle can round up to exactly 2*PI
    if a >= 2.0 * PI {
        0.0
    } else {
        a
    }
}

/// Uniform partition of [0, 2*PI) into equally spaced heading bins
///
/// Bin 0 points along the positive x-axis; indices grow
/// counter-clockwise. A heading maps to its nearest bin center.
#[derive(Debug, Clone, Copy)]
pub struct UniformAngleGrid {
    bins: usize,
}

impl UniformAngleGrid {
    pub fn new(bins: usize) -> ControlSetResult<Self> {
        if bins == 0 {
            return Err(ControlSetError::InvalidParameter(
                "angle grid needs at least one bin".to_string(),
            ));
        }
        Ok(Self { bins })
    }

    fn step(&self) -> f64 {
        2.0 * PI / self.bins as f64
    }
}

impl DiscreteAngleModel for UniformAngleGrid {
    fn bins(&self) -> usize {
        self.bins
    }

    fn num_angle(&self, theta: f64) -> usize {
        let a = normalize_angle_2pi(theta);
        (a / self.step()).round() as usize % self.bins
    }

    fn dist(&self, from: f64, to: f64) -> usize {
        let a = self.num_angle(from);
        let b = self.num_angle(to);
        let d = if a > b { a - b } else { b - a };
        d.min(self.bins - d)
    }
}
