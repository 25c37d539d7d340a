//! Discrete collision footprint of a primitive
//!
//! Reduces a densely sampled curve to the ordered sequence of unique
//! grid cells it passes through, in first-visit order. The footprint is
//! what a planner later tests against its occupancy grid.

use crate::common::{ControlSetResult, CurveModel, Footprint, GridCell};

use super::primitive::Primitive;

/// Fine sampling step for footprint extraction.
///
/// Must stay well below the grid cell size so that consecutive samples
/// cannot skip a cell the curve passes through. Too coarse a step
/// under-reports cells; that is the sampling-density contract of the
/// caller, not something detectable here.
pub const FOOTPRINT_DS: f64 = 0.01;

/// Rasterize a primitive onto the integer grid.
///
/// Each sampled point maps to the cell `(round(y), round(x))`; a cell
/// enters the footprint only on its first visit. A curve that never
/// leaves one cell yields a single-entry footprint.
pub fn rasterize<C: CurveModel>(prim: &Primitive<C>, ds: f64) -> ControlSetResult<Footprint> {
    let mut footprint = Footprint::new();
    for point in prim.sample(ds)? {
        footprint.insert(GridCell::containing(point));
    }
    Ok(footprint)
}
