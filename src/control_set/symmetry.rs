//! 4-fold rotational symmetry family of a generating primitive
//!
//! One physically fitted curve serves four discrete start headings:
//! rotating the start heading and the goal state by k*90 degrees yields
//! a valid primitive without re-solving the curve fitting, since length
//! and curvature are invariant under rotation.

use std::f64::consts::FRAC_PI_2;

use crate::common::{CurveModel, State};

use super::primitive::Primitive;

/// Exact quarter-turn of a plane point about the origin.
fn quarter_turn_xy(quarter_turns: u8, x: f64, y: f64) -> (f64, f64) {
    match quarter_turns % 4 {
        0 => (x, y),
        1 => (-y, x),
        2 => (-x, -y),
        _ => (y, -x),
    }
}

/// Rotate a primitive by `quarter_turns * 90` degrees about the origin.
///
/// Only the states change: the goal position goes through the exact
/// quarter-turn map `(x, y) -> (-y, x) -> (-x, -y) -> (y, -x)` and the
/// headings gain one `k * pi/2` offset, while curvature stays put. Every
/// output is computed from the canonical primitive, never from a
/// previously rotated copy, so repeated 90-degree steps cannot
/// accumulate floating-point drift; a multiple of four quarter turns
/// returns the primitive bit-for-bit unchanged.
///
/// The curve geometry is shared as-is. A rotated variant must be
/// re-sampled (and re-rasterized) on its own, because its sampled
/// coordinates follow the rotated start heading.
pub fn rotated<C: CurveModel + Clone>(prim: &Primitive<C>, quarter_turns: u8) -> Primitive<C> {
    let k = quarter_turns % 4;
    let offset = k as f64 * FRAC_PI_2;

    let start = prim.start();
    let goal = prim.goal();
    let (gx, gy) = quarter_turn_xy(k, goal.x, goal.y);

    Primitive::from_parts(
        State::origin_heading(start.theta + offset, start.k),
        State::new(gx, gy, goal.theta + offset, goal.k),
        prim.curve().clone(),
    )
}

/// The four rotational variants {0, 90, 180, 270 degrees} of a
/// primitive, canonical first.
pub fn rotation_family<C: CurveModel + Clone>(prim: &Primitive<C>) -> [Primitive<C>; 4] {
    [
        rotated(prim, 0),
        rotated(prim, 1),
        rotated(prim, 2),
        rotated(prim, 3),
    ]
}
