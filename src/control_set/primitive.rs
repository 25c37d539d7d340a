//! Motion primitive: a short feasible curve anchored at the origin

use crate::common::{ControlSetError, ControlSetResult, CurveModel, Point2D, State};

/// One element of a control set
///
/// The start pose always sits at the origin, so only its heading and
/// curvature carry information; the goal is an absolute displacement.
/// The owned curve produces the geometry between the two.
#[derive(Debug, Clone)]
pub struct Primitive<C: CurveModel> {
    start: State,
    goal: State,
    curve: C,
}

impl<C: CurveModel> Primitive<C> {
    /// Build a primitive from a fitted curve.
    ///
    /// The caller guarantees the curve actually reaches `goal` when
    /// integrated from the start heading over its full length; that
    /// fitting invariant is not re-checked here.
    pub fn new(start: State, goal: State, curve: C) -> ControlSetResult<Self> {
        if !start.is_finite() || !goal.is_finite() {
            return Err(ControlSetError::InvalidState(format!(
                "non-finite primitive endpoint: start {:?}, goal {:?}",
                start, goal
            )));
        }
        if start.x != 0.0 || start.y != 0.0 {
            return Err(ControlSetError::InvalidState(format!(
                "primitive start must sit at the origin, got ({}, {})",
                start.x, start.y
            )));
        }
        Ok(Self { start, goal, curve })
    }

    /// Constructor for rotation variants whose states are derived from
    /// an already validated primitive.
    pub(crate) fn from_parts(start: State, goal: State, curve: C) -> Self {
        Self { start, goal, curve }
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn goal(&self) -> State {
        self.goal
    }

    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// Arc length of the primitive.
    pub fn length(&self) -> f64 {
        self.curve.length()
    }

    /// Sample the trajectory every `ds` of arc length, in the frame set
    /// by the start heading.
    pub fn sample(&self, ds: f64) -> ControlSetResult<Vec<Point2D>> {
        if !(ds > 0.0) {
            return Err(ControlSetError::InvalidParameter(format!(
                "sampling step must be positive, got {}",
                ds
            )));
        }
        Ok(self.curve.sample(self.start.theta, ds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::QuadraticSpiral;

    fn straight(length: f64) -> Primitive<QuadraticSpiral> {
        Primitive::new(
            State::origin_heading(0.0, 0.0),
            State::new(length, 0.0, 0.0, 0.0),
            QuadraticSpiral::straight(length),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_non_finite_state() {
        let result = Primitive::new(
            State::origin_heading(f64::NAN, 0.0),
            State::new(1.0, 0.0, 0.0, 0.0),
            QuadraticSpiral::straight(1.0),
        );
        assert!(matches!(result, Err(ControlSetError::InvalidState(_))));
    }

    #[test]
    fn test_new_rejects_offset_start() {
        let result = Primitive::new(
            State::new(1.0, 0.0, 0.0, 0.0),
            State::new(2.0, 0.0, 0.0, 0.0),
            QuadraticSpiral::straight(1.0),
        );
        assert!(matches!(result, Err(ControlSetError::InvalidState(_))));
    }

    #[test]
    fn test_sample_rejects_bad_step() {
        let prim = straight(1.0);
        assert!(matches!(
            prim.sample(0.0),
            Err(ControlSetError::InvalidParameter(_))
        ));
        assert!(matches!(
            prim.sample(-0.1),
            Err(ControlSetError::InvalidParameter(_))
        ));
        assert!(matches!(
            prim.sample(f64::NAN),
            Err(ControlSetError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_sample_uses_start_heading() {
        let prim = straight(2.0);
        let points = prim.sample(0.1).unwrap();
        let last = points.last().unwrap();
        assert!((last.x - 2.0).abs() < 1e-9);
        assert!(last.y.abs() < 1e-9);
    }
}
