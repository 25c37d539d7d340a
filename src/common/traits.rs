//! Trait seams between the control-set core and its collaborators

use crate::common::types::Point2D;

/// Continuous curve behind a motion primitive.
///
/// The curve is anchored at the origin and parameterized by arc length.
/// `sample` integrates it under a caller-supplied start heading, so a
/// single geometry serves every rotated variant of a primitive: rotating
/// the start heading rotates the whole sampled point set.
pub trait CurveModel {
    /// Total arc length of the curve.
    fn length(&self) -> f64;

    /// Ordered plane points every `ds` of arc length, starting at the
    /// origin. `ds` is assumed positive; callers validate it.
    fn sample(&self, start_heading: f64, ds: f64) -> Vec<Point2D>;
}

/// Discretized-heading model used when serializing primitives.
///
/// Maps continuous headings to integer bins and measures angular
/// distance in bin steps. Implementations must be total over all finite
/// headings (normalize mod 2*pi internally).
pub trait DiscreteAngleModel {
    /// Number of discrete headings.
    fn bins(&self) -> usize;

    /// Bin index of a heading, in `0..bins()`.
    fn num_angle(&self, theta: f64) -> usize;

    /// Distance between two headings in discrete heading steps.
    fn dist(&self, from: f64, to: f64) -> usize;
}

/// Receives each primitive variant emitted by the batch driver,
/// typically to draw it. The rasterizer and serializer never depend on
/// this; only the driver takes a sink.
pub trait TrajectorySink {
    /// Called once per written variant with its rotation index (in
    /// quarter turns) and coarse-sampled trajectory.
    fn accept(&mut self, quarter_turns: u8, trajectory: &[Point2D]);
}

/// Sink that draws nothing.
pub struct NullSink;

impl TrajectorySink for NullSink {
    fn accept(&mut self, _quarter_turns: u8, _trajectory: &[Point2D]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSink {
        calls: usize,
    }

    impl TrajectorySink for CountingSink {
        fn accept(&mut self, _quarter_turns: u8, _trajectory: &[Point2D]) {
            self.calls += 1;
        }
    }

    #[test]
    fn test_trajectory_sink_trait() {
        let mut sink = CountingSink { calls: 0 };
        sink.accept(0, &[Point2D::origin()]);
        sink.accept(1, &[Point2D::origin()]);
        assert_eq!(sink.calls, 2);
    }

    #[test]
    fn test_null_sink_is_noop() {
        let mut sink = NullSink;
        sink.accept(3, &[]);
    }
}
