//! Batch driver: one generating primitive in, one or four records out

use std::io::Write;

use crate::common::{ControlSetResult, CurveModel, DiscreteAngleModel, TrajectorySink};

use super::primitive::Primitive;
use super::record::TRAJECTORY_DS;
use super::serializer::write_primitive;
use super::symmetry::rotated;

/// Write `prim` and, when `expand_symmetry` is set, its three 90-degree
/// rotations. Every rotation is derived from the canonical `prim`.
///
/// Each written variant is also handed to `viz` as coarse-sampled
/// trajectory points, so a plotting sink can draw the family while it
/// is generated. Returns the number of records written.
pub fn save_primitive_family<C, A, W>(
    sink: &mut W,
    prim: &Primitive<C>,
    angles: &A,
    expand_symmetry: bool,
    viz: &mut dyn TrajectorySink,
) -> ControlSetResult<usize>
where
    C: CurveModel + Clone,
    A: DiscreteAngleModel,
    W: Write,
{
    let turns: &[u8] = if expand_symmetry { &[0, 1, 2, 3] } else { &[0] };

    for &quarter_turns in turns {
        let variant = rotated(prim, quarter_turns);
        write_primitive(sink, &variant, angles)?;
        viz.accept(quarter_turns, &variant.sample(TRAJECTORY_DS)?);
    }

    Ok(turns.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{NullSink, Point2D, State};
    use crate::control_set::record::parse_records;
    use crate::curve::QuadraticSpiral;
    use crate::discretization::UniformAngleGrid;

    fn straight(length: f64) -> Primitive<QuadraticSpiral> {
        Primitive::new(
            State::origin_heading(0.0, 0.0),
            State::new(length, 0.0, 0.0, 0.0),
            QuadraticSpiral::straight(length),
        )
        .unwrap()
    }

    #[test]
    fn test_family_writes_four_records() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let mut sink: Vec<u8> = Vec::new();

        let written =
            save_primitive_family(&mut sink, &straight(3.0), &angles, true, &mut NullSink)
                .unwrap();
        assert_eq!(written, 4);

        let records = parse_records(sink.as_slice()).unwrap();
        assert_eq!(records.len(), 4);
        // one variant per heading quadrant, same length everywhere
        assert_eq!(records[0].start_bin, 0);
        assert_eq!(records[1].start_bin, 4);
        assert_eq!(records[2].start_bin, 8);
        assert_eq!(records[3].start_bin, 12);
        for record in &records {
            assert_eq!(record.length, 3.0);
        }
        // goal cells walk the quarter-turn cycle
        assert_eq!((records[1].goal_cell.i, records[1].goal_cell.j), (3, 0));
        assert_eq!((records[2].goal_cell.i, records[2].goal_cell.j), (0, -3));
        assert_eq!((records[3].goal_cell.i, records[3].goal_cell.j), (-3, 0));
    }

    #[test]
    fn test_without_symmetry_writes_one_record() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let mut sink: Vec<u8> = Vec::new();

        let written =
            save_primitive_family(&mut sink, &straight(1.0), &angles, false, &mut NullSink)
                .unwrap();
        assert_eq!(written, 1);
        assert_eq!(parse_records(sink.as_slice()).unwrap().len(), 1);
    }

    #[test]
    fn test_viz_sees_every_variant() {
        struct Collector {
            variants: Vec<(u8, usize)>,
        }
        impl TrajectorySink for Collector {
            fn accept(&mut self, quarter_turns: u8, trajectory: &[Point2D]) {
                self.variants.push((quarter_turns, trajectory.len()));
            }
        }

        let angles = UniformAngleGrid::new(16).unwrap();
        let mut sink: Vec<u8> = Vec::new();
        let mut collector = Collector { variants: Vec::new() };

        save_primitive_family(&mut sink, &straight(2.0), &angles, true, &mut collector).unwrap();

        assert_eq!(collector.variants.len(), 4);
        for (idx, (quarter_turns, samples)) in collector.variants.iter().enumerate() {
            assert_eq!(*quarter_turns as usize, idx);
            assert_eq!(*samples, 21);
        }
    }
}
