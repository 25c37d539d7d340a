//! Serialized form of a primitive and the text format it travels in
//!
//! A control-set file is a flat sequence of self-delimited text records,
//! one per primitive variant:
//!
//! ```text
//! ===== prim description: =====
//! start heading (number): <int>
//! goal state (i, j, heading num): <int> <int> <int>
//! length is: <float>
//! turning on: <int>
//! trajectory is:
//! <x> <y>
//! ...
//! ---
//! collision is:
//! <i> <j>
//! ...
//! ---
//! prim end
//! ```
//!
//! Records are append-only: once written they are never mutated. The
//! parser accepts records at any file position and drops a truncated
//! trailing record (one missing its `prim end` line) instead of
//! failing, so a file cut off mid-write still loads.

use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;

use crate::common::{
    ControlSetError, ControlSetResult, CurveModel, DiscreteAngleModel, Footprint, GridCell,
    Point2D,
};

use super::footprint::{rasterize, FOOTPRINT_DS};
use super::primitive::Primitive;

/// Coarse sampling step for the stored trajectory points.
///
/// These points exist for inspection and plotting only; planning
/// correctness rests on the footprint, which is extracted at the much
/// finer [`FOOTPRINT_DS`](super::footprint::FOOTPRINT_DS).
pub const TRAJECTORY_DS: f64 = 0.1;

const RECORD_HEADER: &str = "===== prim description: =====";
const RECORD_FOOTER: &str = "prim end";
const BLOCK_END: &str = "---";
const START_HEADING_PREFIX: &str = "start heading (number):";
const GOAL_STATE_PREFIX: &str = "goal state (i, j, heading num):";
const LENGTH_PREFIX: &str = "length is:";
const TURNING_PREFIX: &str = "turning on:";
const TRAJECTORY_HEADER: &str = "trajectory is:";
const COLLISION_HEADER: &str = "collision is:";

/// One control-set file entry
///
/// The durable artifact of generation: discrete endpoints for the
/// planner, raw length and turn magnitude for costing, trajectory
/// points for inspection, and the collision footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveRecord {
    pub start_bin: usize,
    pub goal_cell: GridCell,
    pub goal_bin: usize,
    pub length: f64,
    pub turning: usize,
    pub trajectory: Vec<Point2D>,
    pub footprint: Footprint,
}

impl PrimitiveRecord {
    /// Build the record for one primitive variant.
    ///
    /// The goal cell is `(round(goal.y), round(goal.x))`, the same axis
    /// swap and rounding the rasterizer uses; `turning` is the discrete
    /// heading distance between start and goal.
    pub fn from_primitive<C, A>(prim: &Primitive<C>, angles: &A) -> ControlSetResult<Self>
    where
        C: CurveModel,
        A: DiscreteAngleModel,
    {
        let start = prim.start();
        let goal = prim.goal();

        Ok(Self {
            start_bin: angles.num_angle(start.theta),
            goal_cell: GridCell::containing(goal.position()),
            goal_bin: angles.num_angle(goal.theta),
            length: prim.length(),
            turning: angles.dist(start.theta, goal.theta),
            trajectory: prim.sample(TRAJECTORY_DS)?,
            footprint: rasterize(prim, FOOTPRINT_DS)?,
        })
    }

    /// Render the record as one self-delimited text block, exactly as it
    /// appears in the control-set file.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(RECORD_HEADER);
        out.push('\n');
        out.push_str(&format!("{} {}\n", START_HEADING_PREFIX, self.start_bin));
        out.push_str(&format!(
            "{} {} {} {}\n",
            GOAL_STATE_PREFIX, self.goal_cell.i, self.goal_cell.j, self.goal_bin
        ));
        out.push_str(&format!("{} {}\n", LENGTH_PREFIX, self.length));
        out.push_str(&format!("{} {}\n", TURNING_PREFIX, self.turning));

        out.push_str(TRAJECTORY_HEADER);
        out.push('\n');
        for p in &self.trajectory {
            out.push_str(&format!("{} {}\n", p.x, p.y));
        }
        out.push_str(BLOCK_END);
        out.push('\n');

        out.push_str(COLLISION_HEADER);
        out.push('\n');
        for cell in self.footprint.cells() {
            out.push_str(&format!("{} {}\n", cell.i, cell.j));
        }
        out.push_str(BLOCK_END);
        out.push('\n');

        out.push_str(RECORD_FOOTER);
        out.push('\n');
        out
    }

    /// Cost of traversing the footprint cell to cell: 1 per edge step,
    /// sqrt(2) per corner step. Assumes the cells are listed in
    /// traversal order.
    pub fn footprint_cost(&self) -> f64 {
        self.footprint
            .cells()
            .windows(2)
            .map(|w| {
                let di = (w[1].i - w[0].i) as f64;
                let dj = (w[1].j - w[0].j) as f64;
                (di * di + dj * dj).sqrt()
            })
            .sum()
    }
}

#[derive(Default)]
struct PartialRecord {
    start_bin: Option<usize>,
    goal: Option<(GridCell, usize)>,
    length: Option<f64>,
    turning: Option<usize>,
    trajectory: Vec<Point2D>,
    footprint: Vec<GridCell>,
}

impl PartialRecord {
    fn finish(self) -> ControlSetResult<PrimitiveRecord> {
        let missing = |field: &str| {
            ControlSetError::ParseError(format!("record is missing its {} line", field))
        };
        let (goal_cell, goal_bin) = self.goal.ok_or_else(|| missing("goal state"))?;
        Ok(PrimitiveRecord {
            start_bin: self.start_bin.ok_or_else(|| missing("start heading"))?,
            goal_cell,
            goal_bin,
            length: self.length.ok_or_else(|| missing("length"))?,
            turning: self.turning.ok_or_else(|| missing("turning"))?,
            trajectory: self.trajectory,
            footprint: Footprint::from_cells(self.footprint),
        })
    }
}

enum Block {
    Fields,
    Trajectory,
    Collision,
}

fn parse_num<T: FromStr>(token: &str) -> ControlSetResult<T> {
    token
        .parse()
        .map_err(|_| ControlSetError::ParseError(format!("bad number {:?}", token)))
}

fn parse_pair<T: FromStr>(line: &str) -> ControlSetResult<(T, T)> {
    let (a, b) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| ControlSetError::ParseError(format!("expected two fields in {:?}", line)))?;
    Ok((parse_num(a)?, parse_num(b)?))
}

/// Parse every complete record from a reader.
///
/// Lines outside records are skipped, so records can start at any file
/// position. A trailing record without its `prim end` line is treated
/// as absent; malformed numbers inside a record are an error.
pub fn parse_records<R: BufRead>(reader: R) -> ControlSetResult<Vec<PrimitiveRecord>> {
    let mut records = Vec::new();
    let mut current: Option<PartialRecord> = None;
    let mut block = Block::Fields;

    for line in reader.lines() {
        let line = line?;

        if line.starts_with(RECORD_HEADER) {
            current = Some(PartialRecord::default());
            block = Block::Fields;
            continue;
        }
        if matches!(block, Block::Fields) && line.starts_with(RECORD_FOOTER) {
            if let Some(done) = current.take() {
                records.push(done.finish()?);
            }
            continue;
        }
        let record = match current.as_mut() {
            Some(record) => record,
            None => continue,
        };

        match block {
            Block::Trajectory => {
                if line.starts_with(BLOCK_END) {
                    block = Block::Fields;
                } else {
                    let (x, y) = parse_pair::<f64>(&line)?;
                    record.trajectory.push(Point2D::new(x, y));
                }
            }
            Block::Collision => {
                if line.starts_with(BLOCK_END) {
                    block = Block::Fields;
                } else {
                    let (i, j) = parse_pair::<i32>(&line)?;
                    record.footprint.push(GridCell::new(i, j));
                }
            }
            Block::Fields => {
                if let Some(rest) = line.strip_prefix(START_HEADING_PREFIX) {
                    record.start_bin = Some(parse_num(rest.trim())?);
                } else if let Some(rest) = line.strip_prefix(GOAL_STATE_PREFIX) {
                    let (i, j, bin) = rest.split_whitespace().collect_tuple().ok_or_else(|| {
                        ControlSetError::ParseError(format!("bad goal state line {:?}", line))
                    })?;
                    record.goal = Some((
                        GridCell::new(parse_num(i)?, parse_num(j)?),
                        parse_num(bin)?,
                    ));
                } else if let Some(rest) = line.strip_prefix(LENGTH_PREFIX) {
                    record.length = Some(parse_num(rest.trim())?);
                } else if let Some(rest) = line.strip_prefix(TURNING_PREFIX) {
                    record.turning = Some(parse_num(rest.trim())?);
                } else if line.starts_with(TRAJECTORY_HEADER) {
                    block = Block::Trajectory;
                } else if line.starts_with(COLLISION_HEADER) {
                    block = Block::Collision;
                }
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::common::State;
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
    fn test_record_fields_for_straight_line() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let record = PrimitiveRecord::from_primitive(&straight(3.0), &angles).unwrap();

        assert_eq!(record.start_bin, 0);
        assert_eq!(record.goal_cell, GridCell::new(0, 3));
        assert_eq!(record.goal_bin, 0);
        assert_eq!(record.length, 3.0);
        assert_eq!(record.turning, 0);
        assert_eq!(record.trajectory.len(), 31);
        assert_eq!(record.footprint.len(), 4);
    }

    #[test]
    fn test_turning_matches_angle_model() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let prim = Primitive::new(
            State::origin_heading(0.0, 0.5),
            State::new(2.0, 2.0, FRAC_PI_2, 0.5),
            QuadraticSpiral::arc(0.5, std::f64::consts::PI),
        )
        .unwrap();
        let record = PrimitiveRecord::from_primitive(&prim, &angles).unwrap();

        assert_eq!(record.turning, angles.dist(0.0, FRAC_PI_2));
        assert_eq!(record.turning, 4);
        assert_eq!(record.goal_cell, GridCell::new(2, 2));
        assert_eq!(record.goal_bin, 4);
    }

    #[test]
    fn test_text_layout() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let record = PrimitiveRecord::from_primitive(&straight(1.0), &angles).unwrap();
        let text = record.to_text();

        assert!(text.starts_with("===== prim description: =====\n"));
        assert!(text.ends_with("---\nprim end\n"));
        assert!(text.contains("start heading (number): 0\n"));
        assert!(text.contains("goal state (i, j, heading num): 0 1 0\n"));
        assert!(text.contains("length is: 1\n"));
        assert!(text.contains("turning on: 0\n"));
        assert_eq!(text.matches("---\n").count(), 2);
    }

    #[test]
    fn test_parse_round_trip_is_byte_identical() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let prim = Primitive::new(
            State::origin_heading(0.0, 0.5),
            State::new(2.0, 2.0, FRAC_PI_2, 0.5),
            QuadraticSpiral::arc(0.5, std::f64::consts::PI),
        )
        .unwrap();
        let record = PrimitiveRecord::from_primitive(&prim, &angles).unwrap();
        let text = record.to_text();

        let parsed = parse_records(text.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0], record);
        assert_eq!(parsed[0].to_text(), text);
    }

    #[test]
    fn test_parse_drops_truncated_trailing_record() {
        let angles = UniformAngleGrid::new(16).unwrap();
        let complete = PrimitiveRecord::from_primitive(&straight(1.0), &angles)
            .unwrap()
            .to_text();
        // cut the second record off inside its trajectory block
        let truncated: String = complete
            .lines()
            .take(7)
            .map(|l| format!("{}\n", l))
            .collect();

        let file = format!("{}{}", complete, truncated);
        let parsed = parse_records(file.as_bytes()).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_number() {
        let text = "===== prim description: =====\nstart heading (number): abc\n";
        assert!(matches!(
            parse_records(text.as_bytes()),
            Err(ControlSetError::ParseError(_))
        ));
    }

    #[test]
    fn test_footprint_cost() {
        let record = PrimitiveRecord {
            start_bin: 0,
            goal_cell: GridCell::new(1, 2),
            goal_bin: 0,
            length: 3.0,
            turning: 0,
            trajectory: Vec::new(),
            footprint: Footprint::from_cells(vec![
                GridCell::new(0, 0),
                GridCell::new(0, 1),
                GridCell::new(1, 2),
            ]),
        };
        assert!((record.footprint_cost() - (1.0 + 2.0_f64.sqrt())).abs() < 1e-12);
    }
}
