//! Common types used throughout lattice_control_set

use std::collections::HashSet;

use nalgebra::{Vector2, Vector4};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

impl From<Vector2<f64>> for Point2D {
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

/// Continuous-plane pose with instantaneous curvature
///
/// Produced by the curve model, consumed by the rasterizer and the
/// serializer. Curvature `k` is signed: positive turns left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub k: f64,
}

impl State {
    pub fn new(x: f64, y: f64, theta: f64, k: f64) -> Self {
        Self { x, y, theta, k }
    }

    /// State at the origin with the given heading and curvature.
    /// Control-set primitives always start here.
    pub fn origin_heading(theta: f64, k: f64) -> Self {
        Self { x: 0.0, y: 0.0, theta, k }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite() && self.k.is_finite()
    }

    pub fn to_vector(&self) -> Vector4<f64> {
        Vector4::new(self.x, self.y, self.theta, self.k)
    }
}

impl From<Vector4<f64>> for State {
    fn from(v: Vector4<f64>) -> Self {
        Self { x: v[0], y: v[1], theta: v[2], k: v[3] }
    }
}

/// Integer grid cell: row `i` along the y-axis, column `j` along the x-axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub i: i32,
    pub j: i32,
}

impl GridCell {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Cell containing a continuous point: `(round(y), round(x))`.
    ///
    /// Note the axis swap: the row index comes from y, the column from x.
    /// Rounding is `f64::round`, i.e. halves away from zero, so cell
    /// boundaries sit at half-integer coordinates.
    pub fn containing(p: Point2D) -> Self {
        Self {
            i: p.y.round() as i32,
            j: p.x.round() as i32,
        }
    }
}

/// Ordered set of unique grid cells, in first-visit order
///
/// Backs the collision footprint of a primitive: a hash set answers
/// membership, an append-only list keeps traversal order.
#[derive(Debug, Clone, Default)]
pub struct Footprint {
    seen: HashSet<GridCell>,
    order: Vec<GridCell>,
}

impl Footprint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cell unless it was already visited. Returns whether the
    /// cell was new.
    pub fn insert(&mut self, cell: GridCell) -> bool {
        if self.seen.insert(cell) {
            self.order.push(cell);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, cell: &GridCell) -> bool {
        self.seen.contains(cell)
    }

    /// Cells in first-visit order.
    pub fn cells(&self) -> &[GridCell] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn from_cells<I: IntoIterator<Item = GridCell>>(cells: I) -> Self {
        let mut footprint = Self::new();
        for cell in cells {
            footprint.insert(cell);
        }
        footprint
    }
}

impl PartialEq for Footprint {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for Footprint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_state_finite() {
        assert!(State::new(1.0, 2.0, 0.5, 0.0).is_finite());
        assert!(!State::new(f64::NAN, 2.0, 0.5, 0.0).is_finite());
        assert!(!State::new(1.0, 2.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_grid_cell_axis_swap() {
        let cell = GridCell::containing(Point2D::new(3.2, -1.4));
        assert_eq!(cell, GridCell::new(-1, 3));
    }

    #[test]
    fn test_grid_cell_rounds_halves_away_from_zero() {
        assert_eq!(GridCell::containing(Point2D::new(0.5, 0.0)), GridCell::new(0, 1));
        assert_eq!(GridCell::containing(Point2D::new(-0.5, 0.0)), GridCell::new(0, -1));
        assert_eq!(GridCell::containing(Point2D::new(0.0, 1.5)), GridCell::new(2, 0));
    }

    #[test]
    fn test_footprint_dedup_keeps_first_visit_order() {
        let mut footprint = Footprint::new();
        assert!(footprint.insert(GridCell::new(0, 0)));
        assert!(footprint.insert(GridCell::new(0, 1)));
        assert!(!footprint.insert(GridCell::new(0, 0)));
        assert!(footprint.insert(GridCell::new(1, 1)));
        assert_eq!(
            footprint.cells(),
            &[GridCell::new(0, 0), GridCell::new(0, 1), GridCell::new(1, 1)]
        );
        assert_eq!(footprint.len(), 3);
    }
}
