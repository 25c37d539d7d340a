//! Visualization utilities for lattice_control_set
//!
//! Provides a gnuplot-backed view of generated primitives: trajectories,
//! collision footprints, and the unit grid they are rasterized onto.
//! Rendering is never required for generation; the batch driver only
//! sees the [`TrajectorySink`] seam.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{GridCell, Point2D, TrajectorySink};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const YELLOW: &str = "#FFFF00";
    pub const GRAY: &str = "#808080";

    // Semantic colors
    pub const GRID: &str = GRAY;
    pub const FOOTPRINT: &str = BLACK;
    /// One color per rotation variant, canonical first.
    pub const VARIANTS: [&str; 4] = [RED, GREEN, BLUE, YELLOW];
}

/// Main visualizer struct
pub struct Visualizer {
    figure: Figure,
    title: String,
    x_range: Option<(f64, f64)>,
    y_range: Option<(f64, f64)>,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            figure: Figure::new(),
            title: String::new(),
            x_range: None,
            y_range: None,
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn set_x_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn set_y_range(&mut self, min: f64, max: f64) -> &mut Self {
        self.y_range = Some((min, max));
        self
    }

    /// Plot one trajectory as a polyline.
    pub fn plot_trajectory(&mut self, points: &[Point2D], color: &str, caption: &str) -> &mut Self {
        let x: Vec<f64> = points.iter().map(|p| p.x).collect();
        let y: Vec<f64> = points.iter().map(|p| p.y).collect();

        self.figure.axes2d().lines(
            &x,
            &y,
            &[Caption(caption), Color(color), LineWidth(2.0)],
        );
        self
    }

    /// Plot footprint cells as squares at their centers.
    ///
    /// Cell coordinates are (i, j) = (row, column); the plot axes are
    /// (x, y) = (column, row).
    pub fn plot_footprint(&mut self, cells: &[GridCell]) -> &mut Self {
        let x: Vec<f64> = cells.iter().map(|c| c.j as f64).collect();
        let y: Vec<f64> = cells.iter().map(|c| c.i as f64).collect();

        self.figure.axes2d().points(
            &x,
            &y,
            &[
                Caption("Footprint"),
                Color(colors::FOOTPRINT),
                PointSymbol('S'),
                PointSize(0.5),
            ],
        );
        self
    }

    /// Draw unit grid lines over [min, max] in both axes.
    ///
    /// Lines sit at half-integer coordinates so that integer coordinates
    /// point at cell centers.
    pub fn draw_grid(&mut self, min: i32, max: i32) -> &mut Self {
        let lo = min as f64 - 0.5;
        let hi = max as f64 + 0.5;

        let axes = self.figure.axes2d();
        let mut at = lo;
        while at <= hi {
            axes.lines(&[lo, hi], &[at, at], &[Color(colors::GRID), LineWidth(1.0)]);
            axes.lines(&[at, at], &[lo, hi], &[Color(colors::GRID), LineWidth(1.0)]);
            at += 1.0;
        }
        self
    }

    /// Finalize and show the plot.
    pub fn show(&mut self) -> Result<(), String> {
        self.apply_settings();
        self.figure.show().map_err(|e| e.to_string()).map(|_| ())
    }

    /// Save plot to PNG file.
    pub fn save_png(&mut self, path: &str, width: u32, height: u32) -> Result<(), String> {
        self.apply_settings();
        self.figure
            .save_to_png(path, width, height)
            .map_err(|e| e.to_string())
    }

    fn apply_settings(&mut self) {
        let axes = self.figure.axes2d();

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("X [cells]", &[]);
        axes.set_y_label("Y [cells]", &[]);
        axes.set_aspect_ratio(AutoOption::Fix(1.0));

        if let Some((min, max)) = self.x_range {
            axes.set_x_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
        if let Some((min, max)) = self.y_range {
            axes.set_y_range(AutoOption::Fix(min), AutoOption::Fix(max));
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trajectory sink that collects every variant of a batch and renders
/// the families in one figure, one color per rotation variant.
pub struct FamilyPlotter {
    variants: Vec<(u8, Vec<Point2D>)>,
}

impl FamilyPlotter {
    pub fn new() -> Self {
        Self { variants: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Build a visualizer with every collected trajectory drawn.
    pub fn into_visualizer(self, title: &str) -> Visualizer {
        let mut vis = Visualizer::new();
        vis.set_title(title);
        for (quarter_turns, points) in &self.variants {
            let color = colors::VARIANTS[(*quarter_turns % 4) as usize];
            vis.plot_trajectory(points, color, &format!("{}x90 deg", quarter_turns));
        }
        vis
    }
}

impl Default for FamilyPlotter {
    fn default() -> Self {
        Self::new()
    }
}

impl TrajectorySink for FamilyPlotter {
    fn accept(&mut self, quarter_turns: u8, trajectory: &[Point2D]) {
        self.variants.push((quarter_turns, trajectory.to_vec()));
    }
}
