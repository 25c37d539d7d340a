//! Utility modules for lattice_control_set

pub mod visualization;

pub use visualization::{colors, FamilyPlotter, Visualizer};
