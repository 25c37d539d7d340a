//! LatticeControlSet - control-set generation for state-lattice planners
//!
//! This crate precomputes the library of motion primitives a
//! lattice-based path planner uses: it rasterizes each primitive's
//! collision footprint onto the integer grid, expands one generating
//! curve into its 4-fold rotational symmetry family, and serializes the
//! result into an append-only control-set file that planners load back
//! by discrete start heading.

// Core modules
pub mod common;
pub mod utils;

// Generation modules
pub mod curve;
pub mod discretization;
pub mod control_set;

// Re-export common types for convenience
pub use common::{Footprint, GridCell, Point2D, State};
pub use common::{CurveModel, DiscreteAngleModel, NullSink, TrajectorySink};
pub use common::{ControlSetError, ControlSetResult};
pub use control_set::{
    append_to_file, parse_records, rasterize, rotated, rotation_family, save_primitive_family,
    write_primitive, ControlSet, Primitive, PrimitiveRecord, FOOTPRINT_DS, TRAJECTORY_DS,
};
pub use curve::QuadraticSpiral;
pub use discretization::UniformAngleGrid;
