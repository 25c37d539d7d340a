//! Control-set generation for state-lattice planners
//!
//! A control set is the library of motion primitives available to an
//! agent at each discretized heading. Generation runs leaf to root:
//!
//! - `primitive`: a fitted curve anchored at the origin
//! - `footprint`: order-preserving rasterization onto the integer grid
//! - `symmetry`: the 4-fold rotation family of one generating primitive
//! - `record` / `serializer`: the append-only control-set file format
//! - `batch`: the driver tying the above together per primitive
//! - `loader`: reading a generated file back, grouped by start heading
//!
//! # Example
//!
//! ```no_run
//! use lattice_control_set::common::{NullSink, State};
//! use lattice_control_set::control_set::{save_primitive_family, Primitive};
//! use lattice_control_set::curve::QuadraticSpiral;
//! use lattice_control_set::discretization::UniformAngleGrid;
//!
//! let angles = UniformAngleGrid::new(16).unwrap();
//! let prim = Primitive::new(
//!     State::origin_heading(0.0, 0.0),
//!     State::new(3.0, 0.0, 0.0, 0.0),
//!     QuadraticSpiral::straight(3.0),
//! ).unwrap();
//!
//! let mut file = std::fs::File::create("control_set.txt").unwrap();
//! save_primitive_family(&mut file, &prim, &angles, true, &mut NullSink).unwrap();
//! ```

pub mod primitive;
pub mod footprint;
pub mod symmetry;
pub mod record;
pub mod serializer;
pub mod batch;
pub mod loader;

// Re-exports
pub use primitive::Primitive;
pub use footprint::{rasterize, FOOTPRINT_DS};
pub use symmetry::{rotated, rotation_family};
pub use record::{parse_records, PrimitiveRecord, TRAJECTORY_DS};
pub use serializer::{append_to_file, write_primitive};
pub use batch::save_primitive_family;
pub use loader::ControlSet;
