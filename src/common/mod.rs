//! Common types, traits, and error definitions for lattice_control_set
//!
//! This module provides the foundational building blocks used across
//! the control-set generation components.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
