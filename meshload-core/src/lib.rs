//! Core data structures for meshload
//!
//! This crate provides the fundamental types for mesh loading: point and
//! vector aliases, and the polygon mesh returned to callers.

pub mod point;
pub mod mesh;

pub use point::*;
pub use mesh::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
