//! Mesh loading from OBJ files
//!
//! This crate owns the load contract: it validates a path's extension and
//! existence, delegates OBJ decoding to `tobj`, and normalizes every failure
//! into a structured [`LoadError`] (or, through [`load_mesh`], into `None`).

pub mod error;
pub mod loader;
pub mod obj;

pub use error::*;
pub use loader::{load_mesh, try_load_mesh};
pub use obj::{DecodedObj, ObjReader};

use meshload_core::Mesh;

/// Trait for reading meshes from files
pub trait MeshReader {
    fn read_mesh<P: AsRef<std::path::Path>>(path: P) -> Result<Mesh>;
}
