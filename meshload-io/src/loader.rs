//! The mesh load contract: validation gates in front of the OBJ decoder.

use crate::error::{LoadError, Result};
use crate::obj::{DecodedObj, ObjReader};
use log::{error, info};
use meshload_core::Mesh;
use std::path::Path;

/// Load a mesh from a file, distinguishing failure kinds.
///
/// Gates run in order and the first failure short-circuits:
/// 1. the extension must be `obj`, compared ASCII case-insensitively — the
///    file is not opened when this gate fails;
/// 2. the path must exist;
/// 3. the file must decode to exactly one mesh body.
pub fn try_load_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();

    let extension = path.extension().and_then(|e| e.to_str());
    match extension {
        Some(ext) if ext.eq_ignore_ascii_case("obj") => {}
        _ => {
            return Err(LoadError::UnsupportedFormat {
                extension: extension.map(str::to_owned),
            })
        }
    }

    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    match ObjReader::decode(path)? {
        DecodedObj::Single(mesh) => Ok(mesh),
        DecodedObj::Collection(meshes) => Err(LoadError::Ambiguous {
            count: meshes.len(),
        }),
    }
}

/// Load a mesh from a file, collapsing every failure to `None`.
///
/// Wraps [`try_load_mesh`] and emits one log line per call describing the
/// outcome. No error ever reaches the caller; use [`try_load_mesh`] when the
/// failure kind matters.
pub fn load_mesh<P: AsRef<Path>>(path: P) -> Option<Mesh> {
    let path = path.as_ref();
    match try_load_mesh(path) {
        Ok(mesh) => {
            info!(
                "loaded mesh from '{}': {} vertices, {} faces",
                path.display(),
                mesh.vertex_count(),
                mesh.face_count()
            );
            Some(mesh)
        }
        Err(err) => {
            error!("failed to load mesh from '{}': {}", path.display(), err);
            None
        }
    }
}
