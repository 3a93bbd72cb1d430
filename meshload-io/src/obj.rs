//! OBJ format support
//!
//! Parsing is delegated to the `tobj` crate; this module adapts its output
//! into [`Mesh`] values and tags the result by how many bodies it held.

use crate::error::{LoadError, Result};
use crate::MeshReader;
use meshload_core::{Mesh, Point3f, Vector3f};
use std::path::Path;

/// The outcome of decoding an OBJ file.
///
/// OBJ files can hold several disjoint bodies (one per `o`/`g` object).
/// Callers wanting a single unified mesh match on this instead of inspecting
/// the decoded data.
#[derive(Debug, Clone)]
pub enum DecodedObj {
    Single(Mesh),
    Collection(Vec<Mesh>),
}

pub struct ObjReader;

impl ObjReader {
    /// Decode an OBJ file into one or more mesh bodies.
    ///
    /// A decode yielding no mesh data at all is an error; `tobj` skips lines
    /// it does not recognize, so a text file under an `.obj` name can
    /// otherwise decode "successfully" into nothing.
    pub fn decode<P: AsRef<Path>>(path: P) -> Result<DecodedObj> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            // Keep polygon faces so OBJ face counts survive the decode
            triangulate: false,
            ignore_points: true,
            ignore_lines: true,
            ..Default::default()
        };

        let (models, _materials) =
            tobj::load_obj(path, &options).map_err(|e| LoadError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut meshes: Vec<Mesh> = models.into_iter().map(mesh_from_model).collect();
        match meshes.len() {
            0 => Err(LoadError::Decode {
                path: path.to_path_buf(),
                message: "no mesh data found".to_string(),
            }),
            1 => Ok(DecodedObj::Single(meshes.remove(0))),
            _ => Ok(DecodedObj::Collection(meshes)),
        }
    }
}

impl MeshReader for ObjReader {
    fn read_mesh<P: AsRef<Path>>(path: P) -> Result<Mesh> {
        match Self::decode(path)? {
            DecodedObj::Single(mesh) => Ok(mesh),
            DecodedObj::Collection(meshes) => Err(LoadError::Ambiguous {
                count: meshes.len(),
            }),
        }
    }
}

fn mesh_from_model(model: tobj::Model) -> Mesh {
    let tobj::Mesh {
        positions,
        normals,
        indices,
        face_arities,
        ..
    } = model.mesh;

    let vertices: Vec<Point3f> = positions
        .chunks_exact(3)
        .map(|c| Point3f::new(c[0], c[1], c[2]))
        .collect();

    let mut faces: Vec<Vec<usize>> = Vec::with_capacity(face_arities.len());
    if face_arities.is_empty() {
        // Already triangulated: indices come in runs of three
        for chunk in indices.chunks_exact(3) {
            faces.push(chunk.iter().map(|&i| i as usize).collect());
        }
    } else {
        let mut next = 0;
        for arity in face_arities {
            let arity = arity as usize;
            let face = indices[next..next + arity]
                .iter()
                .map(|&i| i as usize)
                .collect();
            faces.push(face);
            next += arity;
        }
    }

    let mut mesh = Mesh::from_vertices_and_faces(vertices, faces);
    if !normals.is_empty() && normals.len() == positions.len() {
        let normals = normals
            .chunks_exact(3)
            .map(|c| Vector3f::new(c[0], c[1], c[2]))
            .collect();
        mesh.set_normals(normals);
    }
    mesh
}
