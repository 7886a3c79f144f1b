//! Core mesh data structures.
//!
//! # Overview
//!
//! The primary type is [`PolyMesh`], an indexed polygon mesh holding vertex
//! positions, optional per-vertex normals and faces of any size. Faces refer to
//! vertices by 0-based index.
//!
//! [`AdjacencyGraph`] is the vertex graph induced by the faces of a mesh. It is
//! built on demand for connectivity queries and not stored with the mesh.
//!
//! # Construction
//!
//! ```
//! use meshparts::mesh::PolyMesh;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(1.0, 1.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2, 3]];
//!
//! let mesh = PolyMesh::new(vertices, Vec::new(), faces).unwrap();
//! assert_eq!(mesh.num_faces(), 1);
//! ```

mod graph;
mod polymesh;

pub use graph::AdjacencyGraph;
pub use polymesh::{Axis, Face, PolyMesh};
