//! # Meshparts
//!
//! A small polygon mesh toolkit for splitting meshes into their disconnected
//! parts.
//!
//! Meshparts stores meshes as indexed vertex, normal and face lists, reads and
//! writes them as Wavefront OBJ, and exports them as VTK XML PolyData for
//! visualization.
//!
//! ## Features
//!
//! - **Indexed polygon meshes**: faces of any size, optional per-vertex normals
//! - **Connected components**: depth-first decomposition without recursion,
//!   parts ordered spatially along a chosen axis
//! - **Slicing and fusing**: re-indexed sub-meshes and mesh concatenation
//! - **File formats**: OBJ (read/write), VTP (write)
//!
//! ## Quick Start
//!
//! ```no_run
//! use meshparts::prelude::*;
//!
//! let mesh = meshparts::io::load("scan.obj").unwrap();
//! let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();
//!
//! for (i, part) in parts.iter().enumerate() {
//!     meshparts::io::save(part, format!("part_{}.obj", i)).unwrap();
//! }
//! ```
//!
//! ## Building Meshes Programmatically
//!
//! ```
//! use meshparts::prelude::*;
//! use nalgebra::Point3;
//!
//! let vertices = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(5.0, 0.0, 0.0),
//!     Point3::new(4.0, 1.0, 0.0),
//! ];
//! let faces = vec![vec![0, 1, 2], vec![3, 4, 5]];
//!
//! let mesh = PolyMesh::new(vertices, Vec::new(), faces).unwrap();
//! let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();
//! assert_eq!(parts.len(), 2);
//!
//! let whole = fuse(&parts[0], &parts[1]).unwrap();
//! assert_eq!(whole.num_vertices(), 6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use meshparts::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        centroid, component_indices, connected_components, fuse, slice, ComponentOptions,
    };
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{AdjacencyGraph, Axis, Face, PolyMesh};
}

// Re-export nalgebra types for convenience
pub use nalgebra;
