//! Mesh file I/O.
//!
//! This module provides functions for loading and saving meshes.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | Wavefront OBJ | `.obj` | ✓ | ✓ | Positions, normals, polygons |
//! | VTK XML PolyData | `.vtp` | ✗ | ✓ | ASCII, for visualization |
//!
//! # Usage
//!
//! ```no_run
//! use meshparts::io::{load, save};
//!
//! let mesh = load("model.obj").unwrap();
//! save(&mesh, "model.vtp").unwrap();
//! ```

pub mod obj;
pub mod vtp;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::mesh::PolyMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Wavefront OBJ format.
    Obj,
    /// VTK XML PolyData format.
    Vtp,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "obj" => Some(Format::Obj),
            "vtp" => Some(Format::Vtp),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }

    /// Canonical file extension of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Obj => "obj",
            Format::Vtp => "vtp",
        }
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PolyMesh> {
    let path = path.as_ref();

    match detect(path)? {
        Format::Obj => obj::load(path),
        Format::Vtp => Err(MeshError::LoadError {
            path: path.to_path_buf(),
            message: "VTP loading is not supported".to_string(),
        }),
    }
}

/// Save a mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> Result<()> {
    let path = path.as_ref();

    match detect(path)? {
        Format::Obj => obj::save(mesh, path),
        Format::Vtp => vtp::save(mesh, path),
    }
}
