//! Error types for meshparts.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// A vertex selection was empty.
    #[error("vertex selection is empty")]
    EmptySelection,

    /// A face references an invalid vertex index.
    #[error("face {face} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// The face index.
        face: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// A selected vertex does not exist in the mesh.
    #[error("selected vertex {vertex} is out of range (mesh has {num_vertices} vertices)")]
    SelectionOutOfRange {
        /// The selected vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },

    /// A vertex appears more than once in a selection.
    #[error("vertex {vertex} is selected more than once")]
    DuplicateSelection {
        /// The repeated vertex index.
        vertex: usize,
    },

    /// A kept face references a vertex that is not part of the selection.
    #[error("face {face} touches the selection but references unselected vertex {vertex}")]
    OpenSelection {
        /// The face index in the source mesh.
        face: usize,
        /// The unselected vertex index.
        vertex: usize,
    },

    /// A selected vertex has no normal although the mesh carries normals.
    #[error("selected vertex {vertex} has no normal (mesh has {num_normals} normals)")]
    MissingNormal {
        /// The selected vertex index.
        vertex: usize,
        /// Number of normals in the mesh.
        num_normals: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },
}

impl MeshError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
