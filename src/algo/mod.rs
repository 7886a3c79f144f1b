//! Mesh processing algorithms.
//!
//! - **Selection**: centroids, sub-mesh extraction ([`select::slice`]) and
//!   concatenation ([`select::fuse`])
//! - **Components**: decomposition into connected parts ordered along an axis
//!
//! Every algorithm takes its input by reference and returns a new mesh.

pub mod components;
pub mod select;

pub use components::{component_indices, connected_components, ComponentOptions};
pub use select::{centroid, fuse, slice};
