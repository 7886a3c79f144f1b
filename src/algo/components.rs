//! Decomposition of a mesh into its connected components.
//!
//! Two vertices belong to the same component when a chain of face edges joins
//! them (see [`AdjacencyGraph`]). Each component is extracted as an independent
//! [`PolyMesh`] with its own contiguous vertex numbering, and the parts are
//! ordered along a coordinate axis by the position of their centroid.
//!
//! # Example
//!
//! ```
//! use meshparts::algo::components::{connected_components, ComponentOptions};
//! use meshparts::mesh::{Axis, PolyMesh};
//! use nalgebra::Point3;
//!
//! // Two triangles, the second one left of the first along x
//! let vertices = vec![
//!     Point3::new(5.0, 0.0, 0.0),
//!     Point3::new(6.0, 0.0, 0.0),
//!     Point3::new(5.0, 1.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ];
//! let mesh = PolyMesh::new(vertices, Vec::new(), vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
//!
//! let parts = connected_components(&mesh, &ComponentOptions::default().with_axis(Axis::X)).unwrap();
//! assert_eq!(parts.len(), 2);
//! assert_eq!(parts[0].position(0), Point3::new(0.0, 0.0, 0.0));
//! ```

use rayon::prelude::*;

use crate::error::Result;
use crate::mesh::{AdjacencyGraph, Axis, PolyMesh};

use super::select::{centroid, slice};

/// Options for connected-component extraction.
#[derive(Debug, Clone)]
pub struct ComponentOptions {
    /// Axis along which the components are ordered (default: x).
    pub axis: Axis,

    /// Whether to extract the component meshes in parallel (default: true).
    pub parallel: bool,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            parallel: true,
        }
    }
}

impl ComponentOptions {
    /// Order components along the given axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Vertex sets of the connected components, ordered along `axis`.
///
/// Components are sorted by the `axis` coordinate of their centroid, in
/// ascending order. The sort is stable: components with equal coordinates keep
/// the order in which they were discovered, which is the order of their lowest
/// vertex index. Within a component, vertices are listed in depth-first order.
pub fn component_indices(mesh: &PolyMesh, axis: Axis) -> Result<Vec<Vec<usize>>> {
    let graph = AdjacencyGraph::new(mesh)?;
    let components = graph.connected_components();

    let mut keyed = components
        .iter()
        .map(|component| Ok((centroid(mesh, component)?[axis.index()], component)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(keyed.into_iter().map(|(_, c)| c.clone()).collect())
}

/// Split a mesh into one sub-mesh per connected component.
///
/// Components are ordered as in [`component_indices`]. Each part keeps the
/// vertex order of its depth-first traversal and every face of the component,
/// renumbered from zero. A mesh without faces yields one single-vertex part per
/// vertex, and an empty mesh yields no parts.
///
/// # Errors
///
/// Fails if a face references a vertex outside the mesh, or with
/// [`MeshError::MissingNormal`](crate::error::MeshError::MissingNormal) if the
/// mesh has normals but fewer than one per used vertex.
pub fn connected_components(mesh: &PolyMesh, options: &ComponentOptions) -> Result<Vec<PolyMesh>> {
    let components = component_indices(mesh, options.axis)?;

    log::info!(
        "split mesh into {} components along {}",
        components.len(),
        options.axis
    );

    if options.parallel {
        components
            .par_iter()
            .map(|component| slice(mesh, component))
            .collect()
    } else {
        components
            .iter()
            .map(|component| slice(mesh, component))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use nalgebra::{Point3, Vector3};

    fn two_triangles() -> PolyMesh {
        PolyMesh::new(
            vec![
                Point3::new(5.0, 0.0, 0.0),
                Point3::new(6.0, 0.0, 0.0),
                Point3::new(5.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 3.0),
                Point3::new(1.0, 0.0, 3.0),
                Point3::new(0.0, 1.0, 3.0),
            ],
            vec![Vector3::z(); 6],
            vec![vec![0, 1, 2], vec![3, 4, 5]],
        )
        .unwrap()
    }

    /// Grid of `k` separate quads laid along x, listed in scrambled order.
    fn scattered_quads(k: usize) -> PolyMesh {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for i in 0..k {
            let x = ((i * 7) % k) as f64 * 3.0;
            let y = ((i * 3) % k) as f64;
            let base = vertices.len();
            vertices.push(Point3::new(x, y, 0.0));
            vertices.push(Point3::new(x + 1.0, y, 0.0));
            vertices.push(Point3::new(x + 1.0, y + 1.0, 0.0));
            vertices.push(Point3::new(x, y + 1.0, 0.0));
            faces.push(vec![base, base + 1, base + 2, base + 3]);
        }
        PolyMesh::new(vertices, Vec::new(), faces).unwrap()
    }

    fn mean(mesh: &PolyMesh) -> Point3<f64> {
        let all: Vec<usize> = (0..mesh.num_vertices()).collect();
        centroid(mesh, &all).unwrap()
    }

    #[test]
    fn test_two_triangles() {
        let mesh = two_triangles();
        let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();

        assert_eq!(parts.len(), 2);
        for part in &parts {
            assert_eq!(part.num_vertices(), 3);
            assert_eq!(part.num_normals(), 3);
            assert_eq!(part.faces(), &[vec![0, 1, 2]]);
        }
        // The triangle at x = 0 comes first
        assert!((parts[0].position(0) - Point3::new(0.0, 0.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn test_parsed_mesh_with_extra_normals() {
        // Face-corner normals: more `vn` lines than vertices
        let mut text = String::from("v 0 0 0\nv 1 0 0\nv 0 1 0\nv 4 0 0\nv 5 0 0\nv 4 1 0\n");
        for i in 0..12 {
            text.push_str(&format!("vn 0 0 {}\n", i + 1));
        }
        text.push_str("f 4//7 5//8 6//9\nf 1//1 2//2 3//3\n");

        let mesh = crate::io::obj::read(text.as_bytes()).unwrap();
        assert_eq!(mesh.num_vertices(), 6);
        assert_eq!(mesh.num_normals(), 12);

        let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();
        assert_eq!(parts.len(), 2);
        for part in &parts {
            assert_eq!(part.num_vertices(), 3);
            assert_eq!(part.num_normals(), 3);
        }
        assert_eq!(parts[0].normals()[2], Vector3::new(0.0, 0.0, 3.0));
        assert_eq!(parts[1].normals()[0], Vector3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_sorting_axis() {
        let mesh = two_triangles();
        let parts =
            connected_components(&mesh, &ComponentOptions::default().with_axis(Axis::Z)).unwrap();
        // The triangle at z = 0 comes first
        assert!((parts[0].position(0) - Point3::new(5.0, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ordering_property() {
        let mesh = scattered_quads(9);
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let parts =
                connected_components(&mesh, &ComponentOptions::default().with_axis(axis)).unwrap();
            assert_eq!(parts.len(), 9);
            for pair in parts.windows(2) {
                assert!(mean(&pair[0])[axis.index()] <= mean(&pair[1])[axis.index()]);
            }
        }
    }

    #[test]
    fn test_partition_property() {
        let mesh = scattered_quads(6);
        let components = component_indices(&mesh, Axis::Y).unwrap();

        let mut seen: Vec<usize> = components.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..mesh.num_vertices()).collect::<Vec<_>>());
    }

    #[test]
    fn test_components_not_decomposable() {
        let mesh = scattered_quads(5);
        let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();
        for part in &parts {
            let graph = AdjacencyGraph::new(part).unwrap();
            assert_eq!(graph.connected_components().len(), 1);
        }
    }

    #[test]
    fn test_equal_centroids_keep_discovery_order() {
        // Two segments with the same centroid x, discovered 0-1 first
        let mesh = PolyMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 5.0, 0.0),
                Point3::new(2.0, 5.0, 0.0),
            ],
            Vec::new(),
            vec![vec![0, 1], vec![2, 3]],
        )
        .unwrap();
        let components = component_indices(&mesh, Axis::X).unwrap();
        assert_eq!(components, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_isolated_vertices() {
        let mesh = PolyMesh::new(
            vec![
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
            ],
            Vec::new(),
            Vec::new(),
        )
        .unwrap();
        let parts = connected_components(&mesh, &ComponentOptions::default()).unwrap();
        assert_eq!(parts.len(), 3);
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.num_vertices(), 1);
            assert_eq!(part.num_faces(), 0);
            assert!((part.position(0).x - i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_mesh() {
        let parts = connected_components(&PolyMesh::empty(), &ComponentOptions::default()).unwrap();
        assert!(parts.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mesh = scattered_quads(16);
        let parallel = connected_components(&mesh, &ComponentOptions::default()).unwrap();
        let sequential =
            connected_components(&mesh, &ComponentOptions::default().sequential()).unwrap();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_invalid_face_index() {
        let mesh = PolyMesh::from_parts_unchecked(
            vec![Point3::origin(); 2],
            Vec::new(),
            vec![vec![0, 2]],
        );
        assert!(matches!(
            connected_components(&mesh, &ComponentOptions::default()),
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 2 })
        ));
    }
}
