//! Vertex adjacency graph induced by face connectivity.
//!
//! Each face contributes an undirected edge between every pair of consecutive
//! vertices in its index list. The last and first vertex of a face are not
//! joined unless the face lists that pair explicitly. An edge shared by several
//! faces is recorded once per face, so adjacency lists may hold duplicates.

use std::cell::OnceCell;

use super::polymesh::PolyMesh;
use crate::error::{MeshError, Result};

/// Undirected vertex graph of a [`PolyMesh`].
///
/// The graph is immutable once built. Its connected components are computed
/// on the first call to [`connected_components`](Self::connected_components)
/// and the same result is returned on every later call.
///
/// # Example
///
/// ```
/// use meshparts::mesh::{AdjacencyGraph, PolyMesh};
/// use nalgebra::Point3;
///
/// let vertices = (0..6).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
/// let mesh = PolyMesh::new(vertices, Vec::new(), vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
///
/// let graph = AdjacencyGraph::new(&mesh).unwrap();
/// assert_eq!(graph.connected_components(), &[vec![0, 1, 2], vec![3, 4, 5]]);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<usize>>,
    components: OnceCell<Vec<Vec<usize>>>,
}

impl AdjacencyGraph {
    /// Build the graph of a mesh.
    ///
    /// Returns [`MeshError::InvalidVertexIndex`] if a face references a vertex
    /// outside the mesh.
    pub fn new(mesh: &PolyMesh) -> Result<Self> {
        let n = mesh.num_vertices();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];

        for (fi, face) in mesh.faces().iter().enumerate() {
            if let Some(&vi) = face.iter().find(|&&vi| vi >= n) {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
            for pair in face.windows(2) {
                let (v0, v1) = (pair[0], pair[1]);
                adjacency[v0].push(v1);
                adjacency[v1].push(v0);
            }
        }

        log::debug!(
            "built adjacency graph: {} vertices, {} faces",
            n,
            mesh.num_faces()
        );

        Ok(Self {
            adjacency,
            components: OnceCell::new(),
        })
    }

    /// Number of vertices in the graph.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Neighbours of `v` in edge insertion order (duplicates included).
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Number of recorded edge endpoints at `v`.
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Connected components of the graph.
    ///
    /// Components are ordered by their lowest vertex index. Inside a component,
    /// vertices appear in depth-first visitation order, following neighbours in
    /// insertion order. A vertex without edges forms its own component.
    pub fn connected_components(&self) -> &[Vec<usize>] {
        self.components.get_or_init(|| self.compute_components())
    }

    fn compute_components(&self) -> Vec<Vec<usize>> {
        let n = self.num_vertices();
        let mut visited = vec![false; n];
        let mut components = Vec::new();
        // (vertex, position of the next neighbour to examine)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }

            let mut component = vec![start];
            visited[start] = true;
            stack.push((start, 0));

            while let Some(frame) = stack.last_mut() {
                let (v, next) = *frame;
                let neighbors = &self.adjacency[v];

                match neighbors[next..].iter().position(|&u| !visited[u]) {
                    Some(offset) => {
                        let u = neighbors[next + offset];
                        frame.1 = next + offset + 1;
                        visited[u] = true;
                        component.push(u);
                        stack.push((u, 0));
                    }
                    None => {
                        stack.pop();
                    }
                }
            }

            components.push(component);
        }

        log::debug!("found {} connected components", components.len());
        components
    }
}
