//! Indexed polygon mesh.
//!
//! [`PolyMesh`] stores three parallel sequences: vertex positions, optional
//! per-vertex normals, and polygonal faces given as ordered lists of vertex
//! indices. Faces may have any number of vertices. Consecutive entries of a
//! face are adjacent; the face is not implicitly closed.

use std::fmt;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};

/// A polygonal face: an ordered list of 0-based vertex indices.
pub type Face = Vec<usize>;

/// A coordinate axis, used to order mesh parts spatially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// The x axis (component 0).
    #[default]
    X,
    /// The y axis (component 1).
    Y,
    /// The z axis (component 2).
    Z,
}

impl Axis {
    /// Component index of this axis in a 3-vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = MeshError;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(MeshError::invalid_param("axis", value, "must be 0, 1 or 2")),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// An indexed polygon mesh with optional per-vertex normals.
///
/// Normal `i` belongs to vertex `i`, but the two lists may differ in length:
/// normals can be absent, shorter or longer than the vertex list. Only the
/// normals of vertices that are actually used need to exist.
///
/// A mesh built with [`PolyMesh::new`] has valid face indices. Meshes read
/// from files are built best-effort with [`PolyMesh::from_parts_unchecked`]
/// and may not; call [`PolyMesh::validate`] to find out. Every algorithm in
/// this crate checks what it relies on and reports violations as errors.
///
/// # Example
///
/// ```
/// use meshparts::mesh::PolyMesh;
/// use nalgebra::Point3;
///
/// let mesh = PolyMesh::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 0.0, 0.0),
///         Point3::new(0.0, 1.0, 0.0),
///     ],
///     Vec::new(),
///     vec![vec![0, 1, 2]],
/// )
/// .unwrap();
///
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.num_faces(), 1);
/// assert!(!mesh.has_normals());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyMesh {
    vertices: Vec<Point3<f64>>,
    normals: Vec<Vector3<f64>>,
    faces: Vec<Face>,
}

impl PolyMesh {
    /// Create an empty mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mesh from its parts, checking the face indices.
    pub fn new(
        vertices: Vec<Point3<f64>>,
        normals: Vec<Vector3<f64>>,
        faces: Vec<Face>,
    ) -> Result<Self> {
        let mesh = Self::from_parts_unchecked(vertices, normals, faces);
        mesh.validate()?;
        Ok(mesh)
    }

    /// Create a mesh from its parts without any checks.
    pub fn from_parts_unchecked(
        vertices: Vec<Point3<f64>>,
        normals: Vec<Vector3<f64>>,
        faces: Vec<Face>,
    ) -> Self {
        Self {
            vertices,
            normals,
            faces,
        }
    }

    /// Check that every face references existing vertices.
    pub fn validate(&self) -> Result<()> {
        let n = self.vertices.len();
        for (fi, face) in self.faces.iter().enumerate() {
            if let Some(&vi) = face.iter().find(|&&vi| vi >= n) {
                return Err(MeshError::InvalidVertexIndex { face: fi, vertex: vi });
            }
        }
        Ok(())
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of normals.
    #[inline]
    pub fn num_normals(&self) -> usize {
        self.normals.len()
    }

    /// Number of faces.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Whether the mesh carries normals.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Whether the mesh has no vertices and no faces.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Vertex normals (empty when the mesh has none).
    #[inline]
    pub fn normals(&self) -> &[Vector3<f64>] {
        &self.normals
    }

    /// Faces as lists of vertex indices.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Position of a vertex.
    ///
    /// # Panics
    /// Panics if `v` is out of range.
    #[inline]
    pub fn position(&self, v: usize) -> Point3<f64> {
        self.vertices[v]
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        }))
    }

    /// Consume the mesh and return `(vertices, normals, faces)`.
    pub fn into_parts(self) -> (Vec<Point3<f64>>, Vec<Vector3<f64>>, Vec<Face>) {
        (self.vertices, self.normals, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> PolyMesh {
        PolyMesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Vector3::z(); 3],
            vec![vec![0, 1, 2]],
        )
        .unwrap()
    }

    #[test]
    fn test_counts() {
        let mesh = single_triangle();
        assert_eq!(mesh.num_vertices(), 3);
        assert_eq!(mesh.num_normals(), 3);
        assert_eq!(mesh.num_faces(), 1);
        assert!(mesh.has_normals());
        assert!(!mesh.is_empty());
        assert!(PolyMesh::empty().is_empty());
    }

    #[test]
    fn test_invalid_vertex_index() {
        let result = PolyMesh::new(
            vec![Point3::origin()],
            Vec::new(),
            vec![vec![0, 1, 2]],
        );
        assert!(matches!(
            result,
            Err(MeshError::InvalidVertexIndex { face: 0, vertex: 1 })
        ));
    }

    #[test]
    fn test_normal_count_may_differ() {
        let vertices = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];

        let fewer = PolyMesh::new(vertices.clone(), vec![Vector3::z()], vec![vec![0, 1]]).unwrap();
        assert_eq!(fewer.num_normals(), 1);

        let more = PolyMesh::new(vertices, vec![Vector3::z(); 4], vec![vec![0, 1]]).unwrap();
        assert_eq!(more.num_normals(), 4);
        assert!(more.validate().is_ok());
    }

    #[test]
    fn test_unchecked_then_validate() {
        let mesh = PolyMesh::from_parts_unchecked(Vec::new(), Vec::new(), vec![vec![0, 1]]);
        assert_eq!(mesh.num_faces(), 1);
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn test_bounding_box() {
        let mesh = single_triangle();
        let (min, max) = mesh.bounding_box().unwrap();
        assert!((min - Point3::new(0.0, 0.0, 0.0)).norm() < 1e-10);
        assert!((max - Point3::new(1.0, 1.0, 0.0)).norm() < 1e-10);
        assert!(PolyMesh::empty().bounding_box().is_none());
    }

    #[test]
    fn test_axis() {
        assert_eq!(Axis::default(), Axis::X);
        assert_eq!(Axis::try_from(2).unwrap(), Axis::Z);
        assert_eq!(Axis::Y.index(), 1);
        assert!(Axis::try_from(3).is_err());
        assert_eq!(Axis::Z.to_string(), "z");
    }
}
