//! Vertex selections: centroids, sub-mesh extraction and mesh fusion.
//!
//! # Slicing policy
//!
//! [`slice`] keeps a face as soon as **any** of its vertices is selected and
//! keeps that face whole. It does not clip faces to the selection. A face that
//! touches the selection but also references an unselected vertex cannot be
//! renumbered, so `slice` rejects it with [`MeshError::OpenSelection`].
//! Selections must therefore be closed: every face touching a selected vertex
//! has all its vertices selected. Connected components are always closed in
//! this sense, which is what [`connected_components`] relies on.
//!
//! [`connected_components`]: crate::algo::components::connected_components

use std::collections::HashMap;

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, Result};
use crate::mesh::{Face, PolyMesh};

/// Arithmetic mean of the positions of the selected vertices.
///
/// # Errors
///
/// [`MeshError::EmptySelection`] for an empty selection and
/// [`MeshError::SelectionOutOfRange`] for an index outside the mesh.
///
/// # Example
///
/// ```
/// use meshparts::algo::select::centroid;
/// use meshparts::mesh::PolyMesh;
/// use nalgebra::Point3;
///
/// let mesh = PolyMesh::new(
///     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 0.0)],
///     Vec::new(),
///     Vec::new(),
/// )
/// .unwrap();
///
/// let c = centroid(&mesh, &[0, 1]).unwrap();
/// assert!((c - Point3::new(1.0, 2.0, 0.0)).norm() < 1e-12);
/// ```
pub fn centroid(mesh: &PolyMesh, selection: &[usize]) -> Result<Point3<f64>> {
    if selection.is_empty() {
        return Err(MeshError::EmptySelection);
    }
    check_range(mesh, selection)?;

    let sum = selection
        .iter()
        .fold(Vector3::zeros(), |acc, &v| acc + mesh.position(v).coords);

    Ok(Point3::from(sum / selection.len() as f64))
}

/// Extract the sub-mesh spanned by a closed vertex selection.
///
/// The i-th selected vertex becomes vertex i of the result, with its normal
/// when the mesh has normals. Every face that references at least one
/// selected vertex is copied and renumbered, in source face order. See the
/// [module documentation](self) for the closed-selection requirement.
///
/// # Errors
///
/// - [`MeshError::EmptySelection`] for an empty selection
/// - [`MeshError::SelectionOutOfRange`] for an index outside the mesh
/// - [`MeshError::DuplicateSelection`] if an index is listed twice
/// - [`MeshError::MissingNormal`] if the mesh has normals but a selected
///   vertex lies past the end of the normal list
/// - [`MeshError::OpenSelection`] if a kept face leaves the selection
///
/// # Example
///
/// ```
/// use meshparts::algo::select::slice;
/// use meshparts::mesh::PolyMesh;
/// use nalgebra::Point3;
///
/// let vertices = (0..6).map(|i| Point3::new(i as f64, 0.0, 0.0)).collect();
/// let mesh = PolyMesh::new(vertices, Vec::new(), vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
///
/// let part = slice(&mesh, &[5, 3, 4]).unwrap();
/// assert_eq!(part.num_vertices(), 3);
/// assert_eq!(part.faces(), &[vec![1, 2, 0]]);
/// ```
pub fn slice(mesh: &PolyMesh, selection: &[usize]) -> Result<PolyMesh> {
    if selection.is_empty() {
        return Err(MeshError::EmptySelection);
    }
    check_range(mesh, selection)?;

    let mut old_to_new: HashMap<usize, usize> = HashMap::with_capacity(selection.len());
    for (new, &old) in selection.iter().enumerate() {
        if old_to_new.insert(old, new).is_some() {
            return Err(MeshError::DuplicateSelection { vertex: old });
        }
    }

    let vertices: Vec<Point3<f64>> = selection.iter().map(|&v| mesh.position(v)).collect();
    let normals: Vec<Vector3<f64>> = if mesh.has_normals() {
        let num_normals = mesh.num_normals();
        selection
            .iter()
            .map(|&v| {
                mesh.normals()
                    .get(v)
                    .copied()
                    .ok_or(MeshError::MissingNormal { vertex: v, num_normals })
            })
            .collect::<Result<_>>()?
    } else {
        Vec::new()
    };

    let mut faces: Vec<Face> = Vec::new();
    for (fi, face) in mesh.faces().iter().enumerate() {
        if !face.iter().any(|v| old_to_new.contains_key(v)) {
            continue;
        }
        let remapped = face
            .iter()
            .map(|&v| {
                old_to_new
                    .get(&v)
                    .copied()
                    .ok_or(MeshError::OpenSelection { face: fi, vertex: v })
            })
            .collect::<Result<Face>>()?;
        faces.push(remapped);
    }

    Ok(PolyMesh::from_parts_unchecked(vertices, normals, faces))
}

/// Concatenate two meshes.
///
/// The vertices, normals and faces of `second` follow those of `first`; the
/// face indices of `second` are shifted by `first.num_vertices()`. Normal
/// lists are concatenated as they are, so when only one input has normals
/// the result carries that input's normals only.
///
/// Never fails; the `Result` keeps the signature in line with [`slice`].
///
/// # Example
///
/// ```
/// use meshparts::algo::select::fuse;
/// use meshparts::mesh::PolyMesh;
/// use nalgebra::Point3;
///
/// let tri = PolyMesh::new(
///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
///     Vec::new(),
///     vec![vec![0, 1, 2]],
/// )
/// .unwrap();
///
/// let both = fuse(&tri, &tri).unwrap();
/// assert_eq!(both.num_vertices(), 6);
/// assert_eq!(both.faces(), &[vec![0, 1, 2], vec![3, 4, 5]]);
/// ```
pub fn fuse(first: &PolyMesh, second: &PolyMesh) -> Result<PolyMesh> {
    let offset = first.num_vertices();

    let mut vertices = Vec::with_capacity(offset + second.num_vertices());
    vertices.extend_from_slice(first.vertices());
    vertices.extend_from_slice(second.vertices());

    let mut normals = Vec::with_capacity(first.num_normals() + second.num_normals());
    normals.extend_from_slice(first.normals());
    normals.extend_from_slice(second.normals());

    let mut faces: Vec<Face> = Vec::with_capacity(first.num_faces() + second.num_faces());
    faces.extend(first.faces().iter().cloned());
    faces.extend(
        second
            .faces()
            .iter()
            .map(|face| face.iter().map(|&v| v + offset).collect()),
    );

    Ok(PolyMesh::from_parts_unchecked(vertices, normals, faces))
}

fn check_range(mesh: &PolyMesh, selection: &[usize]) -> Result<()> {
    let n = mesh.num_vertices();
    match selection.iter().find(|&&v| v >= n) {
        Some(&vertex) => Err(MeshError::SelectionOutOfRange {
            vertex,
            num_vertices: n,
        }),
        None => Ok(()),
    }
}
