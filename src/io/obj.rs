//! Wavefront OBJ format support.
//!
//! Only the geometric subset is handled:
//!
//! - `v x y z` appends a vertex position
//! - `vn x y z` appends a vertex normal
//! - `f i j k ...` appends a polygon of any size
//!
//! Face tokens may carry `/`-separated sub-fields (`v/vt/vn`); only the first
//! one is read. Indices are 1-based in the file and 0-based in memory.
//! Comments (`#`), blank lines and every other statement are skipped.
//!
//! Reading is best-effort: a number is read from the longest numeric prefix of
//! its token (`1.5abc` reads as `1.5`), a token without one reads as zero, and
//! a missing or malformed face index (or `0`) wraps to an out-of-range index that
//! [`PolyMesh::validate`] and the algorithms report as
//! [`MeshError::InvalidVertexIndex`](crate::error::MeshError::InvalidVertexIndex).
//!
//! Coordinates are written with 18 fixed decimal places. Faces are written as
//! `f a//a b//b ...`, reusing each vertex index as its normal index.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use nalgebra::{Point3, Vector3};

use crate::error::Result;
use crate::mesh::{Face, PolyMesh};

/// Load a mesh from an OBJ file.
///
/// # Example
///
/// ```no_run
/// use meshparts::io::obj;
///
/// let mesh = obj::load("model.obj").unwrap();
/// println!("{} vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<PolyMesh> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mesh = read(BufReader::new(file))?;

    log::debug!(
        "loaded {}: {} vertices, {} normals, {} faces",
        path.display(),
        mesh.num_vertices(),
        mesh.num_normals(),
        mesh.num_faces()
    );
    Ok(mesh)
}

/// Read a mesh from OBJ text.
///
/// # Example
///
/// ```
/// use meshparts::io::obj;
///
/// let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let mesh = obj::read(text.as_bytes()).unwrap();
/// assert_eq!(mesh.num_vertices(), 3);
/// assert_eq!(mesh.faces(), &[vec![0, 1, 2]]);
/// ```
pub fn read<R: BufRead>(reader: R) -> Result<PolyMesh> {
    let mut vertices: Vec<Point3<f64>> = Vec::new();
    let mut normals: Vec<Vector3<f64>> = Vec::new();
    let mut faces: Vec<Face> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = tokenize(line, ' ');
        match tokens.next() {
            Some("v") => {
                let [x, y, z] = read_triple(tokens);
                vertices.push(Point3::new(x, y, z));
            }
            Some("vn") => {
                let [x, y, z] = read_triple(tokens);
                normals.push(Vector3::new(x, y, z));
            }
            Some("f") => {
                let face = tokens.map(read_face_index).collect();
                faces.push(face);
            }
            _ => {}
        }
    }

    Ok(PolyMesh::from_parts_unchecked(vertices, normals, faces))
}

/// Save a mesh to an OBJ file.
///
/// # Example
///
/// ```no_run
/// use meshparts::io::obj;
/// use meshparts::mesh::PolyMesh;
///
/// obj::save(&PolyMesh::empty(), "output.obj").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write(mesh, BufWriter::new(file))?;

    log::debug!("saved {}", path.display());
    Ok(())
}

/// Write a mesh as OBJ text.
pub fn write<W: Write>(mesh: &PolyMesh, mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "# Vertices: {}, Normals: {} Faces: {}",
        mesh.num_vertices(),
        mesh.num_normals(),
        mesh.num_faces()
    )?;

    for v in mesh.vertices() {
        writeln!(writer, "v {:.18} {:.18} {:.18}", v.x, v.y, v.z)?;
    }

    for n in mesh.normals() {
        writeln!(writer, "vn {:.18} {:.18} {:.18}", n.x, n.y, n.z)?;
    }

    for face in mesh.faces() {
        write!(writer, "f")?;
        for &v in face {
            let index = v.wrapping_add(1);
            write!(writer, " {}//{}", index, index)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

/// Split on a single separator character, dropping empty tokens.
fn tokenize(s: &str, separator: char) -> impl Iterator<Item = &str> {
    s.split(separator).filter(|t| !t.is_empty())
}

/// Parse the longest prefix of a token that is a valid `T`, or the type's
/// default when no prefix is (`"1.5abc"` reads as `1.5`, `"abc"` as `0`).
fn parse_or_default<T: FromStr + Default>(token: &str) -> T {
    let token = token.trim();
    token
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| token[..end].parse().ok())
        .unwrap_or_default()
}

fn read_triple<'a>(mut tokens: impl Iterator<Item = &'a str>) -> [f64; 3] {
    let mut next = || tokens.next().map(parse_or_default::<f64>).unwrap_or_default();
    [next(), next(), next()]
}

/// First `/` sub-field of a face token, converted from 1-based to 0-based.
fn read_face_index(token: &str) -> usize {
    let vertex = token.split('/').next().unwrap_or_default();
    parse_or_default::<usize>(vertex).wrapping_sub(1)
}
