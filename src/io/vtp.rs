//! VTK XML PolyData (`.vtp`) export.
//!
//! Meshes are written as a single ASCII `<Piece>` with:
//!
//! - per-point normals in `<PointData>` (only when the mesh has normals)
//! - vertex positions in `<Points>`
//! - faces in `<Polys>`, as a flat 0-based `connectivity` array followed by
//!   `offsets`, the running sum of face sizes
//!
//! The format is write-only here; there is no `.vtp` reader.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::mesh::PolyMesh;

/// Save a mesh to a `.vtp` file.
///
/// # Example
///
/// ```no_run
/// use meshparts::io::vtp;
/// use meshparts::mesh::PolyMesh;
///
/// vtp::save(&PolyMesh::empty(), "output.vtp").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &PolyMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write(mesh, BufWriter::new(file))?;

    log::debug!("saved {}", path.display());
    Ok(())
}

/// Write a mesh as VTK XML PolyData.
pub fn write<W: Write>(mesh: &PolyMesh, mut writer: W) -> Result<()> {
    writeln!(writer, "<?xml version=\"1.0\"?>")?;
    writeln!(
        writer,
        "<VTKFile type=\"PolyData\" version=\"0.1\" byte_order=\"LittleEndian\">"
    )?;
    writeln!(writer, "<PolyData>")?;
    writeln!(
        writer,
        "<Piece NumberOfPoints=\"{}\" NumberOfVerts=\"0\" NumberOfLines=\"0\" NumberOfStrips=\"0\" NumberOfPolys=\"{}\">",
        mesh.num_vertices(),
        mesh.num_faces()
    )?;

    if mesh.has_normals() {
        writeln!(writer, "<PointData Normals=\"Normals\">")?;
        writeln!(
            writer,
            "<DataArray type=\"Float64\" Name=\"Normals\" NumberOfComponents=\"3\" format=\"ascii\">"
        )?;
        for n in mesh.normals() {
            writeln!(writer, "{:.18} {:.18} {:.18}", n.x, n.y, n.z)?;
        }
        writeln!(writer, "</DataArray>")?;
        writeln!(writer, "</PointData>")?;
    }

    writeln!(writer, "<Points>")?;
    writeln!(
        writer,
        "<DataArray type=\"Float64\" Name=\"Points\" NumberOfComponents=\"3\" format=\"ascii\">"
    )?;
    for v in mesh.vertices() {
        writeln!(writer, "{:.18} {:.18} {:.18}", v.x, v.y, v.z)?;
    }
    writeln!(writer, "</DataArray>")?;
    writeln!(writer, "</Points>")?;

    writeln!(writer, "<Polys>")?;
    writeln!(
        writer,
        "<DataArray type=\"Int64\" Name=\"connectivity\" format=\"ascii\">"
    )?;
    for face in mesh.faces() {
        let line: Vec<String> = face.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writeln!(writer, "</DataArray>")?;
    writeln!(
        writer,
        "<DataArray type=\"Int64\" Name=\"offsets\" format=\"ascii\">"
    )?;
    let offsets: Vec<String> = face_offsets(mesh).map(|o| o.to_string()).collect();
    writeln!(writer, "{}", offsets.join(" "))?;
    writeln!(writer, "</DataArray>")?;
    writeln!(writer, "</Polys>")?;

    writeln!(writer, "</Piece>")?;
    writeln!(writer, "</PolyData>")?;
    writeln!(writer, "</VTKFile>")?;

    writer.flush()?;
    Ok(())
}

/// End offset of each face in the flattened connectivity array.
fn face_offsets(mesh: &PolyMesh) -> impl Iterator<Item = usize> + '_ {
    mesh.faces().iter().scan(0, |offset, face| {
        *offset += face.len();
        Some(*offset)
    })
}
