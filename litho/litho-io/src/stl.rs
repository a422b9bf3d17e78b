//! STL (Stereolithography) export.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```
//!
//! Triangles are written in mesh order with their own vertices, so the file
//! reproduces the emission order exactly.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use litho_types::{Point3, Triangle, TriangleMesh, Vector3};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Save a mesh to an STL file.
///
/// The mesh is written to a temporary file beside `path`, which replaces
/// `path` only once every triangle is on disk. On failure an existing file at
/// `path` is left untouched.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, save as ASCII
///
/// # Errors
///
/// Returns an error if the file cannot be written or the mesh has more
/// triangles than a binary STL can hold.
pub fn save_stl<P: AsRef<Path>>(mesh: &TriangleMesh, path: P, binary: bool) -> IoResult<()> {
    let path = path.as_ref();
    info!(
        "Saving {} triangles to {} ({})",
        mesh.len(),
        path.display(),
        if binary { "binary" } else { "ascii" }
    );

    write_replacing(path, |writer| {
        if binary {
            write_stl_binary(mesh, writer)
        } else {
            write_stl_ascii(mesh, writer)
        }
    })
}

/// Run `write` against a temporary file in the directory of `path`, then
/// move it over `path`.
fn write_replacing<F>(path: &Path, write: F) -> IoResult<()>
where
    F: FnOnce(&mut dyn Write) -> IoResult<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }
    temp.persist(path).map_err(|e| IoError::Io(e.error))?;
    Ok(())
}

/// Write a mesh as binary STL.
///
/// # Errors
///
/// Returns [`IoError::TooManyTriangles`] if the count exceeds `u32::MAX`, or
/// an I/O error from `writer`.
pub fn write_stl_binary<W: Write>(mesh: &TriangleMesh, mut writer: W) -> IoResult<()> {
    let face_count =
        u32::try_from(mesh.len()).map_err(|_| IoError::TooManyTriangles(mesh.len()))?;

    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by litho-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;
    writer.write_all(&face_count.to_le_bytes())?;

    for tri in mesh {
        let n = facet_normal(tri);
        write_vec_binary(&mut writer, n.x, n.y, n.z)?;
        for v in tri.vertices() {
            write_vec_binary(&mut writer, v.x, v.y, v.z)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a mesh as ASCII STL.
///
/// # Errors
///
/// Returns an I/O error from `writer`.
pub fn write_stl_ascii<W: Write>(mesh: &TriangleMesh, mut writer: W) -> IoResult<()> {
    writeln!(writer, "solid lithophane")?;

    for tri in mesh {
        let n = facet_normal(tri);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in tri.vertices() {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid lithophane")?;
    Ok(())
}

/// Load a binary STL file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is truncated.
pub fn load_stl_binary<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    read_stl_binary(BufReader::new(file))
}

/// Read a binary STL stream.
///
/// Stored normals are ignored; vertices are widened to `f64`.
///
/// # Errors
///
/// Returns [`IoError::InvalidHeader`] for a stream shorter than the header
/// and [`IoError::InvalidFaceCount`] if it ends before all triangles.
pub fn read_stl_binary<R: Read>(mut reader: R) -> IoResult<TriangleMesh> {
    let mut header = [0u8; HEADER_SIZE + 4];
    let got = read_full(&mut reader, &mut header)?;
    if got < header.len() {
        return Err(IoError::InvalidHeader {
            expected: header.len(),
            got,
        });
    }

    let face_count = u32::from_le_bytes([
        header[HEADER_SIZE],
        header[HEADER_SIZE + 1],
        header[HEADER_SIZE + 2],
        header[HEADER_SIZE + 3],
    ]);

    let mut mesh = TriangleMesh::with_capacity(face_count as usize);
    let mut buf = [0u8; TRIANGLE_SIZE];
    for i in 0..face_count {
        if read_full(&mut reader, &mut buf)? < TRIANGLE_SIZE {
            return Err(IoError::InvalidFaceCount {
                expected: face_count,
                got: i,
            });
        }
        mesh.push(Triangle::new(
            read_point(&buf[12..24]),
            read_point(&buf[24..36]),
            read_point(&buf[36..48]),
        ));
    }

    Ok(mesh)
}

/// Read until `buf` is full or the stream ends, returning bytes read.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> IoResult<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Read a point from 12 bytes (3 f32s).
fn read_point(buf: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

fn facet_normal(tri: &Triangle) -> Vector3<f64> {
    tri.normal().unwrap_or_else(Vector3::zeros)
}

/// Write 3 f32s in little-endian.
fn write_vec_binary<W: Write>(writer: &mut W, x: f64, y: f64, z: f64) -> IoResult<()> {
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: STL stores f32
    {
        writer.write_all(&(x as f32).to_le_bytes())?;
        writer.write_all(&(y as f32).to_le_bytes())?;
        writer.write_all(&(z as f32).to_le_bytes())?;
    }
    Ok(())
}
