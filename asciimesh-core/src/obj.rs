/// Wavefront OBJ loading and saving (positions and triangular faces only)
use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{char, i64 as index, space1},
    combinator::opt,
    multi::many1,
    number::complete::float,
    sequence::preceded,
    IResult,
};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{MeshError, Result};
use crate::geometry::{Face, Mesh, Vertex};

/// Load a mesh from an OBJ file on disk
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| MeshError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Names and comments may be in any encoding; only ASCII records are read
    let text = String::from_utf8_lossy(&bytes);
    let mesh = parse_obj(&text)?;
    info!(
        path = %path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded mesh"
    );
    Ok(mesh)
}

/// Save a mesh to disk in the same line format `load_obj` reads
pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| MeshError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    info!(path = %path.display(), "saved mesh");
    Ok(())
}

/// Write `v` records followed by `f` records with 1-based indices
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> io::Result<()> {
    for v in mesh.vertices() {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for face in mesh.faces() {
        let [a, b, c] = face.indices;
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Parse OBJ text into a validated, non-empty mesh.
///
/// Malformed face records are skipped with a warning. Malformed vertex
/// records fail the parse, since dropping one would shift every later index.
pub fn parse_obj(input: &str) -> Result<Mesh> {
    let mut vertices: Vec<Vertex> = Vec::new();
    // Source line, then resolved 0-based indices paired with the references as written
    let mut triangles: Vec<(usize, [(i64, i64); 3])> = Vec::new();

    for (line_idx, raw) in input.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = raw.trim();

        match line.split_whitespace().next() {
            Some("v") => match vertex_record(line) {
                Ok((_, vertex)) => vertices.push(vertex),
                Err(_) => {
                    return Err(MeshError::Parse {
                        line: line_no,
                        message: format!("malformed vertex record: {line}"),
                    });
                }
            },
            Some("f") => match face_record(line) {
                Ok(("", refs)) if refs.len() >= 3 => {
                    if refs.len() > 3 {
                        debug!(line = line_no, corners = refs.len(), "triangulating polygon face");
                    }
                    let resolved: Vec<(i64, i64)> = refs
                        .iter()
                        .map(|&r| (resolve_index(r, vertices.len()), r))
                        .collect();
                    for i in 1..resolved.len() - 1 {
                        triangles.push((line_no, [resolved[0], resolved[i], resolved[i + 1]]));
                    }
                }
                _ => warn!(line = line_no, record = line, "unsupported face format, skipping"),
            },
            _ => {}
        }
    }

    if vertices.is_empty() || triangles.is_empty() {
        return Err(MeshError::Empty);
    }

    let vertex_count = vertices.len();
    let mut faces = Vec::with_capacity(triangles.len());
    for &(line, corners) in &triangles {
        let mut indices = [0usize; 3];
        for (slot, &(resolved, written)) in indices.iter_mut().zip(corners.iter()) {
            *slot = usize::try_from(resolved)
                .ok()
                .filter(|&i| i < vertex_count)
                .ok_or(MeshError::FaceReferenceOutOfRange {
                    line,
                    index: written,
                    vertex_count,
                })?;
        }
        faces.push(Face { indices });
    }

    Mesh::new(vertices, faces)
}

/// Convert a file reference to a 0-based index. Positive references are
/// 1-based, negative ones count back from the most recent vertex, and zero
/// is never valid.
fn resolve_index(reference: i64, vertices_so_far: usize) -> i64 {
    match reference {
        r if r > 0 => r - 1,
        r if r < 0 => vertices_so_far as i64 + r,
        _ => -1,
    }
}

fn vertex_record(input: &str) -> IResult<&str, Vertex> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, float)(input)?;
    let (input, y) = preceded(space1, float)(input)?;
    let (input, z) = preceded(space1, float)(input)?;
    Ok((input, Vertex::new(x, y, z)))
}

/// `f` followed by references such as `3`, `3/1` or `3/1/2`; only the
/// leading vertex index of each reference is kept
fn face_record(input: &str) -> IResult<&str, Vec<i64>> {
    let (input, _) = tag("f")(input)?;
    many1(preceded(space1, face_ref))(input)
}

fn face_ref(input: &str) -> IResult<&str, i64> {
    let (input, vertex) = index(input)?;
    let (input, _) = opt(preceded(char('/'), take_till(|c: char| c.is_whitespace())))(input)?;
    Ok((input, vertex))
}
