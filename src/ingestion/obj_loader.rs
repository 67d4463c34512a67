use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ShellwrapError};
use crate::geometry::{self, Vector3};
use crate::types::{Corner, Mesh};

/// Cumulative attribute counts of the completed sub-objects. OBJ face
/// indices are global across the file; mesh indices are local, so every
/// face token is shifted down by the totals of the preceding sub-objects.
#[derive(Debug, Clone, Copy, Default)]
struct AttributeOffsets {
    vertices: u32,
    texcoords: u32,
    normals: u32,
}

impl AttributeOffsets {
    fn absorb(&mut self, mesh: &Mesh) {
        self.vertices += mesh.vertex_count() as u32;
        self.texcoords += mesh.texcoords().len() as u32;
        self.normals += mesh.normals().len() as u32;
    }
}

/// Load every sub-object of a Wavefront OBJ file as a separate [`Mesh`].
pub fn load_obj(path: &Path) -> Result<Vec<Mesh>> {
    let content = fs::read_to_string(path)
        .map_err(|e| ShellwrapError::Input(format!("Failed to read {}: {e}", path.display())))?;
    let meshes = parse_obj(&content)?;
    debug!(path = %path.display(), meshes = meshes.len(), "Loaded OBJ");
    Ok(meshes)
}

/// Parse OBJ text into one mesh per `o` sub-object, dropping empty ones.
pub fn parse_obj(content: &str) -> Result<Vec<Mesh>> {
    let mut meshes = Vec::new();
    let mut current = Mesh::default();
    let mut offsets = AttributeOffsets::default();

    for (line_no, line) in content.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => current.add_vertex(parse_vec3(tokens, line_no)?),
            "vn" => current.add_normal(parse_vec3(tokens, line_no)?),
            "vt" => current.add_texcoord(parse_vec3(tokens, line_no)?),
            "f" => handle_face(&mut current, tokens, offsets, line_no)?,
            "o" => {
                if !current.is_empty() {
                    offsets.absorb(&current);
                    meshes.push(std::mem::take(&mut current));
                }
            }
            // Comments, material and smoothing statements are not geometry.
            _ => {}
        }
    }

    if !current.is_empty() {
        meshes.push(current);
    }
    Ok(meshes)
}

/// Read up to three numeric components; missing ones default to zero, so
/// two-component `vt` lines parse as well.
fn parse_vec3<'a>(
    tokens: impl Iterator<Item = &'a str>,
    line_no: usize,
) -> Result<Vector3<f32>> {
    let mut components = [0.0_f32; 3];
    for (slot, token) in components.iter_mut().zip(tokens) {
        *slot = token.parse().map_err(|_| {
            ShellwrapError::Input(format!(
                "line {}: invalid numeric component '{token}'",
                line_no + 1
            ))
        })?;
    }
    Ok(Vector3::new(components[0], components[1], components[2]))
}

/// Parse one face statement: corner tokens, fan triangulation, and flat
/// normal synthesis for faces that omit normal indices.
fn handle_face<'a>(
    mesh: &mut Mesh,
    tokens: impl Iterator<Item = &'a str>,
    offsets: AttributeOffsets,
    line_no: usize,
) -> Result<()> {
    let mut corners = Vec::new();
    for token in tokens {
        let corner = parse_corner(token, offsets, line_no)?;
        validate_corner(mesh, corner, token, line_no)?;
        corners.push(corner);
    }
    if corners.len() < 3 {
        return Err(ShellwrapError::Input(format!(
            "line {}: face needs at least three corners",
            line_no + 1
        )));
    }

    // A face that omits normals gets one flat normal for its whole fan,
    // computed from the first three corners.
    if corners.iter().any(|c| c.normal.is_none()) {
        let normal = geometry::face_normal(
            mesh.vertex(corners[0].vertex),
            mesh.vertex(corners[1].vertex),
            mesh.vertex(corners[2].vertex),
        );
        let index = mesh.normals().len() as u32;
        mesh.add_normal(normal);
        for corner in &mut corners {
            if corner.normal.is_none() {
                corner.normal = Some(index);
            }
        }
    }

    for i in 2..corners.len() {
        mesh.add_corner(corners[0]);
        mesh.add_corner(corners[i - 1]);
        mesh.add_corner(corners[i]);
    }
    Ok(())
}

/// Parse one `v`, `v/t`, `v//n`, or `v/t/n` face token into a [`Corner`],
/// converting the 1-based global OBJ indices to 0-based mesh-local ones.
fn parse_corner(token: &str, offsets: AttributeOffsets, line_no: usize) -> Result<Corner> {
    let mut fields = token.split('/');
    let vertex = parse_index(fields.next(), offsets.vertices, token, line_no)?
        .ok_or_else(|| malformed_corner(token, line_no))?;
    let texture = parse_index(fields.next(), offsets.texcoords, token, line_no)?;
    let normal = parse_index(fields.next(), offsets.normals, token, line_no)?;
    if fields.next().is_some() {
        return Err(malformed_corner(token, line_no));
    }
    Ok(Corner::new(vertex, texture, normal))
}

/// One index field: 1-based global to 0-based local. Absent or empty fields
/// are `None`; an index that lands before the current sub-object is
/// malformed.
fn parse_index(
    field: Option<&str>,
    offset: u32,
    token: &str,
    line_no: usize,
) -> Result<Option<u32>> {
    let Some(field) = field else {
        return Ok(None);
    };
    if field.is_empty() {
        return Ok(None);
    }
    let global: u32 = field
        .parse()
        .map_err(|_| malformed_corner(token, line_no))?;
    global
        .checked_sub(1)
        .and_then(|i| i.checked_sub(offset))
        .map(Some)
        .ok_or_else(|| malformed_corner(token, line_no))
}

/// A corner must reference attributes the current sub-object has already
/// declared.
fn validate_corner(mesh: &Mesh, corner: Corner, token: &str, line_no: usize) -> Result<()> {
    let vertex_ok = (corner.vertex as usize) < mesh.vertex_count();
    let texture_ok = corner
        .texture
        .is_none_or(|t| (t as usize) < mesh.texcoords().len());
    let normal_ok = corner
        .normal
        .is_none_or(|n| (n as usize) < mesh.normals().len());
    if vertex_ok && texture_ok && normal_ok {
        Ok(())
    } else {
        Err(ShellwrapError::Input(format!(
            "line {}: face corner '{token}' references an undeclared attribute",
            line_no + 1
        )))
    }
}

fn malformed_corner(token: &str, line_no: usize) -> ShellwrapError {
    ShellwrapError::Input(format!(
        "line {}: malformed face corner '{token}'",
        line_no + 1
    ))
}
