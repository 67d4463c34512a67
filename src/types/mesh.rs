use std::collections::BTreeMap;

use crate::geometry::{self, Vector3};
use crate::types::Corner;

/// Flat draw buffers derived from a [`Mesh`]'s corner list: deduplicated
/// per-vertex attributes plus a triangle index buffer referencing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexData {
    pub positions: Vec<Vector3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub texcoords: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
}

/// The fundamental geometry container.
///
/// Attributes are stored the way interchange formats deliver them: separate
/// position/normal/texture arrays plus a corner list in which every face
/// corner references its own combination of the three. The per-vertex layout
/// that indexed drawing consumes is derived lazily via [`Mesh::index_data`].
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    vertices: Vec<Vector3<f32>>,
    normals: Vec<Vector3<f32>>,
    texcoords: Vec<Vector3<f32>>,
    corners: Vec<Corner>,
    /// Derived cache; `None` after any mutation.
    index_data: Option<IndexData>,
}

/// Value identity covers the backing arrays only, never the derived cache.
impl PartialEq for Mesh {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.normals == other.normals
            && self.texcoords == other.texcoords
            && self.corners == other.corners
    }
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles (corners / 3).
    pub fn triangle_count(&self) -> usize {
        self.corners.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    pub fn has_texcoords(&self) -> bool {
        !self.texcoords.is_empty()
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    pub fn vertex(&self, index: u32) -> Vector3<f32> {
        self.vertices[index as usize]
    }

    pub fn normals(&self) -> &[Vector3<f32>] {
        &self.normals
    }

    pub fn texcoords(&self) -> &[Vector3<f32>] {
        &self.texcoords
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    /// Mutable vertex access for in-place passes such as projection.
    /// Invalidates the derived buffers.
    pub fn vertices_mut(&mut self) -> &mut [Vector3<f32>] {
        self.index_data = None;
        &mut self.vertices
    }

    pub fn add_vertex(&mut self, vertex: Vector3<f32>) {
        self.index_data = None;
        self.vertices.push(vertex);
    }

    pub fn add_normal(&mut self, normal: Vector3<f32>) {
        self.index_data = None;
        self.normals.push(normal);
    }

    pub fn add_texcoord(&mut self, texcoord: Vector3<f32>) {
        self.index_data = None;
        self.texcoords.push(texcoord);
    }

    pub fn add_corner(&mut self, corner: Corner) {
        self.index_data = None;
        self.corners.push(corner);
    }

    /// Multiply every vertex position by `factor`.
    pub fn uniform_scale(&mut self, factor: f32) {
        self.index_data = None;
        for vertex in &mut self.vertices {
            *vertex *= factor;
        }
    }

    /// Add `offset` to every vertex position.
    pub fn translate(&mut self, offset: Vector3<f32>) {
        self.index_data = None;
        for vertex in &mut self.vertices {
            *vertex += offset;
        }
    }

    /// Mean vertex position; the zero vector for an empty mesh.
    pub fn centroid(&self) -> Vector3<f32> {
        geometry::centroid(&self.vertices)
    }

    /// Maximum distance from `center` to any vertex.
    pub fn radius_from(&self, center: Vector3<f32>) -> f32 {
        geometry::bounding_radius_from(center, &self.vertices)
    }

    /// Maximum distance from the mesh's own centroid to any vertex.
    pub fn bounding_radius(&self) -> f32 {
        geometry::bounding_radius(&self.vertices)
    }

    /// Deduplicated draw buffers, rebuilt lazily after mutations.
    ///
    /// Corners deduplicate by their full (vertex, texture, normal) identity;
    /// the first occurrence of a corner fixes its output index, so the
    /// rebuild is idempotent and draw order is stable across calls.
    pub fn index_data(&mut self) -> &IndexData {
        let Self {
            vertices,
            normals,
            texcoords,
            corners,
            index_data,
        } = self;
        index_data.get_or_insert_with(|| build_index_data(vertices, normals, texcoords, corners))
    }
}

fn build_index_data(
    vertices: &[Vector3<f32>],
    normals: &[Vector3<f32>],
    texcoords: &[Vector3<f32>],
    corners: &[Corner],
) -> IndexData {
    let mut data = IndexData::default();
    let mut seen: BTreeMap<Corner, u32> = BTreeMap::new();

    for &corner in corners {
        let index = match seen.get(&corner) {
            Some(&index) => index,
            None => {
                let index = data.positions.len() as u32;
                data.positions.push(vertices[corner.vertex as usize]);
                if let Some(texture) = corner.texture {
                    if !texcoords.is_empty() {
                        data.texcoords.push(texcoords[texture as usize]);
                    }
                }
                if let Some(normal) = corner.normal {
                    data.normals.push(normals[normal as usize]);
                }
                seen.insert(corner, index);
                index
            }
        };
        data.indices.push(index);
    }

    data
}
