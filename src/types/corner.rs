/// One face corner: a vertex index plus optional texture-coordinate and
/// normal indices, all 0-based and local to the owning mesh.
///
/// The derived ordering compares vertex, then texture, then normal, with an
/// absent optional sorting before any present one. Index-buffer
/// deduplication keys on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Corner {
    pub vertex: u32,
    pub texture: Option<u32>,
    pub normal: Option<u32>,
}

impl Corner {
    pub const fn new(vertex: u32, texture: Option<u32>, normal: Option<u32>) -> Self {
        Self {
            vertex,
            texture,
            normal,
        }
    }
}
