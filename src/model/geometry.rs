//! Box geometry
//!
//! Each face gets its own four vertices so it can carry its own UVs and a
//! flat normal. Vertex positions and UVs are both generated from the same
//! `CornerOrder`, which keeps them in step.

use macroquad::math::Vec3;

use super::uv::{project_atlas, BoxFace, Corner, CornerOrder, UvAtlas};

/// Face order of every `BoxMesh`
pub const FACE_ORDER: [BoxFace; 6] = BoxFace::ALL;

/// (right, up) axes of a face as seen from outside the box
///
/// `right x up` is the outward normal, so corners listed in either
/// `CornerOrder` wind counter-clockwise.
fn face_axes(face: BoxFace) -> (Vec3, Vec3) {
    match face {
        BoxFace::Right => (Vec3::NEG_Z, Vec3::Y),
        BoxFace::Left => (Vec3::Z, Vec3::Y),
        BoxFace::Top => (Vec3::X, Vec3::NEG_Z),
        BoxFace::Bottom => (Vec3::X, Vec3::Z),
        BoxFace::Front => (Vec3::X, Vec3::Y),
        BoxFace::Back => (Vec3::NEG_X, Vec3::Y),
    }
}

/// Position of a face corner on a box centered at the origin
pub fn corner_position(face: BoxFace, corner: Corner, half: Vec3) -> Vec3 {
    let (right, up) = face_axes(face);
    let (sr, su) = match corner {
        Corner::TopLeft => (-1.0, 1.0),
        Corner::TopRight => (1.0, 1.0),
        Corner::BottomLeft => (-1.0, -1.0),
        Corner::BottomRight => (1.0, -1.0),
    };
    (face.normal() + right * sr + up * su) * half
}

/// Axis-aligned box centered at the origin
#[derive(Debug, Clone)]
pub struct BoxMesh {
    pub size: Vec3,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Empty until an atlas is applied
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u16>,
    corner_order: CornerOrder,
}

impl BoxMesh {
    /// Box of width `w` (x), height `h` (y) and depth `d` (z)
    pub fn new(w: f32, h: f32, d: f32) -> Self {
        Self::with_corner_order(Vec3::new(w, h, d), CornerOrder::FromBottomLeft)
    }

    pub fn with_corner_order(size: Vec3, corner_order: CornerOrder) -> Self {
        let half = size * 0.5;
        let mut positions = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        for (i, face) in FACE_ORDER.iter().enumerate() {
            let base = (i * 4) as u16;
            for corner in corner_order.corners() {
                positions.push(corner_position(*face, corner, half));
                normals.push(face.normal());
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self {
            size,
            positions,
            normals,
            uvs: Vec::new(),
            indices,
            corner_order,
        }
    }

    pub fn face_order(&self) -> &'static [BoxFace] {
        &FACE_ORDER
    }

    /// Texture this box with `atlas`
    pub fn apply_atlas(&mut self, atlas: &UvAtlas) {
        self.uvs = project_atlas(atlas, self.face_order(), self.corner_order);
    }

    #[cfg(test)]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex index range of one face
    #[cfg(test)]
    pub fn face_range(&self, face: BoxFace) -> std::ops::Range<usize> {
        // FACE_ORDER is BoxFace::ALL
        let i = face.index();
        i * 4..i * 4 + 4
    }

    /// Triangles as position triples
    #[cfg(test)]
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| {
            [
                self.positions[t[0] as usize],
                self.positions[t[1] as usize],
                self.positions[t[2] as usize],
            ]
        })
    }
}
