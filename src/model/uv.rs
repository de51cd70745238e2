//! UV rectangles and atlas projection
//!
//! A `UvAtlas` assigns one rectangle of the skin texture to each face of a
//! box. `project_atlas` turns an atlas into per-vertex texture coordinates
//! for a given face order and corner order. It is the only place UVs for box
//! faces are produced, so every face of every part uses the same winding.
//!
//! UV space: `u` grows to the right, `v` grows downward from the top row of
//! the texture, matching the pixel buffer and macroquad's texture sampling.

use macroquad::math::Vec3;

/// One of the six faces of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxFace {
    /// +X
    Right,
    /// -X
    Left,
    /// +Y
    Top,
    /// -Y
    Bottom,
    /// +Z (towards the default camera)
    Front,
    /// -Z
    Back,
}

impl BoxFace {
    pub const ALL: [BoxFace; 6] = [
        BoxFace::Right,
        BoxFace::Left,
        BoxFace::Top,
        BoxFace::Bottom,
        BoxFace::Front,
        BoxFace::Back,
    ];

    pub fn index(self) -> usize {
        match self {
            BoxFace::Right => 0,
            BoxFace::Left => 1,
            BoxFace::Top => 2,
            BoxFace::Bottom => 3,
            BoxFace::Front => 4,
            BoxFace::Back => 5,
        }
    }

    #[cfg(test)]
    pub fn name(self) -> &'static str {
        match self {
            BoxFace::Right => "right",
            BoxFace::Left => "left",
            BoxFace::Top => "top",
            BoxFace::Bottom => "bottom",
            BoxFace::Front => "front",
            BoxFace::Back => "back",
        }
    }

    /// Outward unit normal
    pub fn normal(self) -> Vec3 {
        match self {
            BoxFace::Right => Vec3::X,
            BoxFace::Left => Vec3::NEG_X,
            BoxFace::Top => Vec3::Y,
            BoxFace::Bottom => Vec3::NEG_Y,
            BoxFace::Front => Vec3::Z,
            BoxFace::Back => Vec3::NEG_Z,
        }
    }
}

/// Corner of a face as seen from outside the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Order in which a face lists its four corners
///
/// Both orders walk the face counter-clockwise (seen from outside); they only
/// differ in the starting corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerOrder {
    /// bottom-left, bottom-right, top-right, top-left
    #[default]
    FromBottomLeft,
    /// top-right, top-left, bottom-left, bottom-right
    FromTopRight,
}

impl CornerOrder {
    pub fn corners(self) -> [Corner; 4] {
        match self {
            CornerOrder::FromBottomLeft => [
                Corner::BottomLeft,
                Corner::BottomRight,
                Corner::TopRight,
                Corner::TopLeft,
            ],
            CornerOrder::FromTopRight => [
                Corner::TopRight,
                Corner::TopLeft,
                Corner::BottomLeft,
                Corner::BottomRight,
            ],
        }
    }
}

/// Normalized texture rectangle for one face
///
/// (u0, v0) is the top-left of the region, (u1, v1) the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FaceUv {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl FaceUv {
    pub const fn new(u0: f32, v0: f32, u1: f32, v1: f32) -> Self {
        Self { u0, v0, u1, v1 }
    }

    /// Build from a pixel rectangle [x0, x1) x [y0, y1) on a texture of the given size
    pub fn from_pixels(x0: u32, y0: u32, x1: u32, y1: u32, tex_w: u32, tex_h: u32) -> Self {
        let w = tex_w.max(1) as f32;
        let h = tex_h.max(1) as f32;
        Self::new(x0 as f32 / w, y0 as f32 / h, x1 as f32 / w, y1 as f32 / h)
    }

    /// Texture coordinate of one corner
    pub fn corner(&self, corner: Corner) -> [f32; 2] {
        match corner {
            Corner::TopLeft => [self.u0, self.v0],
            Corner::TopRight => [self.u1, self.v0],
            Corner::BottomLeft => [self.u0, self.v1],
            Corner::BottomRight => [self.u1, self.v1],
        }
    }

    /// All four values lie in [0, 1]
    #[cfg(test)]
    pub fn is_normalized(&self) -> bool {
        [self.u0, self.v0, self.u1, self.v1]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    /// Pixel rectangle this UV rect covers on a texture of the given size
    #[cfg(test)]
    pub fn to_pixels(&self, tex_w: u32, tex_h: u32) -> (u32, u32, u32, u32) {
        let px = |v: f32, size: u32| (v * size as f32).round().max(0.0) as u32;
        (px(self.u0, tex_w), px(self.v0, tex_h), px(self.u1, tex_w), px(self.v1, tex_h))
    }
}

/// Face → rectangle mapping for one body part
#[derive(Debug, Clone, PartialEq)]
pub struct UvAtlas {
    pub name: &'static str,
    /// Indexed by `BoxFace::index`
    faces: [FaceUv; 6],
}

impl UvAtlas {
    /// Build an atlas by asking for each face's rectangle
    pub fn from_fn(name: &'static str, mut rect: impl FnMut(BoxFace) -> FaceUv) -> Self {
        let mut faces = [FaceUv::default(); 6];
        for face in BoxFace::ALL {
            faces[face.index()] = rect(face);
        }
        Self { name, faces }
    }

    pub fn face(&self, face: BoxFace) -> FaceUv {
        self.faces[face.index()]
    }

    /// Iterate (face, rect) in `BoxFace::ALL` order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (BoxFace, FaceUv)> + '_ {
        BoxFace::ALL.iter().map(move |&f| (f, self.face(f)))
    }
}

/// Texture coordinates for a box whose faces are listed in `face_order`
/// and whose face corners are listed in `corner_order`
///
/// Produces exactly four `[u, v]` pairs per face.
pub fn project_atlas(
    atlas: &UvAtlas,
    face_order: &[BoxFace],
    corner_order: CornerOrder,
) -> Vec<[f32; 2]> {
    let corners = corner_order.corners();
    let mut uvs = Vec::with_capacity(face_order.len() * 4);
    for &face in face_order {
        let rect = atlas.face(face);
        uvs.extend(corners.iter().map(|&c| rect.corner(c)));
    }
    uvs
}
