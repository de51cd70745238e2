//! Skin layout: where each body part lives on the 64x64 texture
//!
//! The head keeps its hand-placed layout. Every other part uses the
//! unfolded box net:
//!
//! ```text
//!         +------+------+
//!         | top  |bottom|
//!  +------+------+------+------+
//!  | left |front |right | back |
//!  +------+------+------+------+
//! ```
//!
//! Left and right limbs share one net.

use super::uv::{BoxFace, FaceUv, UvAtlas};

/// Texture size every layout in this module is drawn on
pub const SKIN_SIZE: (u32, u32) = (64, 64);

/// Rectangle in texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    #[cfg(test)]
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    pub fn to_uv(&self, tex_w: u32, tex_h: u32) -> FaceUv {
        FaceUv::from_pixels(self.x, self.y, self.right(), self.bottom(), tex_w, tex_h)
    }
}

/// Net of a `w` x `h` x `d` texel box whose bounding corner sits at `origin`
///
/// Returned in `BoxFace::ALL` order.
pub fn box_net_rects(origin: (u32, u32), size: (u32, u32, u32)) -> [PixelRect; 6] {
    let (ox, oy) = origin;
    let (w, h, d) = size;
    [
        PixelRect::new(ox + d + w, oy + d, d, h), // right (+x)
        PixelRect::new(ox, oy + d, d, h),         // left (-x)
        PixelRect::new(ox + d, oy, w, d),         // top
        PixelRect::new(ox + d + w, oy, w, d),     // bottom
        PixelRect::new(ox + d, oy + d, w, h),     // front
        PixelRect::new(ox + 2 * d + w, oy + d, w, h), // back
    ]
}

impl UvAtlas {
    /// Atlas from pixel rectangles listed in `BoxFace::ALL` order
    pub fn from_pixel_rects(name: &'static str, tex_size: (u32, u32), rects: [PixelRect; 6]) -> Self {
        let (tw, th) = tex_size;
        UvAtlas::from_fn(name, |face| rects[face.index()].to_uv(tw, th))
    }

    /// Atlas for the box net of a `w` x `h` x `d` texel box at `origin`
    pub fn box_net(name: &'static str, origin: (u32, u32), size: (u32, u32, u32), tex_size: (u32, u32)) -> Self {
        Self::from_pixel_rects(name, tex_size, box_net_rects(origin, size))
    }
}

/// Head rectangles, in `BoxFace::ALL` order
///
/// Front and back share a column: front on rows 0..10, back on rows 10..20.
/// Every rect is half-open and upright (top row first).
pub const HEAD_RECTS: [PixelRect; 6] = [
    PixelRect::new(36, 0, 8, 10), // right
    PixelRect::new(20, 0, 8, 10), // left
    PixelRect::new(12, 0, 8, 8),  // top
    PixelRect::new(44, 0, 8, 8),  // bottom
    PixelRect::new(28, 0, 8, 10), // front
    PixelRect::new(28, 10, 8, 10), // back
];

pub fn head_atlas() -> UvAtlas {
    UvAtlas::from_pixel_rects("head", SKIN_SIZE, HEAD_RECTS)
}

pub fn torso_atlas() -> UvAtlas {
    UvAtlas::box_net("torso", (0, 20), (12, 18, 4), SKIN_SIZE)
}

pub fn upper_arm_atlas() -> UvAtlas {
    UvAtlas::box_net("upper_arm", (32, 20), (6, 8, 4), SKIN_SIZE)
}

pub fn lower_arm_atlas() -> UvAtlas {
    UvAtlas::box_net("lower_arm", (32, 32), (4, 10, 4), SKIN_SIZE)
}

pub fn upper_leg_atlas() -> UvAtlas {
    UvAtlas::box_net("upper_leg", (0, 44), (6, 8, 4), SKIN_SIZE)
}

pub fn lower_leg_atlas() -> UvAtlas {
    UvAtlas::box_net("lower_leg", (48, 32), (4, 12, 4), SKIN_SIZE)
}

/// Every distinct atlas on the skin
#[cfg(test)]
pub fn all_atlases() -> Vec<UvAtlas> {
    vec![
        head_atlas(),
        torso_atlas(),
        upper_arm_atlas(),
        lower_arm_atlas(),
        upper_leg_atlas(),
        lower_leg_atlas(),
    ]
}
