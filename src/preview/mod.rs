//! Live 3D preview
//!
//! Owns the GPU copy of the skin. The same `Texture2D` is drawn by the 2D
//! canvas and mapped onto every body part, and it is re-uploaded only when
//! the `SkinTexture` reports itself dirty.

mod orbit;

pub use orbit::OrbitCamera;

use macroquad::models::{Mesh, Vertex};
use macroquad::prelude::*;

use crate::model::{self, BodyPart, BoxFace, BoxMesh, FACE_ORDER};
use crate::texture::SkinTexture;
use crate::ui::{MouseState, Rect, PANEL_COLOR};

/// Vertical field of view in degrees
const FOV_DEGREES: f32 = 35.0;

/// Fake lighting so box edges stay readable on an unlit texture
fn face_shade(face: BoxFace) -> f32 {
    match face {
        BoxFace::Top => 1.0,
        BoxFace::Front | BoxFace::Back => 0.95,
        BoxFace::Right | BoxFace::Left => 0.85,
        BoxFace::Bottom => 0.7,
    }
}

/// Convert a textured `BoxMesh` into a macroquad mesh placed at `offset`
pub fn to_gpu_mesh(mesh: &BoxMesh, offset: Vec3, texture: &Texture2D) -> Mesh {
    let vertices = mesh
        .positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let face = FACE_ORDER[i / 4];
            let [u, v] = mesh.uvs.get(i).copied().unwrap_or([0.0, 0.0]);
            let s = face_shade(face);
            let pos = *p + offset;
            Vertex::new(pos.x, pos.y, pos.z, u, v, Color::new(s, s, s, 1.0))
        })
        .collect();

    Mesh {
        vertices,
        indices: mesh.indices.clone(),
        texture: Some(texture.clone()),
    }
}

/// GL viewport (origin bottom-left) for a screen rect (origin top-left)
pub fn gl_viewport(rect: Rect, screen_h: f32) -> (i32, i32, i32, i32) {
    (
        rect.x.round() as i32,
        (screen_h - rect.bottom()).round() as i32,
        rect.w.round().max(1.0) as i32,
        rect.h.round().max(1.0) as i32,
    )
}

pub struct SkinPreview {
    texture: Texture2D,
    parts: Vec<BodyPart>,
    meshes: Vec<Mesh>,
    pub camera: OrbitCamera,
    /// Drag started inside the preview
    dragging: bool,
}

impl SkinPreview {
    pub fn new(skin: &SkinTexture, distance: f32, min_distance: f32, max_distance: f32) -> Self {
        let texture = Texture2D::from_rgba8(skin.width() as u16, skin.height() as u16, skin.as_raw());
        texture.set_filter(FilterMode::Nearest);

        let parts = model::humanoid();
        let (lo, hi) = model::bounds(&parts);
        let target = (lo + hi) * 0.5;
        let meshes = parts
            .iter()
            .map(|p| to_gpu_mesh(&p.mesh(), p.position, &texture))
            .collect();

        for p in &parts {
            log::debug!("part {}: size {:?} at {:?} ({})", p.kind.name(), p.size, p.position, p.atlas.name);
        }
        log::info!("preview ready: {} parts, {}x{} skin", parts.len(), skin.width(), skin.height());

        Self {
            texture,
            parts,
            meshes,
            camera: OrbitCamera::new(target, distance, min_distance, max_distance),
            dragging: false,
        }
    }

    /// The GPU copy of the skin
    pub fn texture(&self) -> &Texture2D {
        &self.texture
    }

    /// Re-upload the skin if it changed since the last call
    pub fn sync(&mut self, skin: &mut SkinTexture) -> bool {
        if !skin.is_dirty() {
            return false;
        }
        let (w, h) = skin.dimensions();
        if self.texture.width() as u32 != w || self.texture.height() as u32 != h {
            // Size changed: new texture, rebuild meshes around it
            self.texture = Texture2D::from_rgba8(w as u16, h as u16, skin.as_raw());
            self.texture.set_filter(FilterMode::Nearest);
            self.meshes = self
                .parts
                .iter()
                .map(|p| to_gpu_mesh(&p.mesh(), p.position, &self.texture))
                .collect();
        } else {
            self.texture.update_from_bytes(w, h, skin.as_raw());
        }
        skin.take_dirty()
    }

    /// Orbit with a left drag that started over the preview, zoom with the wheel
    pub fn handle_input(&mut self, mouse: &MouseState, rect: Rect) {
        if mouse.left_pressed && mouse.inside(&rect) {
            self.dragging = true;
        }
        if !mouse.left_down {
            self.dragging = false;
        }
        if self.dragging && !mouse.left_pressed {
            self.camera.rotate(mouse.dx, mouse.dy);
        }
        if mouse.inside(&rect) {
            self.camera.zoom(mouse.scroll);
        }
    }

    pub fn draw(&self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, PANEL_COLOR);
        if rect.w < 1.0 || rect.h < 1.0 {
            return;
        }

        set_camera(&Camera3D {
            position: self.camera.position(),
            target: self.camera.target,
            up: Vec3::Y,
            fovy: FOV_DEGREES.to_radians(),
            aspect: Some(rect.w / rect.h),
            viewport: Some(gl_viewport(rect, screen_height())),
            ..Default::default()
        });
        for mesh in &self.meshes {
            draw_mesh(mesh);
        }
        set_default_camera();
    }
}
