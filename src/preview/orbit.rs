//! Orbit camera around the character

use macroquad::math::Vec3;

/// Radians per pixel of mouse drag
const ROTATE_SPEED: f32 = 0.005;
/// Keeps the camera off the poles so `up` never lines up with the view
const MAX_ELEVATION: f32 = 1.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    /// Horizontal angle (radians), 0 looks at the front (+z) face
    pub azimuth: f32,
    /// Vertical angle (radians)
    pub elevation: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32, min_distance: f32, max_distance: f32) -> Self {
        Self {
            target,
            azimuth: 0.0,
            elevation: 0.0,
            distance: distance.clamp(min_distance, max_distance),
            min_distance,
            max_distance,
        }
    }

    /// Eye position
    pub fn position(&self) -> Vec3 {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        self.target + Vec3::new(ce * sa, se, ce * ca) * self.distance
    }

    /// Rotate by a mouse drag of (dx, dy) pixels
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ROTATE_SPEED;
        self.elevation = (self.elevation + dy * ROTATE_SPEED).clamp(-MAX_ELEVATION, MAX_ELEVATION);
    }

    /// Zoom by one wheel step; positive scroll moves closer
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let zoom_factor = if scroll > 0.0 { 0.9 } else { 1.1 };
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    /// Back to the front view
    pub fn reset(&mut self) {
        self.azimuth = 0.0;
        self.elevation = 0.0;
    }
}
