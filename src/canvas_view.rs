//! The 2D painting surface
//!
//! Maps screen coordinates to texels and turns raw mouse state into
//! `PointerEvent`s for the session. Events are only produced while the
//! pointer is over the canvas; leaving it emits `Left`.

use macroquad::prelude::*;

use crate::editor::PointerEvent;
use crate::ui::{MouseState, Rect, BORDER_COLOR, PANEL_COLOR};

/// Largest on-screen rect for a `size` canvas inside `bounds`
///
/// Uses a whole-number zoom when at least 1:1 fits so texels stay square.
pub fn layout(bounds: Rect, size: (u32, u32)) -> Rect {
    let (w, h) = (size.0.max(1) as f32, size.1.max(1) as f32);
    let fitted = bounds.fit_aspect(w / h);
    let scale = fitted.w / w;
    if scale < 1.0 {
        return fitted;
    }
    let scale = scale.floor();
    let (dw, dh) = (w * scale, h * scale);
    Rect::new(
        (bounds.center_x() - dw * 0.5).round(),
        (bounds.center_y() - dh * 0.5).round(),
        dw,
        dh,
    )
}

/// Texel under a screen point, clamped to the canvas
pub fn screen_to_pixel(area: Rect, size: (u32, u32), sx: f32, sy: f32) -> (i64, i64) {
    let (w, h) = (size.0.max(1) as i64, size.1.max(1) as i64);
    if area.w <= 0.0 || area.h <= 0.0 {
        return (0, 0);
    }
    let px = ((sx - area.x) * w as f32 / area.w).floor() as i64;
    let py = ((sy - area.y) * h as f32 / area.h).floor() as i64;
    (px.clamp(0, w - 1), py.clamp(0, h - 1))
}

/// Screen rect covered by one texel
pub fn pixel_to_screen(area: Rect, size: (u32, u32), px: i64, py: i64) -> Rect {
    let sx = area.w / size.0.max(1) as f32;
    let sy = area.h / size.1.max(1) as f32;
    Rect::new(area.x + px as f32 * sx, area.y + py as f32 * sy, sx, sy)
}

#[derive(Debug, Clone)]
pub struct CanvasView {
    /// Where the canvas is drawn this frame
    area: Rect,
    size: (u32, u32),
    hovering: bool,
    last_pixel: Option<(i64, i64)>,
    pub show_grid: bool,
}

impl CanvasView {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            area: Rect::default(),
            size,
            hovering: false,
            last_pixel: None,
            show_grid: true,
        }
    }

    /// Lay the canvas out inside `bounds` for this frame
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.area = layout(bounds, self.size);
    }

    /// Texel under the mouse, if it is over the canvas
    pub fn hovered_pixel(&self) -> Option<(i64, i64)> {
        if self.hovering {
            self.last_pixel
        } else {
            None
        }
    }

    /// Translate this frame's mouse state into pointer events
    pub fn pointer_events(&mut self, mouse: &MouseState) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let inside = mouse.inside(&self.area);

        if !inside {
            if self.hovering {
                events.push(PointerEvent::Left);
            }
            self.hovering = false;
            self.last_pixel = None;
            return events;
        }

        let (x, y) = screen_to_pixel(self.area, self.size, mouse.x, mouse.y);
        let moved = self.last_pixel != Some((x, y));
        self.hovering = true;
        self.last_pixel = Some((x, y));

        if mouse.left_pressed {
            events.push(PointerEvent::Pressed { x, y });
        } else if moved {
            events.push(PointerEvent::Moved { x, y });
        }
        if mouse.left_released {
            events.push(PointerEvent::Released);
        }
        events
    }

    /// Draw the texture scaled into the canvas area
    pub fn draw(&self, texture: &Texture2D) {
        let a = self.area;
        draw_rectangle(a.x - 4.0, a.y - 4.0, a.w + 8.0, a.h + 8.0, PANEL_COLOR);
        draw_texture_ex(
            texture,
            a.x,
            a.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(a.w, a.h)),
                ..Default::default()
            },
        );

        let texel = a.w / self.size.0.max(1) as f32;
        if self.show_grid && texel >= 8.0 {
            let grid = Color::new(0.0, 0.0, 0.0, 0.12);
            for i in 1..self.size.0 {
                let x = a.x + i as f32 * texel;
                draw_line(x, a.y, x, a.bottom(), 1.0, grid);
            }
            let texel_h = a.h / self.size.1.max(1) as f32;
            for j in 1..self.size.1 {
                let y = a.y + j as f32 * texel_h;
                draw_line(a.x, y, a.right(), y, 1.0, grid);
            }
        }

        if let Some((px, py)) = self.hovered_pixel() {
            let r = pixel_to_screen(a, self.size, px, py);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, WHITE);
        }
        draw_rectangle_lines(a.x, a.y, a.w, a.h, 1.0, BORDER_COLOR);
    }
}
