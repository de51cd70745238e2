//! Basic UI widgets

use macroquad::prelude::*;

use super::theme::*;
use super::{Rect, UiContext};
use crate::texture::Color24;

/// Simple toolbar layout helper
pub struct Toolbar {
    rect: Rect,
    cursor_x: f32,
    spacing: f32,
}

impl Toolbar {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            cursor_x: rect.x + 4.0,
            spacing: 4.0,
        }
    }

    /// Add a separator
    pub fn separator(&mut self) {
        self.cursor_x += self.spacing * 2.0;
        draw_line(
            self.cursor_x,
            self.rect.y + 4.0,
            self.cursor_x,
            self.rect.bottom() - 4.0,
            1.0,
            BORDER_COLOR,
        );
        self.cursor_x += self.spacing * 2.0;
    }

    /// Add a label
    pub fn label(&mut self, text: &str) {
        let text_dims = measure_text(text, None, FONT_SIZE_HEADER as u16, 1.0);
        // Center vertically in toolbar - round to integer pixels for crisp rendering
        let text_y = (self.rect.y + (self.rect.h + text_dims.height) * 0.5).round();
        draw_text(text, self.cursor_x.round(), text_y, FONT_SIZE_HEADER, TEXT_COLOR);
        self.cursor_x += text_dims.width + self.spacing;
    }

    /// Add a text button sized to its label
    pub fn button(&mut self, ctx: &mut UiContext, label: &str, tooltip: &str, is_active: bool) -> bool {
        let text_w = measure_text(label, None, FONT_SIZE_HEADER as u16, 1.0).width;
        let btn_rect = Rect::new(
            self.cursor_x.round(),
            (self.rect.y + 3.0).round(),
            (text_w + 16.0).round(),
            (self.rect.h - 6.0).round(),
        );
        self.cursor_x += btn_rect.w + self.spacing;
        text_button(ctx, btn_rect, label, tooltip, is_active)
    }

    /// Add a color swatch
    pub fn swatch(&mut self, ctx: &mut UiContext, color: Color24, is_selected: bool) -> bool {
        let size = SWATCH_SIZE.min(self.rect.h - 4.0);
        let rect = Rect::new(
            self.cursor_x.round(),
            (self.rect.y + (self.rect.h - size) * 0.5).round(),
            size,
            size,
        );
        self.cursor_x += size + 2.0;
        color_swatch(ctx, rect, color, is_selected)
    }
}

/// Flat text button, returns true if clicked
pub fn text_button(ctx: &mut UiContext, rect: Rect, label: &str, tooltip: &str, is_active: bool) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    let pressed = ctx.mouse.clicking(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered && !tooltip.is_empty() {
        ctx.set_tooltip(tooltip);
    }

    let corner_radius = 4.0;
    if is_active {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, ACCENT_COLOR);
    } else if pressed {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, BUTTON_PRESSED);
    } else if hovered {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, corner_radius, BUTTON_HOVER);
    }

    let text_color = if is_active {
        WHITE
    } else if hovered {
        Color::from_rgba(220, 220, 220, 255)
    } else {
        Color::from_rgba(180, 180, 180, 255)
    };
    let dims = measure_text(label, None, FONT_SIZE_HEADER as u16, 1.0);
    draw_text(
        label,
        (rect.center_x() - dims.width * 0.5).round(),
        (rect.center_y() + dims.offset_y * 0.5).round(),
        FONT_SIZE_HEADER,
        text_color,
    );

    clicked
}

/// Palette swatch, returns true if clicked
pub fn color_swatch(ctx: &mut UiContext, rect: Rect, color: Color24, is_selected: bool) -> bool {
    let hovered = ctx.mouse.inside(&rect);
    if hovered {
        ctx.set_tooltip(&color.to_hex());
    }

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, color.to_mq_color());
    let outline = if is_selected {
        ACCENT_COLOR
    } else if hovered {
        TEXT_COLOR
    } else {
        BORDER_COLOR
    };
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, if is_selected { 2.0 } else { 1.0 }, outline);

    ctx.mouse.clicked(&rect)
}

/// Draw the tooltip requested this frame next to the mouse
pub fn draw_tooltip(ctx: &UiContext) {
    let Some(text) = ctx.tooltip() else {
        return;
    };
    let dims = measure_text(text, None, FONT_SIZE_CONTENT as u16, 1.0);
    let w = dims.width + 10.0;
    let h = FONT_SIZE_CONTENT + 8.0;
    // Keep on screen
    let x = (ctx.mouse.x + 12.0).min(screen_width() - w).max(0.0);
    let y = (ctx.mouse.y + 16.0).min(screen_height() - h).max(0.0);
    draw_rectangle(x, y, w, h, TOOLTIP_BG);
    draw_rectangle_lines(x, y, w, h, 1.0, BORDER_COLOR);
    draw_text(text, x + 5.0, y + h - 6.0, FONT_SIZE_CONTENT, TEXT_COLOR);
}

/// Draw a rounded rectangle (simple approximation using overlapping rects)
fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, w, h - r * 2.0, color);
    draw_circle(x + r, y + r, r, color);
    draw_circle(x + w - r, y + r, r, color);
    draw_circle(x + r, y + h - r, r, color);
    draw_circle(x + w - r, y + h - r, r, color);
}
