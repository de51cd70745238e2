//! Input state for UI interaction

use macroquad::prelude::*;

use super::Rect;

/// Mouse button state
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    /// Movement since last frame
    pub dx: f32,
    pub dy: f32,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
    pub scroll: f32, // Scroll wheel delta
}

impl MouseState {
    /// Sample macroquad's input for this frame
    pub fn poll(previous: &MouseState) -> Self {
        let (x, y) = mouse_position();
        Self {
            x,
            y,
            dx: x - previous.x,
            dy: y - previous.y,
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            scroll: mouse_wheel().1,
        }
    }

    /// Check if mouse is inside a rect
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Check if mouse is clicking inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Check if mouse just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// UI context passed through the frame
#[derive(Debug, Default)]
pub struct UiContext {
    pub mouse: MouseState,
    /// Tooltip requested by the widget under the mouse this frame
    tooltip: Option<String>,
}

impl UiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset at start of frame (call before UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.tooltip = None;
    }

    pub fn set_tooltip(&mut self, text: &str) {
        self.tooltip = Some(text.to_string());
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_needs_press_inside() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut m = MouseState { x: 5.0, y: 5.0, ..Default::default() };
        assert!(m.inside(&r));
        assert!(!m.clicked(&r));
        m.left_pressed = true;
        m.left_down = true;
        assert!(m.clicked(&r));
        assert!(m.clicking(&r));
        m.x = 20.0;
        assert!(!m.clicked(&r));
    }

    #[test]
    fn test_tooltip_resets_each_frame() {
        let mut ctx = UiContext::new();
        ctx.set_tooltip("Fill (F)");
        assert_eq!(ctx.tooltip(), Some("Fill (F)"));
        ctx.begin_frame(MouseState::default());
        assert_eq!(ctx.tooltip(), None);
    }
}
