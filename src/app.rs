//! Application state and per-frame flow
//!
//! Layout:
//! ```text
//! +-------------------------------------------+
//! | tools | actions | palette                 |
//! +---------------------+---------------------+
//! |                     |                     |
//! |      canvas         |      preview        |
//! |                     |                     |
//! +---------------------+---------------------+
//! | status                                    |
//! +-------------------------------------------+
//! ```

use log::Level;
use macroquad::prelude::*;

use crate::canvas_view::CanvasView;
use crate::config::EditorConfig;
use crate::editor::{EditorSession, SessionEvent, SkinTool};
use crate::logger;
use crate::preview::SkinPreview;
use crate::texture::{Color24, SkinTexture};
use crate::ui::{
    draw_tooltip, MouseState, Rect, Toolbar, UiContext, BG_COLOR, FONT_SIZE_CONTENT, HEADER_COLOR,
    STATUS_HEIGHT, TEXT_COLOR, TEXT_DIM, TEXT_WARN, TOOLBAR_HEIGHT,
};

/// Something the user asked for through the toolbar or the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    SelectTool(SkinTool),
    PickColor(Color24),
    Clear,
    Load,
    Save,
    ResetView,
    ToggleGrid,
}

/// Keyboard shortcut → action
pub fn shortcut_action(key: KeyCode) -> Option<AppAction> {
    match key {
        KeyCode::B => Some(AppAction::SelectTool(SkinTool::Brush)),
        KeyCode::I => Some(AppAction::SelectTool(SkinTool::Eyedropper)),
        KeyCode::F => Some(AppAction::SelectTool(SkinTool::BucketFill)),
        KeyCode::G => Some(AppAction::ToggleGrid),
        KeyCode::R => Some(AppAction::ResetView),
        _ => None,
    }
}

const SHORTCUT_KEYS: [KeyCode; 5] = [KeyCode::B, KeyCode::I, KeyCode::F, KeyCode::G, KeyCode::R];

pub struct AppState {
    pub config: EditorConfig,
    pub session: EditorSession,
    pub canvas: CanvasView,
    pub preview: SkinPreview,
    ui: UiContext,
    mouse: MouseState,
    /// Message and the time it expires
    status: Option<(String, f64)>,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        let (width, height) = config.canvas_size();
        let texture = SkinTexture::new_filled(width, height, config.background);
        let preview = SkinPreview::new(
            &texture,
            config.orbit_distance,
            config.min_distance,
            config.max_distance,
        );
        let canvas = CanvasView::new(texture.dimensions());
        let session = EditorSession::new(texture, config.brush_color);

        Self {
            config,
            session,
            canvas,
            preview,
            ui: UiContext::new(),
            mouse: MouseState::default(),
            status: None,
        }
    }

    /// Show a message in the status line for `duration` seconds
    pub fn set_status(&mut self, message: &str, duration: f64) {
        self.status = Some((message.to_string(), get_time() + duration));
    }

    /// Run one frame: input, update, draw
    pub fn frame(&mut self) {
        self.mouse = MouseState::poll(&self.mouse);
        self.ui.begin_frame(self.mouse);

        let screen = Rect::screen(screen_width(), screen_height());
        let toolbar_rect = screen.slice_top(TOOLBAR_HEIGHT);
        let status_rect = screen.slice_bottom(STATUS_HEIGHT);
        let body = screen
            .remaining_after_top(TOOLBAR_HEIGHT)
            .remaining_after_bottom(STATUS_HEIGHT);
        let (canvas_rect, preview_rect) = body.split_h(0.5);

        clear_background(BG_COLOR);

        // Toolbar is immediate mode: drawing it also reports clicks
        let mut actions = self.draw_toolbar(toolbar_rect);
        actions.extend(SHORTCUT_KEYS.iter().filter(|k| is_key_pressed(**k)).filter_map(|k| shortcut_action(*k)));
        for action in actions {
            self.handle_action(action);
        }
        #[cfg(target_arch = "wasm32")]
        self.poll_browser_import();

        self.canvas.set_bounds(canvas_rect.pad(12.0));
        for event in self.canvas.pointer_events(&self.mouse) {
            self.session.handle_pointer(event);
        }
        self.preview.handle_input(&self.mouse, preview_rect);
        self.process_session_events();

        self.preview.sync(self.session.texture_mut());

        self.canvas.draw(self.preview.texture());
        self.preview.draw(preview_rect.pad(1.0));
        self.draw_status(status_rect);
        draw_tooltip(&self.ui);
    }

    pub fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::SelectTool(tool) => self.session.select_tool(tool),
            AppAction::PickColor(color) => self.session.set_color(color),
            AppAction::Clear => self.session.clear(self.config.background),
            AppAction::Load => self.load_image(),
            AppAction::Save => self.save_image(),
            AppAction::ResetView => self.preview.camera.reset(),
            AppAction::ToggleGrid => self.canvas.show_grid = !self.canvas.show_grid,
        }
    }

    fn process_session_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                SessionEvent::ColorPicked(color) => self.set_status(&format!("Picked {}", color), 2.0),
                SessionEvent::ToolChanged(tool) => log::debug!("active tool: {}", tool.id()),
                SessionEvent::TextureChanged => {}
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_image(&mut self) {
        let dialog = rfd::FileDialog::new().add_filter("Image", &["png", "jpg", "jpeg", "bmp"]);
        let Some(path) = dialog.pick_file() else {
            return;
        };
        match self.session.load_file(&path, self.config.resize_mode) {
            Ok(()) => self.set_status(&format!("Loaded {}", path.display()), 3.0),
            Err(e) => {
                log::warn!("load failed: {}", e);
                self.set_status(&format!("Load failed: {}", e), 5.0);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_image(&mut self) {
        let dialog = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&self.config.export_file_name);
        let Some(path) = dialog.save_file() else {
            return;
        };
        match self.session.save_file(&path) {
            Ok(()) => self.set_status(&format!("Saved {}", path.display()), 3.0),
            Err(e) => {
                log::warn!("save failed: {}", e);
                self.set_status(&format!("Save failed: {}", e), 5.0);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn load_image(&mut self) {
        crate::web::request_import();
        self.set_status("Select an image to load...", 3.0);
    }

    #[cfg(target_arch = "wasm32")]
    fn save_image(&mut self) {
        match self.session.export_png() {
            Ok(bytes) => {
                crate::web::offer_download(&self.config.export_file_name, &bytes);
                log::info!("offered {} ({} bytes)", self.config.export_file_name, bytes.len());
                self.set_status(&format!("Downloaded {}", self.config.export_file_name), 3.0);
            }
            Err(e) => {
                log::warn!("export failed: {}", e);
                self.set_status(&format!("Save failed: {}", e), 5.0);
            }
        }
    }

    /// Pick up a file chosen in the browser's file picker
    #[cfg(target_arch = "wasm32")]
    fn poll_browser_import(&mut self) {
        let (name, bytes) = match crate::web::take_import() {
            None => return,
            Some(Ok(file)) => file,
            Some(Err(e)) => {
                log::warn!("import rejected: {}", e);
                self.set_status(&format!("Load failed: {}", e), 5.0);
                return;
            }
        };
        match self.session.import_image(&bytes, self.config.resize_mode) {
            Ok(()) => {
                log::info!("loaded {}", name);
                self.set_status(&format!("Loaded {}", name), 3.0);
            }
            Err(e) => {
                log::warn!("load failed: {}", e);
                self.set_status(&format!("Load failed: {}", e), 5.0);
            }
        }
    }

    fn draw_toolbar(&mut self, rect: Rect) -> Vec<AppAction> {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
        let mut actions = Vec::new();
        let mut toolbar = Toolbar::new(rect);

        let active = self.session.tool();
        for tool in SkinTool::ALL {
            if toolbar.button(&mut self.ui, tool.short_label(), tool.label(), active == *tool) {
                actions.push(AppAction::SelectTool(*tool));
            }
        }

        toolbar.separator();
        if toolbar.button(&mut self.ui, "Clear", "Fill the canvas with the background color", false) {
            actions.push(AppAction::Clear);
        }
        if toolbar.button(&mut self.ui, "Load", "Load an image onto the canvas", false) {
            actions.push(AppAction::Load);
        }
        if toolbar.button(&mut self.ui, "Save", "Save the canvas as PNG", false) {
            actions.push(AppAction::Save);
        }

        toolbar.separator();
        let current = self.session.color();
        for color in &self.config.palette {
            if toolbar.swatch(&mut self.ui, *color, *color == current) {
                actions.push(AppAction::PickColor(*color));
            }
        }
        toolbar.separator();
        toolbar.swatch(&mut self.ui, current, true);
        toolbar.label(&current.to_hex());

        actions
    }

    fn draw_status(&self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, HEADER_COLOR);
        let text_y = (rect.y + rect.h * 0.5 + FONT_SIZE_CONTENT * 0.35).round();

        let now = get_time();
        let (message, color) = match &self.status {
            Some((msg, until)) if *until > now => (msg.clone(), TEXT_COLOR),
            _ => match logger::latest_status() {
                Some(entry) if entry.level <= Level::Warn => (entry.msg, TEXT_WARN),
                Some(entry) => (entry.msg, TEXT_DIM),
                None => (String::new(), TEXT_DIM),
            },
        };
        draw_text(&message, rect.x + 8.0, text_y, FONT_SIZE_CONTENT, color);

        let mut info = format!("{}  {}", self.session.tool().short_label(), self.session.color());
        if let Some((x, y)) = self.canvas.hovered_pixel() {
            if let Ok(px) = self.session.texture().get_pixel(x, y) {
                info = format!("{}, {}  {}  |  {}", x, y, Color24::from(px), info);
            }
        }
        let w = measure_text(&info, None, FONT_SIZE_CONTENT as u16, 1.0).width;
        draw_text(&info, rect.right() - w - 8.0, text_y, FONT_SIZE_CONTENT, TEXT_DIM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_shortcuts_match_labels() {
        for tool in SkinTool::ALL {
            let key = match tool.shortcut() {
                'B' => KeyCode::B,
                'I' => KeyCode::I,
                'F' => KeyCode::F,
                other => panic!("no key for {}", other),
            };
            assert_eq!(shortcut_action(key), Some(AppAction::SelectTool(*tool)));
        }
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(shortcut_action(KeyCode::Q), None);
        assert_eq!(shortcut_action(KeyCode::G), Some(AppAction::ToggleGrid));
        for key in SHORTCUT_KEYS {
            assert!(shortcut_action(key).is_some());
        }
    }
}
