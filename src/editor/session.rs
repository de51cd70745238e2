//! Editing session
//!
//! Owns the skin texture and everything the tools need: the current color,
//! the active tool and the stroke state machine.
//!
//! ```text
//! [Idle] --Pressed--> [Painting] --Released / Left--> [Idle]
//!                       |    ^
//!                       +----+ Moved (Brush paints, other tools ignore)
//! ```

use image::RgbaImage;

use crate::texture::{flood_fill, import, Color24, ResizeMode, SkinTexture, TextureError};
use super::event::{EventQueue, PointerEvent, SessionEvent};
use super::tool::SkinTool;

/// Whether a pointer button is currently held on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Painting,
}

/// State for one editing session
#[derive(Debug)]
pub struct EditorSession {
    texture: SkinTexture,
    /// Color used by the brush and the bucket
    color: Color24,
    tool: SkinTool,
    stroke: StrokeState,
    events: EventQueue<SessionEvent>,
}

impl EditorSession {
    pub fn new(texture: SkinTexture, color: Color24) -> Self {
        Self {
            texture,
            color,
            tool: SkinTool::default(),
            stroke: StrokeState::Idle,
            events: EventQueue::new(),
        }
    }

    pub fn texture(&self) -> &SkinTexture {
        &self.texture
    }

    /// Mutable access for the renderer to consume the dirty flag
    pub fn texture_mut(&mut self) -> &mut SkinTexture {
        &mut self.texture
    }

    pub fn color(&self) -> Color24 {
        self.color
    }

    pub fn set_color(&mut self, color: Color24) {
        self.color = color;
    }

    pub fn tool(&self) -> SkinTool {
        self.tool
    }

    #[cfg(test)]
    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    /// Make `tool` active. Selecting the active tool again does nothing.
    pub fn select_tool(&mut self, tool: SkinTool) {
        if self.tool == tool {
            return;
        }
        log::debug!("tool: {} -> {}", self.tool.id(), tool.id());
        self.tool = tool;
        self.events.send(SessionEvent::ToolChanged(tool));
    }

    /// Feed one pointer event through the stroke state machine
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match (self.stroke, event) {
            (_, PointerEvent::Pressed { x, y }) => {
                self.stroke = StrokeState::Painting;
                self.apply_tool(x, y);
            }
            (StrokeState::Painting, PointerEvent::Moved { x, y }) => {
                if self.tool.repeats_on_drag() {
                    self.apply_tool(x, y);
                }
            }
            (StrokeState::Idle, PointerEvent::Moved { .. }) => {}
            (_, PointerEvent::Released | PointerEvent::Left) => {
                self.stroke = StrokeState::Idle;
            }
        }
    }

    /// Run the active tool once at (x, y)
    ///
    /// Returns true if the texture changed. Coordinates outside the canvas
    /// are ignored.
    pub fn apply_tool(&mut self, x: i64, y: i64) -> bool {
        let result = match self.tool {
            SkinTool::Brush => self.texture.set_pixel(x, y, self.color).map(|_| true),
            SkinTool::Eyedropper => self.texture.get_pixel(x, y).map(|px| {
                let picked = Color24::from(px);
                self.color = picked;
                self.events.send(SessionEvent::ColorPicked(picked));
                // One-shot: picking a color hands control back to the brush
                self.select_tool(SkinTool::Brush);
                false
            }),
            SkinTool::BucketFill => flood_fill(&mut self.texture, x, y, self.color).map(|n| n > 0),
        };

        match result {
            Ok(changed) => {
                if changed {
                    self.events.send(SessionEvent::TextureChanged);
                }
                changed
            }
            Err(e) => {
                log::warn!("{} ignored: {}", self.tool.id(), e);
                false
            }
        }
    }

    /// Fill the whole canvas with `fill`
    pub fn clear(&mut self, fill: Color24) {
        self.texture.clear(fill);
        self.events.send(SessionEvent::TextureChanged);
        log::info!("canvas cleared to {}", fill);
    }

    /// Decode image bytes into the canvas
    ///
    /// On error the canvas is left untouched.
    pub fn import_image(&mut self, bytes: &[u8], mode: ResizeMode) -> Result<(), TextureError> {
        import::import_into(&mut self.texture, bytes, mode)?;
        self.events.send(SessionEvent::TextureChanged);
        Ok(())
    }

    /// Read an image file into the canvas
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(&mut self, path: &std::path::Path, mode: ResizeMode) -> Result<(), TextureError> {
        let bytes = std::fs::read(path)?;
        self.import_image(&bytes, mode)?;
        log::info!("loaded {}", path.display());
        Ok(())
    }

    /// Write the canvas to `path` as PNG
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_file(&self, path: &std::path::Path) -> Result<(), TextureError> {
        std::fs::write(path, self.export_png()?)?;
        log::info!("saved {}", path.display());
        Ok(())
    }

    /// Copy of the current pixels for export
    pub fn snapshot(&self) -> RgbaImage {
        self.texture.snapshot()
    }

    /// PNG-encoded copy of the current pixels
    pub fn export_png(&self) -> Result<Vec<u8>, TextureError> {
        import::encode_png(&self.snapshot())
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain().collect()
    }
}
