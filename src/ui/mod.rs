//! Immediate-mode UI helpers
//!
//! - Rebuilt every frame, no retained widget state
//! - Simple rectangle-based layout
//! - Drawn directly with macroquad

mod input;
mod rect;
mod theme;
mod widgets;

pub use input::*;
pub use rect::*;
pub use theme::*;
pub use widgets::*;
