//! Skin editing: tools, pointer handling and the session that owns the canvas

mod event;
mod session;
mod tool;

pub use event::{PointerEvent, SessionEvent};
pub use session::EditorSession;
pub use tool::SkinTool;
