//! Editor events
//!
//! Pointer events flow into the session; session events flow out. The
//! session never calls back into the UI: it queues what happened and the app
//! drains the queue once per frame.

use crate::texture::Color24;
use super::tool::SkinTool;

/// Pointer input already mapped to canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Button went down over pixel (x, y)
    Pressed { x: i64, y: i64 },
    /// Pointer moved onto pixel (x, y)
    Moved { x: i64, y: i64 },
    /// Button released
    Released,
    /// Pointer left the drawing surface
    Left,
}

/// Something the session did that listeners may care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Pixels changed; the texture is dirty
    TextureChanged,
    /// The eyedropper (or palette) changed the current color
    ColorPicked(Color24),
    /// Active tool changed
    ToolChanged(SkinTool),
}

/// A queue for events of a single type.
/// Events are collected while handling input and drained by the app.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
