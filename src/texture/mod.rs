//! Skin texture system
//!
//! The painted skin is a plain RGBA raster that every other part of the
//! editor reads from.
//!
//! ## Overview
//!
//! - **SkinTexture**: the pixel buffer plus a dirty flag for the preview
//! - **Color24**: opaque 24-bit paint color with `#rrggbb` conversion
//! - **flood_fill**: scanline bucket fill over the buffer
//! - **import**: decode/resize incoming images, PNG export
//!
//! ## Coordinates
//!
//! Pixel (0, 0) is the top-left corner. Rows are stored top to bottom, which
//! is also the orientation UV `v` uses (see `model::uv`).

mod color;
mod fill;
mod skin_texture;
pub mod import;

pub use color::{Color24, DEFAULT_PALETTE};
pub use fill::flood_fill;
pub use import::ResizeMode;
pub use skin_texture::{SkinTexture, TextureError, DEFAULT_SIZE};
