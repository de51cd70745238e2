//! Skin texture - the RGBA pixel buffer being painted
//!
//! `SkinTexture` is the single source of truth for the skin. Tools mutate it
//! in place, the preview re-uploads it whenever it is dirty.

use image::{Rgba, RgbaImage};

use super::color::Color24;

/// Default skin resolution
pub const DEFAULT_SIZE: (u32, u32) = (64, 64);

/// Error type for texture operations
#[derive(Debug)]
pub enum TextureError {
    /// Pixel coordinate outside the buffer
    OutOfBounds { x: i64, y: i64, width: u32, height: u32 },
    /// Image bytes could not be decoded
    UnsupportedImage(String),
    /// Replacement image does not match the canvas size
    DimensionMismatch { expected: (u32, u32), actual: (u32, u32) },
    /// Image encoding failed
    Encode(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::IoError(e)
    }
}

impl std::fmt::Display for TextureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::OutOfBounds { x, y, width, height } => {
                write!(f, "pixel ({}, {}) outside {}x{} texture", x, y, width, height)
            }
            TextureError::UnsupportedImage(e) => write!(f, "Unsupported image: {}", e),
            TextureError::DimensionMismatch { expected, actual } => write!(
                f,
                "image is {}x{}, expected {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            TextureError::Encode(e) => write!(f, "Encode error: {}", e),
            TextureError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TextureError {}

/// RGBA pixel buffer with a dirty flag for re-sampling
#[derive(Debug, Clone)]
pub struct SkinTexture {
    image: RgbaImage,
    /// Set by every mutation, cleared by whoever uploads the texture
    dirty: bool,
}

impl SkinTexture {
    /// Allocate a texture filled with one opaque color
    ///
    /// Starts dirty so the first frame uploads it.
    pub fn new_filled(width: u32, height: u32, fill: Color24) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, fill.to_rgba()),
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Check a signed coordinate and convert it to buffer space
    pub fn check_bounds(&self, x: i64, y: i64) -> Result<(u32, u32), TextureError> {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return Err(TextureError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok((x as u32, y as u32))
    }

    /// Read one pixel (full RGBA)
    pub fn get_pixel(&self, x: i64, y: i64) -> Result<Rgba<u8>, TextureError> {
        let (x, y) = self.check_bounds(x, y)?;
        Ok(*self.image.get_pixel(x, y))
    }

    /// Write one pixel, alpha forced opaque
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color24) -> Result<(), TextureError> {
        let (x, y) = self.check_bounds(x, y)?;
        self.image.put_pixel(x, y, color.to_rgba());
        self.dirty = true;
        Ok(())
    }

    /// Reset every pixel to one opaque color
    pub fn clear(&mut self, fill: Color24) {
        let px = fill.to_rgba();
        for p in self.image.pixels_mut() {
            *p = px;
        }
        self.dirty = true;
    }

    /// Replace the whole buffer with already-decoded pixels
    ///
    /// The image must already be at canvas size; see `import::fit_to_canvas`.
    pub fn load_image(&mut self, image: RgbaImage) -> Result<(), TextureError> {
        if image.dimensions() != self.dimensions() {
            return Err(TextureError::DimensionMismatch {
                expected: self.dimensions(),
                actual: image.dimensions(),
            });
        }
        self.image = image;
        self.dirty = true;
        Ok(())
    }

    /// Owned copy of the current pixels, safe to hand to an encoder
    pub fn snapshot(&self) -> RgbaImage {
        self.image.clone()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutable pixel access for bulk operations (flood fill)
    ///
    /// Callers are responsible for calling `mark_dirty` if they change anything.
    pub(super) fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Raw RGBA bytes, row-major, for texture upload
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Return the dirty flag and clear it
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for SkinTexture {
    fn default() -> Self {
        Self::new_filled(DEFAULT_SIZE.0, DEFAULT_SIZE.1, Color24::CANVAS_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color24 = Color24::new(10, 20, 30);
    const B: Color24 = Color24::new(200, 100, 50);

    #[test]
    fn test_new_filled() {
        let tex = SkinTexture::new_filled(8, 4, A);
        assert_eq!(tex.dimensions(), (8, 4));
        assert_eq!(tex.as_raw().len(), 8 * 4 * 4);
        assert!(tex.is_dirty());
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(tex.get_pixel(x, y).unwrap(), Rgba([10, 20, 30, 255]));
            }
        }
    }

    #[test]
    fn test_set_then_get() {
        let mut tex = SkinTexture::new_filled(16, 16, A);
        for (x, y) in [(0, 0), (15, 15), (3, 9), (15, 0), (0, 15)] {
            tex.set_pixel(x, y, B).unwrap();
            assert_eq!(tex.get_pixel(x, y).unwrap(), Rgba([200, 100, 50, 255]));
        }
    }

    #[test]
    fn test_set_pixel_forces_opaque() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([1, 1, 1, 0]));
        img.put_pixel(1, 1, Rgba([9, 9, 9, 128]));
        let mut tex = SkinTexture::new_filled(2, 2, A);
        tex.load_image(img).unwrap();
        tex.set_pixel(1, 1, B).unwrap();
        assert_eq!(tex.get_pixel(1, 1).unwrap()[3], 255);
        assert_eq!(tex.get_pixel(0, 0).unwrap(), Rgba([1, 1, 1, 0]));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut tex = SkinTexture::new_filled(4, 4, A);
        tex.take_dirty();
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 4), (100, 100)] {
            assert!(matches!(tex.get_pixel(x, y), Err(TextureError::OutOfBounds { .. })));
            assert!(matches!(tex.set_pixel(x, y, B), Err(TextureError::OutOfBounds { .. })));
        }
        assert!(!tex.is_dirty());
        assert!(tex.as_raw().chunks(4).all(|p| p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_clear() {
        let mut tex = SkinTexture::new_filled(5, 3, A);
        tex.set_pixel(2, 1, B).unwrap();
        tex.take_dirty();
        tex.clear(B);
        assert!(tex.is_dirty());
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(Color24::from(tex.get_pixel(x, y).unwrap()), B);
            }
        }
    }

    #[test]
    fn test_dirty_flag() {
        let mut tex = SkinTexture::new_filled(2, 2, A);
        assert!(tex.take_dirty());
        assert!(!tex.take_dirty());
        tex.set_pixel(0, 0, B).unwrap();
        assert!(tex.take_dirty());
        let _ = tex.get_pixel(0, 0);
        assert!(!tex.is_dirty());
    }

    #[test]
    fn test_load_image_dimension_mismatch() {
        let mut tex = SkinTexture::new_filled(4, 4, A);
        let err = tex.load_image(RgbaImage::new(8, 4)).unwrap_err();
        assert!(matches!(
            err,
            TextureError::DimensionMismatch { expected: (4, 4), actual: (8, 4) }
        ));
        assert_eq!(Color24::from(tex.get_pixel(0, 0).unwrap()), A);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut tex = SkinTexture::new_filled(2, 2, A);
        let snap = tex.snapshot();
        tex.set_pixel(0, 0, B).unwrap();
        assert_eq!(*snap.get_pixel(0, 0), A.to_rgba());
    }
}
