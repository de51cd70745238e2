//! Image import and export
//!
//! Decodes user images, fits them to the canvas size, and encodes the
//! canvas back to PNG.

use image::{imageops::FilterType, ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use super::skin_texture::{SkinTexture, TextureError};

/// How to fit an imported image whose size differs from the canvas
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ResizeMode {
    /// Stretch/squish to exactly the canvas size regardless of aspect ratio
    #[default]
    Stretch,
    /// Scale to fit within the canvas maintaining aspect ratio, pad with transparent
    FitPad,
    /// Scale to cover the canvas, crop edges that exceed
    CropCenter,
}

impl ResizeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ResizeMode::Stretch => "Stretch",
            ResizeMode::FitPad => "Fit & Pad",
            ResizeMode::CropCenter => "Crop",
        }
    }

    #[cfg(test)]
    pub const ALL: &'static [ResizeMode] = &[
        ResizeMode::Stretch,
        ResizeMode::FitPad,
        ResizeMode::CropCenter,
    ];
}

/// Decode any supported image format to RGBA
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, TextureError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| TextureError::UnsupportedImage(e.to_string()))?;
    Ok(img.to_rgba8())
}

/// Resize an image to exactly `width` x `height`
///
/// Pixel art is scaled with nearest-neighbour so hard edges survive.
/// Images already at the target size are returned unchanged.
pub fn fit_to_canvas(img: RgbaImage, width: u32, height: u32, mode: ResizeMode) -> RgbaImage {
    let (src_w, src_h) = img.dimensions();
    if src_w == 0 || src_h == 0 {
        return RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    }
    if (src_w, src_h) == (width, height) {
        return img;
    }

    let sx = width as f32 / src_w as f32;
    let sy = height as f32 / src_h as f32;

    match mode {
        ResizeMode::Stretch => image::imageops::resize(&img, width, height, FilterType::Nearest),
        ResizeMode::FitPad => {
            let scale = sx.min(sy);
            let new_w = ((src_w as f32 * scale).round() as u32).clamp(1, width);
            let new_h = ((src_h as f32 * scale).round() as u32).clamp(1, height);
            let scaled = image::imageops::resize(&img, new_w, new_h, FilterType::Nearest);

            let mut result = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
            let offset_x = (width - new_w) / 2;
            let offset_y = (height - new_h) / 2;
            image::imageops::overlay(&mut result, &scaled, offset_x as i64, offset_y as i64);
            result
        }
        ResizeMode::CropCenter => {
            let scale = sx.max(sy);
            let new_w = ((src_w as f32 * scale).round() as u32).max(width);
            let new_h = ((src_h as f32 * scale).round() as u32).max(height);
            let scaled = image::imageops::resize(&img, new_w, new_h, FilterType::Nearest);

            let crop_x = (new_w - width) / 2;
            let crop_y = (new_h - height) / 2;
            image::imageops::crop_imm(&scaled, crop_x, crop_y, width, height).to_image()
        }
    }
}

/// Decode `bytes` and load them into `texture`, resizing as needed
pub fn import_into(
    texture: &mut SkinTexture,
    bytes: &[u8],
    mode: ResizeMode,
) -> Result<(), TextureError> {
    let decoded = decode_image(bytes)?;
    let (w, h) = texture.dimensions();
    log::info!(
        "importing {}x{} image into {}x{} canvas ({})",
        decoded.width(),
        decoded.height(),
        w,
        h,
        mode.label()
    );
    texture.load_image(fit_to_canvas(decoded, w, h, mode))
}

/// Encode a snapshot as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, TextureError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| TextureError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::Color24;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        encode_png(img).unwrap()
    }

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 128])
            }
        })
    }

    #[test]
    fn test_unsupported_bytes() {
        let mut tex = SkinTexture::new_filled(4, 4, Color24::CANVAS_GRAY);
        tex.take_dirty();
        let err = import_into(&mut tex, b"definitely not an image", ResizeMode::Stretch).unwrap_err();
        assert!(matches!(err, TextureError::UnsupportedImage(_)));
        assert!(!tex.is_dirty());
    }

    #[test]
    fn test_png_round_trip_keeps_alpha() {
        let img = checker(6, 5);
        assert_eq!(decode_image(&png_bytes(&img)).unwrap(), img);
    }

    #[test]
    fn test_import_same_size_is_exact() {
        let img = checker(8, 8);
        let mut tex = SkinTexture::new_filled(8, 8, Color24::CANVAS_GRAY);
        import_into(&mut tex, &png_bytes(&img), ResizeMode::FitPad).unwrap();
        assert_eq!(tex.snapshot(), img);
        assert!(tex.is_dirty());
    }

    #[test]
    fn test_import_resizes_to_canvas() {
        let mut tex = SkinTexture::new_filled(64, 64, Color24::CANVAS_GRAY);
        for mode in ResizeMode::ALL {
            import_into(&mut tex, &png_bytes(&checker(128, 32)), *mode).unwrap();
            assert_eq!(tex.dimensions(), (64, 64));
        }
    }

    #[test]
    fn test_stretch_doubles_pixels() {
        let src = RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgba([255, 0, 0, 255]) } else { Rgba([0, 0, 255, 255]) }
        });
        let out = fit_to_canvas(src, 4, 2, ResizeMode::Stretch);
        assert_eq!(*out.get_pixel(0, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(1, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(2, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(3, 1), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_fit_pad_leaves_transparent_border() {
        let src = RgbaImage::from_pixel(4, 2, Rgba([9, 9, 9, 255]));
        let out = fit_to_canvas(src, 4, 4, ResizeMode::FitPad);
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*out.get_pixel(0, 1), Rgba([9, 9, 9, 255]));
        assert_eq!(*out.get_pixel(3, 2), Rgba([9, 9, 9, 255]));
        assert_eq!(*out.get_pixel(3, 3), Rgba([0, 0, 0, 0]));
    }
}
