//! 24-bit paint color
//!
//! The editor paints opaque RGB colors. `Color24` is what the tools, the
//! palette and the config file deal in; the pixel buffer stores full RGBA.

use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque RGB color, 8 bits per channel
///
/// Serializes as its `#rrggbb` hex string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color24 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color24 {
    pub const BLACK: Color24 = Color24::new(0, 0, 0);
    pub const WHITE: Color24 = Color24::new(255, 255, 255);
    /// Background the canvas starts with
    pub const CANVAS_GRAY: Color24 = Color24::new(0xaa, 0xaa, 0xaa);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb` (lowercase)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` or `rrggbb` (either case)
    ///
    /// Returns `None` for anything that isn't exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let packed = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_packed(packed))
    }

    /// Unpack from `0xRRGGBB`
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Fully opaque RGBA pixel
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// Convert to a macroquad color for drawing swatches
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, 255)
    }
}

/// Drops alpha
impl From<Rgba<u8>> for Color24 {
    fn from(px: Rgba<u8>) -> Self {
        Self::new(px[0], px[1], px[2])
    }
}

impl From<Color24> for String {
    fn from(c: Color24) -> Self {
        c.to_hex()
    }
}

impl TryFrom<String> for Color24 {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color24::from_hex(&s).ok_or_else(|| format!("invalid hex color: {:?}", s))
    }
}

impl fmt::Display for Color24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Default swatches offered next to the canvas
pub const DEFAULT_PALETTE: [Color24; 16] = [
    Color24::new(0x00, 0x00, 0x00),
    Color24::new(0xff, 0xff, 0xff),
    Color24::new(0xaa, 0xaa, 0xaa),
    Color24::new(0x55, 0x55, 0x55),
    Color24::new(0xf9, 0xd4, 0xb0), // skin
    Color24::new(0xc6, 0x8e, 0x62),
    Color24::new(0x7a, 0x4a, 0x2a),
    Color24::new(0x3b, 0x24, 0x14), // hair
    Color24::new(0xd8, 0x3a, 0x3a),
    Color24::new(0xf0, 0x9a, 0x2c),
    Color24::new(0xf2, 0xe0, 0x4a),
    Color24::new(0x4c, 0xb0, 0x4c),
    Color24::new(0x2e, 0x8b, 0xc0),
    Color24::new(0x2a, 0x3f, 0x9e),
    Color24::new(0x7d, 0x3c, 0xa8),
    Color24::new(0x00, 0xa8, 0xa8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip_every_color() {
        for packed in 0..=0xff_ff_ffu32 {
            let c = Color24::from_packed(packed);
            let hex = c.to_hex();
            assert_eq!(Color24::from_hex(&hex), Some(c), "{}", hex);
        }
    }

    #[test]
    fn test_to_hex_format() {
        assert_eq!(Color24::new(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Color24::new(0xaa, 0x0b, 0xff).to_hex(), "#aa0bff");
    }

    #[test]
    fn test_from_hex_variants() {
        assert_eq!(Color24::from_hex("#AABBCC"), Some(Color24::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color24::from_hex("aabbcc"), Some(Color24::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(Color24::from_hex("#abc"), None);
        assert_eq!(Color24::from_hex("#gg0000"), None);
        assert_eq!(Color24::from_hex("#+a0000"), None);
        assert_eq!(Color24::from_hex(""), None);
    }

    #[test]
    fn test_rgba_conversion_forces_opaque() {
        let c = Color24::from(Rgba([1, 2, 3, 40]));
        assert_eq!(c, Color24::new(1, 2, 3));
        assert_eq!(c.to_rgba(), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_packed() {
        let c = Color24::from_packed(0x12_34_56);
        assert_eq!(c, Color24::new(0x12, 0x34, 0x56));
        assert_eq!(Color24::from_packed(0xff_00_80), Color24::new(0xff, 0x00, 0x80));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let text = ron::to_string(&Color24::new(0xaa, 0xaa, 0xaa)).unwrap();
        assert_eq!(text, "\"#aaaaaa\"");
        let back: Color24 = ron::from_str("\"#102030\"").unwrap();
        assert_eq!(back, Color24::new(0x10, 0x20, 0x30));
        assert!(ron::from_str::<Color24>("\"nope\"").is_err());
    }
}
