//! Bucket fill
//!
//! Scanline flood fill with an explicit stack. Each popped seed is grown to
//! the full matching run on its row, the run is recolored, and one seed per
//! matching pixel directly above/below the run is pushed. Stale seeds (already
//! recolored through another run) are discarded when popped.

use super::color::Color24;
use super::skin_texture::{SkinTexture, TextureError};

/// Flood fill the 4-connected region around (x, y) with `fill`
///
/// A pixel belongs to the region when all four RGBA channels equal the seed
/// pixel as it was before the fill started. Recolored pixels are opaque.
/// Returns the number of pixels written; 0 when the seed already has the fill
/// color.
pub fn flood_fill(
    texture: &mut SkinTexture,
    x: i64,
    y: i64,
    fill: Color24,
) -> Result<usize, TextureError> {
    let (sx, sy) = texture.check_bounds(x, y)?;
    let (width, height) = (texture.width() as usize, texture.height() as usize);

    let target = texture.image().get_pixel(sx, sy).0;
    let fill = fill.to_rgba().0;
    if target == fill {
        return Ok(0);
    }

    let data: &mut [u8] = texture.image_mut();
    let matches = |data: &[u8], px: usize, py: usize| -> bool {
        let i = (py * width + px) * 4;
        data[i..i + 4] == target
    };

    let mut filled = 0usize;
    let mut stack = vec![(sx as usize, sy as usize)];

    while let Some((cx, cy)) = stack.pop() {
        if !matches(data, cx, cy) {
            continue;
        }

        // Maximal run [west, east) on this row
        let mut west = cx;
        while west > 0 && matches(data, west - 1, cy) {
            west -= 1;
        }
        let mut east = cx + 1;
        while east < width && matches(data, east, cy) {
            east += 1;
        }

        for px in west..east {
            let i = (cy * width + px) * 4;
            data[i..i + 4].copy_from_slice(&fill);
            filled += 1;

            if cy > 0 && matches(data, px, cy - 1) {
                stack.push((px, cy - 1));
            }
            if cy + 1 < height && matches(data, px, cy + 1) {
                stack.push((px, cy + 1));
            }
        }
    }

    if filled > 0 {
        texture.mark_dirty();
    }
    log::debug!("flood fill at ({}, {}) recolored {} pixels", sx, sy, filled);
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    const A: Color24 = Color24::new(170, 170, 170);
    const B: Color24 = Color24::new(255, 0, 0);
    const C: Color24 = Color24::new(0, 0, 255);

    fn color_at(tex: &SkinTexture, x: i64, y: i64) -> Color24 {
        Color24::from(tex.get_pixel(x, y).unwrap())
    }

    /// Texture filled with `A` and a rectangle of `B` at [x0, x1) x [y0, y1)
    fn with_island(w: u32, h: u32, x0: i64, y0: i64, x1: i64, y1: i64) -> SkinTexture {
        let mut tex = SkinTexture::new_filled(w, h, A);
        for y in y0..y1 {
            for x in x0..x1 {
                tex.set_pixel(x, y, B).unwrap();
            }
        }
        tex
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut tex = SkinTexture::new_filled(4, 4, A);
        tex.set_pixel(1, 1, B).unwrap();
        let filled = flood_fill(&mut tex, 0, 0, C).unwrap();
        assert_eq!(filled, 15);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x, y) == (1, 1) { B } else { C };
                assert_eq!(color_at(&tex, x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_fill_inside_island_stays_inside() {
        let mut tex = with_island(10, 8, 2, 2, 7, 6);
        let filled = flood_fill(&mut tex, 4, 3, C).unwrap();
        assert_eq!(filled, 5 * 4);
        for y in 0..8 {
            for x in 0..10 {
                let inside = (2..7).contains(&x) && (2..6).contains(&y);
                assert_eq!(color_at(&tex, x, y), if inside { C } else { A });
            }
        }
    }

    #[test]
    fn test_fill_outside_island_wraps_around_it() {
        let mut tex = with_island(10, 8, 2, 2, 7, 6);
        let filled = flood_fill(&mut tex, 9, 7, C).unwrap();
        assert_eq!(filled, 10 * 8 - 5 * 4);
        assert_eq!(color_at(&tex, 4, 4), B);
        assert_eq!(color_at(&tex, 0, 0), C);
        assert_eq!(color_at(&tex, 8, 4), C);
    }

    #[test]
    fn test_does_not_cross_diagonal_gaps() {
        // Diagonal wall of B: regions touching only at corners are separate
        let mut tex = SkinTexture::new_filled(5, 5, A);
        for i in 0..5 {
            tex.set_pixel(i, i, B).unwrap();
        }
        flood_fill(&mut tex, 4, 0, C).unwrap();
        assert_eq!(color_at(&tex, 3, 0), C);
        assert_eq!(color_at(&tex, 4, 3), C);
        assert_eq!(color_at(&tex, 0, 4), A);
        assert_eq!(color_at(&tex, 0, 1), A);
    }

    #[test]
    fn test_single_isolated_pixel() {
        let mut tex = SkinTexture::new_filled(3, 3, A);
        tex.set_pixel(1, 1, B).unwrap();
        let filled = flood_fill(&mut tex, 1, 1, C).unwrap();
        assert_eq!(filled, 1);
        assert_eq!(color_at(&tex, 1, 1), C);
        for (x, y) in [(0, 1), (2, 1), (1, 0), (1, 2), (0, 0), (2, 2)] {
            assert_eq!(color_at(&tex, x, y), A);
        }
    }

    #[test]
    fn test_same_color_is_noop() {
        let mut tex = with_island(6, 6, 1, 1, 3, 3);
        let before = tex.snapshot();
        tex.take_dirty();
        let filled = flood_fill(&mut tex, 0, 0, A).unwrap();
        assert_eq!(filled, 0);
        assert_eq!(tex.snapshot(), before);
        assert!(!tex.is_dirty());
    }

    #[test]
    fn test_idempotent() {
        let mut once = with_island(12, 9, 3, 2, 8, 7);
        flood_fill(&mut once, 0, 0, C).unwrap();

        let mut twice = with_island(12, 9, 3, 2, 8, 7);
        flood_fill(&mut twice, 0, 0, C).unwrap();
        let second = flood_fill(&mut twice, 0, 0, C).unwrap();

        assert_eq!(second, 0);
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_seed_on_every_border() {
        for (x, y) in [(0, 0), (7, 0), (0, 5), (7, 5), (3, 0), (0, 2)] {
            let mut tex = SkinTexture::new_filled(8, 6, A);
            assert_eq!(flood_fill(&mut tex, x, y, C).unwrap(), 48);
        }
    }

    #[test]
    fn test_out_of_bounds_seed() {
        let mut tex = SkinTexture::new_filled(4, 4, A);
        assert!(matches!(
            flood_fill(&mut tex, 4, 0, C),
            Err(TextureError::OutOfBounds { .. })
        ));
        assert!(matches!(
            flood_fill(&mut tex, 0, -1, C),
            Err(TextureError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_translucent_region_written_opaque() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 0]));
        img.put_pixel(2, 2, Rgba([0, 0, 255, 255]));
        let mut tex = SkinTexture::new_filled(4, 4, A);
        tex.load_image(img).unwrap();

        // Same RGB as the fill but transparent: still a different RGBA value
        let filled = flood_fill(&mut tex, 0, 0, C).unwrap();
        assert_eq!(filled, 15);
        assert!(tex.as_raw().chunks(4).all(|p| p == [0, 0, 255, 255]));
    }

    #[test]
    fn test_matches_exact_rgba_only() {
        let mut img = RgbaImage::from_pixel(3, 1, Rgba([5, 5, 5, 255]));
        img.put_pixel(1, 0, Rgba([5, 5, 5, 254]));
        let mut tex = SkinTexture::new_filled(3, 1, A);
        tex.load_image(img).unwrap();
        assert_eq!(flood_fill(&mut tex, 0, 0, C).unwrap(), 1);
        assert_eq!(tex.get_pixel(2, 0).unwrap(), Rgba([5, 5, 5, 255]));
    }

    #[test]
    fn test_large_region_and_spiral() {
        let mut tex = SkinTexture::new_filled(512, 512, A);
        assert_eq!(flood_fill(&mut tex, 256, 256, C).unwrap(), 512 * 512);

        // Serpentine corridor forces many runs to be revisited through stale seeds
        let mut tex = SkinTexture::new_filled(41, 41, A);
        for row in (1..41).step_by(2) {
            let gap = if (row / 2) % 2 == 0 { 40 } else { 0 };
            for x in 0..41 {
                if x != gap {
                    tex.set_pixel(x, row, B).unwrap();
                }
            }
        }
        let corridor = (0..41)
            .flat_map(|y| (0..41).map(move |x| (x, y)))
            .filter(|&(x, y)| color_at(&tex, x, y) == A)
            .count();
        assert_eq!(flood_fill(&mut tex, 0, 0, C).unwrap(), corridor);
        assert!(tex.as_raw().chunks(4).all(|p| p != A.to_rgba().0));
    }
}
