//! Rectangle type for UI layout

/// A rectangle defined by position and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Split horizontally at ratio (0.0 - 1.0), returns (left, right)
    pub fn split_h(&self, ratio: f32) -> (Self, Self) {
        let split_x = self.w * ratio.clamp(0.0, 1.0);
        (
            Self::new(self.x, self.y, split_x, self.h),
            Self::new(self.x + split_x, self.y, self.w - split_x, self.h),
        )
    }

    /// Get a horizontal slice (for toolbars)
    pub fn slice_top(&self, height: f32) -> Self {
        Self::new(self.x, self.y, self.w, height.min(self.h))
    }

    /// Get remaining area after slicing top
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }

    /// Get a horizontal slice from bottom (status bars)
    pub fn slice_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.bottom() - h, self.w, h)
    }

    /// Get remaining area after slicing bottom
    pub fn remaining_after_bottom(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y, self.w, self.h - h)
    }

    /// Largest rect with the given width/height ratio, centered inside this one
    pub fn fit_aspect(&self, aspect: f32) -> Self {
        if aspect <= 0.0 || self.w <= 0.0 || self.h <= 0.0 {
            return Self::new(self.center_x(), self.center_y(), 0.0, 0.0);
        }
        let (w, h) = if self.w / self.h > aspect {
            (self.h * aspect, self.h)
        } else {
            (self.w, self.w / aspect)
        };
        Self::new(self.center_x() - w * 0.5, self.center_y() - h * 0.5, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_h() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let (left, right) = r.split_h(0.3);
        assert!((left.w - 30.0).abs() < 0.001);
        assert!((right.w - 70.0).abs() < 0.001);
        assert!((right.x - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(50.0, 40.0));
        assert!(!r.contains(5.0, 40.0));
        assert!(!r.contains(50.0, 100.0));
        assert!(!r.contains(110.0, 40.0));
    }

    #[test]
    fn test_slices() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(r.slice_top(30.0), Rect::new(0.0, 0.0, 200.0, 30.0));
        assert_eq!(r.remaining_after_top(30.0), Rect::new(0.0, 30.0, 200.0, 70.0));
        assert_eq!(r.slice_bottom(20.0), Rect::new(0.0, 80.0, 200.0, 20.0));
        assert_eq!(r.remaining_after_bottom(200.0).h, 0.0);
    }

    #[test]
    fn test_fit_aspect() {
        let wide = Rect::new(0.0, 0.0, 200.0, 100.0);
        assert_eq!(wide.fit_aspect(1.0), Rect::new(50.0, 0.0, 100.0, 100.0));

        let tall = Rect::new(10.0, 10.0, 100.0, 300.0);
        assert_eq!(tall.fit_aspect(2.0), Rect::new(10.0, 135.0, 100.0, 50.0));

        assert_eq!(Rect::new(0.0, 0.0, 0.0, 10.0).fit_aspect(1.0).w, 0.0);
    }
}
