//! Paint tools

/// Drawing tool types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SkinTool {
    /// Single-pixel brush
    #[default]
    Brush,
    /// Pick a color from the canvas, then return to the brush
    Eyedropper,
    /// Flood fill
    BucketFill,
}

impl SkinTool {
    pub const ALL: &'static [SkinTool] = &[SkinTool::Brush, SkinTool::Eyedropper, SkinTool::BucketFill];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            SkinTool::Brush => "brush",
            SkinTool::Eyedropper => "picker",
            SkinTool::BucketFill => "bucket",
        }
    }

    /// Tooltip text
    pub fn label(&self) -> &'static str {
        match self {
            SkinTool::Brush => "Brush (B)",
            SkinTool::Eyedropper => "Eyedropper (I)",
            SkinTool::BucketFill => "Fill (F)",
        }
    }

    /// Short text for toolbar buttons
    pub fn short_label(&self) -> &'static str {
        match self {
            SkinTool::Brush => "Brush",
            SkinTool::Eyedropper => "Pick",
            SkinTool::BucketFill => "Fill",
        }
    }

    /// Keyboard shortcut letter
    #[cfg(test)]
    pub fn shortcut(&self) -> char {
        match self {
            SkinTool::Brush => 'B',
            SkinTool::Eyedropper => 'I',
            SkinTool::BucketFill => 'F',
        }
    }

    /// Whether dragging with the button held repeats the action
    pub fn repeats_on_drag(&self) -> bool {
        matches!(self, SkinTool::Brush)
    }
}
