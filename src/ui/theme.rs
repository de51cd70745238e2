//! UI Theme - Shared colors and styling constants

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Header/toolbar background
pub const HEADER_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Panel background behind the canvas and the preview
pub const PANEL_COLOR: Color = Color::new(0.13, 0.13, 0.15, 1.0);

/// Thin borders and separators
pub const BORDER_COLOR: Color = Color::new(0.314, 0.314, 0.314, 1.0);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

/// Warnings in the status line
pub const TEXT_WARN: Color = Color::new(0.95, 0.7, 0.35, 1.0);

/// Active tool highlight
pub const ACCENT_COLOR: Color = Color::new(0.0, 0.75, 0.9, 1.0);

/// Button hover background
pub const BUTTON_HOVER: Color = Color::new(0.196, 0.196, 0.235, 1.0);

/// Button pressed background
pub const BUTTON_PRESSED: Color = Color::new(0.235, 0.235, 0.275, 1.0);

/// Tooltip background
pub const TOOLTIP_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0);

// =============================================================================
// Sizes
// =============================================================================

pub const FONT_SIZE_HEADER: f32 = 14.0;
pub const FONT_SIZE_CONTENT: f32 = 12.0;

pub const TOOLBAR_HEIGHT: f32 = 32.0;
pub const STATUS_HEIGHT: f32 = 22.0;
pub const SWATCH_SIZE: f32 = 20.0;
