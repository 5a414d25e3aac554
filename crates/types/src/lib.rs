//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rendering, terminal output, tests, benches).
//!
//! # Screen Dimensions
//!
//! The default canvas matches the classic 40x20 donut:
//!
//! - **Width**: 40 character cells (indexed 0-39)
//! - **Height**: 20 character cells (indexed 0-19)
//!
//! # Rendering Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `theta_step` | 0.07 | Angular step around the main ring |
//! | `phi_step` | 0.02 | Angular step around the tube cross-section |
//! | `ring_offset` | 2.0 | Distance from rotation axis to tube center |
//! | `viewer_distance` | 5.0 | Added to the perspective denominator |
//! | `scale_x` / `scale_y` | 15.0 / 7.0 | Projection scale (≈2:1 for cell aspect) |
//! | `a_step` / `b_step` | 0.07 / 0.03 | Per-frame rotation increments |
//! | `frame_delay_ms` | 50 | Pause between frames (~20 FPS) |
//! | `color_interval_ms` | 500 | Color palette advance interval |
//!
//! The tube cross-section is a unit circle; `ring_offset` is added to cos(θ)
//! so the tube never intersects the rotation axis. With `ring_offset = 2.0`
//! and `viewer_distance = 5.0` the perspective denominator stays strictly
//! positive for every sample, so the whole torus sits in front of the camera.
//!
//! # Examples
//!
//! ```
//! use tui_donut_types::{AnsiColor, RenderConfig, LUMINANCE_RAMP};
//!
//! let cfg = RenderConfig::default();
//! assert_eq!((cfg.width, cfg.height), (40, 20));
//!
//! // Darkest and brightest glyphs of the luminance ramp.
//! assert_eq!(LUMINANCE_RAMP[0], b'.');
//! assert_eq!(LUMINANCE_RAMP[LUMINANCE_RAMP.len() - 1], b'@');
//!
//! // The color palette cycles in a fixed order.
//! assert_eq!(AnsiColor::Red.next(), AnsiColor::Yellow);
//! assert_eq!(AnsiColor::Magenta.next(), AnsiColor::Red);
//! ```

/// Luminance glyphs from darkest to brightest.
///
/// Character density stands in for brightness; index 0 is used for every
/// sample whose surface normal faces away from the light.
pub const LUMINANCE_RAMP: &[u8; 12] = b".,-~:;=!*#$@";

/// Glyph used for cells no surface sample reached.
pub const BLANK_GLYPH: u8 = b' ';

/// Foreground colors cycled across frames, in palette order.
///
/// Kept crossterm-agnostic so the core and tests never link terminal code;
/// the terminal crate maps each variant to an SGR foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColor {
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// The cycling order of the palette (red → yellow → green → cyan → blue →
/// magenta → red ...).
pub const COLOR_PALETTE: [AnsiColor; 6] = [
    AnsiColor::Red,
    AnsiColor::Yellow,
    AnsiColor::Green,
    AnsiColor::Cyan,
    AnsiColor::Blue,
    AnsiColor::Magenta,
];

impl AnsiColor {
    /// The next color in palette order, wrapping at the end.
    pub fn next(&self) -> Self {
        match self {
            AnsiColor::Red => AnsiColor::Yellow,
            AnsiColor::Yellow => AnsiColor::Green,
            AnsiColor::Green => AnsiColor::Cyan,
            AnsiColor::Cyan => AnsiColor::Blue,
            AnsiColor::Blue => AnsiColor::Magenta,
            AnsiColor::Magenta => AnsiColor::Red,
        }
    }

    /// Convert to lowercase string (for logging/tests)
    pub fn as_str(&self) -> &'static str {
        match self {
            AnsiColor::Red => "red",
            AnsiColor::Yellow => "yellow",
            AnsiColor::Green => "green",
            AnsiColor::Cyan => "cyan",
            AnsiColor::Blue => "blue",
            AnsiColor::Magenta => "magenta",
        }
    }
}

/// Named configuration set for the renderer and animation loop.
///
/// The source material shipped two mutually inconsistent constant sets; this
/// struct pins one coherent set (the 40x20 color variant) as `Default` while
/// keeping every knob overridable for tests and experiments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in character cells.
    pub width: usize,
    /// Canvas height in character cells.
    pub height: usize,
    /// Angular step for the main ring sweep (θ).
    pub theta_step: f64,
    /// Angular step for the tube sweep (φ).
    pub phi_step: f64,
    /// Offset added to cos(θ) to keep the tube away from the rotation axis.
    pub ring_offset: f64,
    /// Constant added to the perspective denominator; must exceed the
    /// torus's maximal extent along the view axis.
    pub viewer_distance: f64,
    /// Horizontal projection scale.
    pub scale_x: f64,
    /// Vertical projection scale (roughly half of `scale_x` to compensate
    /// for the 1:2 aspect of terminal cells).
    pub scale_y: f64,
    /// Per-frame increment for the X-axis rotation angle A.
    pub a_step: f64,
    /// Per-frame increment for the Z-axis rotation angle B.
    pub b_step: f64,
    /// Pause between frames, in milliseconds.
    pub frame_delay_ms: u64,
    /// Interval between color palette advances, in milliseconds.
    pub color_interval_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            theta_step: 0.07,
            phi_step: 0.02,
            ring_offset: 2.0,
            viewer_distance: 5.0,
            scale_x: 15.0,
            scale_y: 7.0,
            a_step: 0.07,
            b_step: 0.03,
            frame_delay_ms: 50,
            color_interval_ms: 500,
        }
    }
}

impl RenderConfig {
    /// Horizontal screen-center offset.
    pub fn center_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    /// Vertical screen-center offset.
    pub fn center_y(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_variant() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.width, 40);
        assert_eq!(cfg.height, 20);
        assert_eq!(cfg.theta_step, 0.07);
        assert_eq!(cfg.phi_step, 0.02);
        assert_eq!(cfg.ring_offset, 2.0);
        assert_eq!(cfg.viewer_distance, 5.0);
        assert_eq!(cfg.frame_delay_ms, 50);
    }

    #[test]
    fn palette_order_is_a_single_cycle() {
        let mut c = COLOR_PALETTE[0];
        for expected in COLOR_PALETTE.iter().skip(1) {
            c = c.next();
            assert_eq!(c, *expected);
        }
        assert_eq!(c.next(), COLOR_PALETTE[0]);
    }

    #[test]
    fn ramp_is_twelve_glyphs_dark_to_bright() {
        assert_eq!(LUMINANCE_RAMP.len(), 12);
        assert_eq!(LUMINANCE_RAMP[0], b'.');
        assert_eq!(LUMINANCE_RAMP[11], b'@');
    }
}
