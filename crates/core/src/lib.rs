//! Core rendering module - pure, deterministic, and testable
//!
//! This module contains the whole software rasterization pipeline for the
//! spinning torus. It has **zero dependencies** on UI, terminals, or I/O,
//! making it:
//!
//! - **Deterministic**: Same config and angles produce an identical frame
//! - **Testable**: Every stage (projection, depth test, shading) is unit-tested
//! - **Portable**: Can render in any environment (terminal, tests, benches)
//!
//! # Module Structure
//!
//! - [`frame`]: paired depth/glyph buffers with the nearest-wins write rule
//! - [`render`]: the per-frame torus sweep, projection, and luminance shading
//! - [`rotation`]: the two rotation angles advanced once per frame
//!
//! # Pipeline
//!
//! Each frame sweeps the torus surface with two nested angle loops (θ around
//! the main ring, φ around the tube), rotates every sample by the frame's
//! angles A and B, projects it to screen space with a perspective divide, and
//! resolves overlapping samples with an inverse-depth buffer where larger
//! means nearer. The winning sample's surface normal is dotted with a fixed
//! light direction and quantized into a 12-glyph luminance ramp.
//!
//! # Example
//!
//! ```
//! use tui_donut_core::{render_frame, Frame, Rotation};
//! use tui_donut_types::RenderConfig;
//!
//! let cfg = RenderConfig::default();
//! let mut frame = Frame::new(cfg.width, cfg.height);
//! render_frame(&cfg, Rotation::default(), &mut frame);
//!
//! // The torus covers a good chunk of a 40x20 canvas.
//! assert!(frame.rows().any(|row| row.iter().any(|&g| g != b' ')));
//! ```

pub mod frame;
pub mod render;
pub mod rotation;

pub use tui_donut_types as types;

// Re-export commonly used items for convenience
pub use frame::Frame;
pub use render::{luminance_glyph, render_frame};
pub use rotation::Rotation;
