//! Terminal output module.
//!
//! This is the thin I/O layer between the pure renderer and a real terminal.
//! It intentionally stays small: the core produces a finished glyph frame,
//! and this crate only moves it onto the screen.
//!
//! Goals:
//! - Keep `core` deterministic and testable (no terminal types leak into it)
//! - Always restore the terminal on the way out (cursor, wrap, raw mode)
//! - Keep the color cycle clock-free so it can be tested with synthetic
//!   timestamps

pub mod color_cycle;
pub mod renderer;

pub use tui_donut_core as core;
pub use tui_donut_types as types;

pub use color_cycle::ColorCycle;
pub use renderer::TerminalRenderer;
