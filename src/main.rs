//! Spinning donut runner (default binary).
//!
//! A rotating torus rendered as ASCII art, with depth buffering, lighting,
//! and a slow color cycle. It uses crossterm for terminal control and a pure
//! framebuffer-based renderer (no widget/layout library).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_donut::core::{render_frame, Frame, Rotation};
use tui_donut::term::{ColorCycle, TerminalRenderer};
use tui_donut::types::RenderConfig;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let cfg = RenderConfig::default();
    let mut rotation = Rotation::default();
    let mut frame = Frame::new(cfg.width, cfg.height);
    let mut colors = ColorCycle::new(cfg.color_interval_ms);

    let started = Instant::now();
    let frame_delay = Duration::from_millis(cfg.frame_delay_ms);

    loop {
        let frame_start = Instant::now();

        let now_ms = started.elapsed().as_millis() as u64;
        render_frame(&cfg, rotation, &mut frame);
        term.draw(&frame, colors.color_at(now_ms))?;

        rotation.step(&cfg);

        // Pace the frame; the poll doubles as the quit-key listener (raw
        // mode delivers Ctrl-C as a key event).
        loop {
            let timeout = frame_delay
                .checked_sub(frame_start.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Quit on `q`, Esc, or Ctrl-C.
fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
