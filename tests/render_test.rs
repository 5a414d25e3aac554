use tui_donut::core::{render_frame, Frame, Rotation};
use tui_donut::types::{RenderConfig, BLANK_GLYPH, LUMINANCE_RAMP};

#[test]
fn render_at_zero_rotation_is_reproducible_byte_for_byte() {
    let cfg = RenderConfig::default();

    let mut first = Frame::new(cfg.width, cfg.height);
    render_frame(&cfg, Rotation::default(), &mut first);

    // Fresh buffer, same inputs: identical output.
    let mut second = Frame::new(cfg.width, cfg.height);
    render_frame(&cfg, Rotation::default(), &mut second);
    assert_eq!(first.glyphs(), second.glyphs());

    // A dirty buffer is fully overwritten by the reset.
    render_frame(&cfg, Rotation::new(3.0, 1.0), &mut second);
    render_frame(&cfg, Rotation::default(), &mut second);
    assert_eq!(first.glyphs(), second.glyphs());
}

#[test]
fn render_draws_a_ring_facing_the_viewer_at_zero_rotation() {
    let cfg = RenderConfig::default();
    let mut frame = Frame::new(cfg.width, cfg.height);
    render_frame(&cfg, Rotation::default(), &mut frame);

    let drawn = frame
        .glyphs()
        .iter()
        .filter(|&&g| g != BLANK_GLYPH)
        .count();
    assert!(drawn > 50, "expected a substantial ring, got {drawn} cells");

    // At A = B = 0 the torus faces the viewer head-on. Its projected
    // x-extent is at most scale_x * (ring_offset + 1) / (viewer_distance - 1)
    // ≈ 11 cells from center, so the leftmost and rightmost columns stay
    // blank.
    for y in 0..cfg.height as i64 {
        assert_eq!(frame.glyph(0, y), Some(BLANK_GLYPH));
        assert_eq!(frame.glyph(cfg.width as i64 - 1, y), Some(BLANK_GLYPH));
    }
}

#[test]
fn render_emits_only_ramp_glyphs_and_blanks() {
    let cfg = RenderConfig::default();
    let mut frame = Frame::new(cfg.width, cfg.height);

    for step in 0..8 {
        let rot = Rotation::new(step as f64 * 0.9, step as f64 * 0.4);
        render_frame(&cfg, rot, &mut frame);
        for &g in frame.glyphs() {
            assert!(
                g == BLANK_GLYPH || LUMINANCE_RAMP.contains(&g),
                "unexpected glyph {g:?}"
            );
        }
    }
}

#[test]
fn render_respects_custom_dimensions() {
    let cfg = RenderConfig {
        width: 80,
        height: 40,
        scale_x: 30.0,
        scale_y: 14.0,
        ..RenderConfig::default()
    };
    let mut frame = Frame::new(cfg.width, cfg.height);
    render_frame(&cfg, Rotation::new(1.0, 2.0), &mut frame);

    assert_eq!(frame.width(), 80);
    assert_eq!(frame.height(), 40);
    assert!(frame.glyphs().iter().any(|&g| g != BLANK_GLYPH));
}
