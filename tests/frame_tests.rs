use tui_donut::core::Frame;
use tui_donut::types::BLANK_GLYPH;

#[test]
fn new_frame_is_fully_blank() {
    let frame = Frame::new(40, 20);
    assert!(frame.glyphs().iter().all(|&g| g == BLANK_GLYPH));
    for y in 0..20 {
        for x in 0..40 {
            assert_eq!(frame.depth(x, y), Some(0.0));
        }
    }
}

#[test]
fn nearest_wins_is_order_independent() {
    // Same two samples fed in both orders: the larger inverse depth wins.
    let mut ab = Frame::new(10, 10);
    ab.plot(5, 5, 0.4, b'n');
    ab.plot(5, 5, 0.7, b'f');

    let mut ba = Frame::new(10, 10);
    ba.plot(5, 5, 0.7, b'f');
    ba.plot(5, 5, 0.4, b'n');

    assert_eq!(ab.glyph(5, 5), Some(b'f'));
    assert_eq!(ba.glyph(5, 5), Some(b'f'));
    assert_eq!(ab.depth(5, 5), Some(0.7));
    assert_eq!(ba.depth(5, 5), Some(0.7));
}

#[test]
fn coordinates_one_past_the_edge_are_rejected() {
    let mut frame = Frame::new(40, 20);

    // Exactly W and exactly H are the first invalid indices.
    assert!(!frame.plot(40, 0, 1.0, b'x'));
    assert!(!frame.plot(0, 20, 1.0, b'x'));
    assert!(frame.glyphs().iter().all(|&g| g == BLANK_GLYPH));

    // The last valid cell is fine.
    assert!(frame.plot(39, 19, 1.0, b'x'));
    assert_eq!(frame.glyph(39, 19), Some(b'x'));
}

#[test]
fn reset_restores_the_initial_state() {
    let mut frame = Frame::new(8, 4);
    for x in 0..8 {
        frame.plot(x, 2, 0.5 + x as f64 * 0.01, b'#');
    }
    frame.reset();

    assert!(frame.glyphs().iter().all(|&g| g == BLANK_GLYPH));
    for y in 0..4 {
        for x in 0..8 {
            assert_eq!(frame.depth(x, y), Some(0.0));
        }
    }
}
