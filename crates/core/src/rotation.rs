//! Rotation module - the animation's only persistent state
//!
//! Two angles, both in radians: A rotates the torus around the X axis, B
//! around the Z axis. The animation loop owns a `Rotation` and advances it
//! once per frame; the renderer takes it by value so frames can be rendered
//! at arbitrary angles in tests.

use tui_donut_types::RenderConfig;

/// Rotation angles for one frame, in radians.
///
/// Both angles grow without bound; sine and cosine are periodic, so wrapping
/// them would change nothing visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    /// Rotation around the X axis.
    pub a: f64,
    /// Rotation around the Z axis.
    pub b: f64,
}

impl Rotation {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Advance both angles by the config's per-frame increments.
    pub fn step(&mut self, cfg: &RenderConfig) {
        self.a += cfg.a_step;
        self.b += cfg.b_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_accumulates_config_increments() {
        let cfg = RenderConfig::default();
        let mut rot = Rotation::default();
        for _ in 0..100 {
            rot.step(&cfg);
        }
        assert!((rot.a - 100.0 * cfg.a_step).abs() < 1e-12);
        assert!((rot.b - 100.0 * cfg.b_step).abs() < 1e-12);
    }

    #[test]
    fn angles_are_never_reset() {
        let cfg = RenderConfig::default();
        let mut rot = Rotation::default();
        let frames = (std::f64::consts::TAU / cfg.a_step) as usize + 10;
        for _ in 0..frames {
            rot.step(&cfg);
        }
        // Well past one full revolution and still monotonic.
        assert!(rot.a > std::f64::consts::TAU);
    }
}
