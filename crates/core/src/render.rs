//! Render module - the per-frame torus sweep
//!
//! A torus point is P(θ,φ) = (R1 + R2·cos(φ))·(cos θ, sin θ) with the tube
//! rising R2·sin(φ) out of the ring plane; here R2 is 1 and R1 is the
//! config's `ring_offset`. Each frame the surface is swept at fixed angular
//! steps, rotated by A (X axis) and B (Z axis), perspective-projected onto
//! the character grid, and depth-tested into the frame's buffers.
//!
//! All trigonometry for A and B is hoisted out of the sweep: the two angles
//! are fixed for the whole frame while the inner loop runs tens of thousands
//! of samples.

use std::f64::consts::TAU;

use tui_donut_types::{RenderConfig, LUMINANCE_RAMP};

use crate::frame::Frame;
use crate::rotation::Rotation;

/// Map a quantized luminance value to a ramp glyph.
///
/// Negative values mean the surface faces away from the light and collapse
/// to the darkest glyph. The modulo only ever sees positive values, so the
/// negative-remainder trap of `%` can't produce a bad index.
pub fn luminance_glyph(n: i32) -> u8 {
    if n > 0 {
        LUMINANCE_RAMP[n as usize % LUMINANCE_RAMP.len()]
    } else {
        LUMINANCE_RAMP[0]
    }
}

/// Perspective denominator for one sample, before inversion.
///
/// The renderer inlines this computation; it is exposed so tests can sweep
/// the full (θ, φ) grid and assert the configured constants keep it
/// strictly positive (the torus never reaches the camera plane).
pub fn perspective_denominator(cfg: &RenderConfig, rot: Rotation, theta: f64, phi: f64) -> f64 {
    let h = theta.cos() + cfg.ring_offset;
    phi.sin() * h * rot.a.sin() + theta.sin() * rot.a.cos() + cfg.viewer_distance
}

/// Render one frame of the torus at the given rotation angles.
///
/// Pure function of its arguments: resets `frame`, sweeps the surface, and
/// leaves the winning glyph per cell. The caller owns and reuses the frame
/// allocation across frames.
pub fn render_frame(cfg: &RenderConfig, rot: Rotation, frame: &mut Frame) {
    frame.reset();

    let (sin_a, cos_a) = rot.a.sin_cos();
    let (sin_b, cos_b) = rot.b.sin_cos();
    let center_x = cfg.center_x();
    let center_y = cfg.center_y();

    let mut theta = 0.0;
    while theta < TAU {
        let (sin_theta, cos_theta) = theta.sin_cos();
        // Distance from the rotation axis to this slice of the tube.
        let h = cos_theta + cfg.ring_offset;

        let mut phi = 0.0;
        while phi < TAU {
            let (sin_phi, cos_phi) = phi.sin_cos();

            // Inverse depth: larger = nearer. viewer_distance keeps the
            // denominator positive for every (θ, φ).
            let d = 1.0 / (sin_phi * h * sin_a + sin_theta * cos_a + cfg.viewer_distance);
            let t = sin_phi * h * cos_a - sin_theta * sin_a;

            let x = (center_x + cfg.scale_x * d * (cos_phi * h * cos_b - t * sin_b)) as i64;
            let y = (center_y + cfg.scale_y * d * (cos_phi * h * sin_b + t * cos_b)) as i64;

            // Surface normal dotted with the light direction, scaled into
            // the ramp's index range.
            let n = (8.0
                * ((sin_theta * sin_a - sin_phi * cos_theta * cos_a) * cos_b
                    - sin_phi * cos_theta * sin_a
                    - sin_theta * cos_a
                    - cos_phi * cos_theta * sin_b)) as i32;

            frame.plot(x, y, d, luminance_glyph(n));

            phi += cfg.phi_step;
        }
        theta += cfg.theta_step;
    }
}
