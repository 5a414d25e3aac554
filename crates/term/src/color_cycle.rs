//! Time-based color cycling, independent of the rotation state.

use tui_donut_types::{AnsiColor, COLOR_PALETTE};

/// Advances through the color palette on a millisecond timer.
///
/// Takes `now_ms` explicitly instead of reading a clock, so the cycle can be
/// driven with synthetic timestamps in tests.
#[derive(Debug, Clone)]
pub struct ColorCycle {
    interval_ms: u64,
    last_advance_ms: u64,
    index: usize,
    has_started: bool,
}

impl ColorCycle {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_advance_ms: 0,
            index: 0,
            has_started: false,
        }
    }

    /// Current color at `now_ms`, advancing the palette once per elapsed
    /// interval.
    ///
    /// The first call anchors the timer. A long gap advances multiple steps
    /// so the cycle's phase stays tied to wall time, not call frequency.
    /// An interval of 0 disables cycling: the color stays at the first
    /// palette entry.
    pub fn color_at(&mut self, now_ms: u64) -> AnsiColor {
        if !self.has_started {
            self.has_started = true;
            self.last_advance_ms = now_ms;
            return COLOR_PALETTE[self.index];
        }

        if self.interval_ms > 0 {
            let elapsed = now_ms.saturating_sub(self.last_advance_ms);
            let steps = elapsed / self.interval_ms;
            if steps > 0 {
                self.last_advance_ms += steps * self.interval_ms;
                self.index =
                    (self.index + (steps % COLOR_PALETTE.len() as u64) as usize) % COLOR_PALETTE.len();
            }
        }
        COLOR_PALETTE[self.index]
    }
}
