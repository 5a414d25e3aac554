//! Frame module - paired depth and glyph buffers
//!
//! A frame is two dense row-major grids with identical dimensions: an
//! inverse-depth buffer (`f64`, larger = nearer to the viewer) and an ASCII
//! glyph buffer. They are always reset together and written together through
//! a single nearest-wins rule, so a glyph cell can never disagree with its
//! depth cell.

use tui_donut_types::BLANK_GLYPH;

/// One frame's worth of depth-buffered ASCII cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    /// Inverse depth of the nearest sample written so far; 0.0 = empty.
    depth: Vec<f64>,
    /// Row-major glyph cells, `BLANK_GLYPH` where nothing was drawn.
    glyphs: Vec<u8>,
}

impl Frame {
    /// Create a frame with all depth cells at 0.0 and all glyphs blank.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width * height;
        Self {
            width,
            height,
            depth: vec![0.0; len],
            glyphs: vec![BLANK_GLYPH; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset both buffers for a new frame.
    ///
    /// Every depth cell becomes 0.0 (lower than any attainable inverse depth)
    /// and every glyph cell becomes blank. Reuses the existing allocations.
    pub fn reset(&mut self) {
        self.depth.fill(0.0);
        self.glyphs.fill(BLANK_GLYPH);
    }

    /// Calculate flat index from (x, y) cell coordinates.
    #[inline(always)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x >= self.width as i64 || y < 0 || y >= self.height as i64 {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Glyph at (x, y), or `None` if out of bounds.
    pub fn glyph(&self, x: i64, y: i64) -> Option<u8> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Inverse depth at (x, y), or `None` if out of bounds.
    pub fn depth(&self, x: i64, y: i64) -> Option<f64> {
        self.index(x, y).map(|i| self.depth[i])
    }

    /// Write a sample through the nearest-wins rule.
    ///
    /// The cell is overwritten only when `inv_depth` strictly exceeds the
    /// stored value; ties keep the incumbent. Out-of-bounds coordinates are
    /// silently discarded. Returns whether the sample was written.
    pub fn plot(&mut self, x: i64, y: i64, inv_depth: f64, glyph: u8) -> bool {
        match self.index(x, y) {
            Some(i) if inv_depth > self.depth[i] => {
                self.depth[i] = inv_depth;
                self.glyphs[i] = glyph;
                true
            }
            _ => false,
        }
    }

    /// Iterate over glyph rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.glyphs.chunks_exact(self.width)
    }

    /// All glyph cells in row-major order.
    pub fn glyphs(&self) -> &[u8] {
        &self.glyphs
    }
}
