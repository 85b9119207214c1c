//! Freehand stroke capture.
//!
//! A [`StrokeSession`] is opened by pointer-down, extended by each pointer
//! move, and closed by pointer-up or leave. Every move draws one independent
//! round-capped segment from the previous anchor and re-anchors at the new
//! position, so consecutive segments read as one continuous line. Samples are
//! joined with straight segments; fast motion shows facets, not curves.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use image::Rgba;

use crate::consts::{INK, STROKE_WIDTH_PX};
use crate::input::Point;
use crate::raster::{DirtyRect, RasterSurface};

/// Pen parameters for a stroke. Caps are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Line width in logical pixels.
    pub width: f64,
    /// Line color.
    pub color: Rgba<u8>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { width: STROKE_WIDTH_PX, color: INK }
    }
}

/// The "drawing active" flag plus the current path anchor.
#[derive(Debug, Clone, Default)]
pub struct StrokeSession {
    active: bool,
    cursor: Option<Point>,
    style: StrokeStyle,
}

impl StrokeSession {
    #[must_use]
    pub fn new(style: StrokeStyle) -> Self {
        Self { active: false, cursor: None, style }
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The point the next segment will start from.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Open a new path at `pos`. Draws nothing.
    pub fn begin(&mut self, pos: Point) {
        self.active = true;
        self.cursor = Some(pos);
    }

    /// Draw from the current anchor to `pos` and re-anchor there.
    ///
    /// No-op when no stroke is active.
    pub fn extend(&mut self, pos: Point, surface: &mut RasterSurface) -> Option<DirtyRect> {
        if !self.active {
            return None;
        }
        let from = self.cursor.replace(pos)?;
        surface.stroke_segment(from, pos, &self.style)
    }

    /// Mark the stroke inactive. The anchor is left in place; the next
    /// [`begin`](Self::begin) replaces it.
    pub fn end(&mut self) {
        self.active = false;
    }
}
