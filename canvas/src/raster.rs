//! Raster surface: the pixel buffer strokes are drawn into and exported from.
//!
//! The surface is always fully opaque. Fills write alpha 255 and stroke
//! compositing blends only the color channels, so the PNG produced by
//! [`RasterSurface::encode_png`] depends on nothing but the drawn content.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::consts::{BACKGROUND, CANVAS_SIZE, EDGE_SOFTNESS_PX, PNG_DATA_URL_PREFIX};
use crate::input::Point;
use crate::stroke::StrokeStyle;

/// Errors produced while exporting the surface.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// The PNG encoder rejected the buffer.
    #[error("png encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Pixel-aligned region touched by a draw call, clipped to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    /// Smallest rectangle covering both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        Self { x, y, width: right - x, height: bottom - y }
    }
}

/// Fixed-size opaque RGBA bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(CANVAS_SIZE, CANVAS_SIZE)
    }
}

impl RasterSurface {
    /// Create a surface filled with the background color.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, BACKGROUND) }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Region covering the whole surface.
    #[must_use]
    pub fn bounds(&self) -> DirtyRect {
        DirtyRect { x: 0, y: 0, width: self.width(), height: self.height() }
    }

    /// Read one pixel. `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Raw RGBA bytes, row-major.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the backing image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Whether every pixel equals `color`.
    #[must_use]
    pub fn is_filled_with(&self, color: Rgba<u8>) -> bool {
        self.image.pixels().all(|p| *p == color)
    }

    /// Overwrite every pixel with an opaque `color`.
    pub fn fill(&mut self, color: Rgba<u8>) {
        let opaque = Rgba([color.0[0], color.0[1], color.0[2], 255]);
        for pixel in self.image.pixels_mut() {
            *pixel = opaque;
        }
    }

    /// Draw a round-capped line segment from `from` to `to`.
    ///
    /// Coverage is computed per pixel center from the distance to the
    /// segment, with a one-pixel soft edge, and composited source-over.
    /// Returns the touched region, or `None` when nothing on the surface
    /// could be affected.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> Option<DirtyRect> {
        if !from.is_finite() || !to.is_finite() {
            return None;
        }
        let radius = style.width * 0.5;
        if radius <= 0.0 {
            return None;
        }

        let reach = radius + EDGE_SOFTNESS_PX;
        let min_x = (from.x.min(to.x) - reach).floor().max(0.0);
        let min_y = (from.y.min(to.y) - reach).floor().max(0.0);
        let max_x = (from.x.max(to.x) + reach).ceil().min(f64::from(self.width()));
        let max_y = (from.y.max(to.y) + reach).ceil().min(f64::from(self.height()));
        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        let (x0, y0, x1, y1) = (min_x as u32, min_y as u32, max_x as u32, max_y as u32);
        let edge = EDGE_SOFTNESS_PX * 0.5;
        for py in y0..y1 {
            for px in x0..x1 {
                let center = Point::new(f64::from(px) + 0.5, f64::from(py) + 0.5);
                let distance = distance_to_segment(center, from, to);
                let coverage = ((radius + edge - distance) / EDGE_SOFTNESS_PX).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(px, py);
                *pixel = composite(*pixel, style.color, coverage);
            }
        }

        Some(DirtyRect { x: x0, y: y0, width: x1 - x0, height: y1 - y0 })
    }

    /// Encode the surface as a lossless PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RasterError> {
        let mut bytes = Cursor::new(Vec::new());
        self.image.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Encode the surface as a `data:image/png;base64,...` URI.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::Encode`] if PNG encoding fails.
    pub fn to_data_url(&self) -> Result<String, RasterError> {
        let png = self.encode_png()?;
        Ok(format!("{PNG_DATA_URL_PREFIX}{}", STANDARD.encode(png)))
    }
}

fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let cx = a.x + t * dx;
    let cy = a.y + t * dy;
    (p.x - cx).hypot(p.y - cy)
}

/// Source-over blend of `src` onto `dst` at `coverage`. Alpha stays opaque.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn composite(dst: Rgba<u8>, src: Rgba<u8>, coverage: f64) -> Rgba<u8> {
    let mix = |d: u8, s: u8| (f64::from(d) * (1.0 - coverage) + f64::from(s) * coverage).round() as u8;
    Rgba([mix(dst.0[0], src.0[0]), mix(dst.0[1], src.0[1]), mix(dst.0[2], src.0[2]), 255])
}
