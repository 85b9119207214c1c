//! Shared constants for the drawing pad.

use image::Rgba;

// ── Surface ─────────────────────────────────────────────────────

/// Logical edge length of the square drawing surface, in pixels.
pub const CANVAS_SIZE: u32 = 280;

/// Background fill: opaque black.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

// ── Strokes ─────────────────────────────────────────────────────

/// Stroke width in logical pixels.
pub const STROKE_WIDTH_PX: f64 = 12.0;

/// Stroke color: opaque white.
pub const INK: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Width of the anti-aliased fringe around a stroke edge, in pixels.
pub const EDGE_SOFTNESS_PX: f64 = 1.0;

// ── Export ──────────────────────────────────────────────────────

/// Prefix of an exported PNG data URI.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
