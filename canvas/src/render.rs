//! Rendering: copies raster pixels onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! The raster in [`crate::raster`] is the source of truth; the on-screen canvas
//! only mirrors it, so exports never depend on browser rasterization.

use image::imageops;
use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use crate::raster::{DirtyRect, RasterSurface};

/// Copy the `dirty` region of `surface` to the same position on `ctx`.
///
/// # Errors
///
/// Returns `Err` if `ImageData` construction or `putImageData` fails.
pub fn blit(ctx: &CanvasRenderingContext2d, surface: &RasterSurface, dirty: DirtyRect) -> Result<(), JsValue> {
    if dirty.width == 0 || dirty.height == 0 {
        return Ok(());
    }
    let region = imageops::crop_imm(surface.image(), dirty.x, dirty.y, dirty.width, dirty.height).to_image();
    let data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(region.as_raw()), dirty.width, dirty.height)?;
    ctx.put_image_data(&data, f64::from(dirty.x), f64::from(dirty.y))
}
