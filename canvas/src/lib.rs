//! Drawing pad engine for handwritten digit capture.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! pixels of the pad: translating raw pointer and touch positions into
//! canvas-local coordinates, drawing freehand strokes into an opaque RGBA
//! raster, and exporting that raster as a PNG data URI. The host Leptos layer
//! only wires DOM events to the [`engine::Pad`] and submits exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level pad and testable [`engine::PadCore`] |
//! | [`input`] | Pointer samples and client-to-canvas coordinate mapping |
//! | [`stroke`] | Stroke session and pen style |
//! | [`raster`] | Opaque RGBA surface, segment rasterizer, PNG export |
//! | [`render`] | Blits raster regions to a `CanvasRenderingContext2d` |
//! | [`consts`] | Surface size, colors, stroke width |

pub mod consts;
pub mod engine;
pub mod input;
pub mod raster;
pub mod render;
pub mod stroke;
