//! Reusable UI components for the drawing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `PredictionState` context; the pad pixels are
//! owned by the `canvas` engine mounted inside `DrawPad`.

pub mod draw_pad;
pub mod result_panel;
