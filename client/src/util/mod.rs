//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from component logic. Both are
//! compiled only for the hydrated build.

pub mod notify;
pub mod pad_input;
