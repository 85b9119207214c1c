//! Client-side view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The prediction state is provided as an `RwSignal` context by the root
//! component; the pad's pixels live in the `canvas` engine, not here.

pub mod prediction;
