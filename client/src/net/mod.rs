//! Networking for the prediction round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST call and `types` defines the wire schema and the
//! typed outcome the view consumes.

pub mod api;
pub mod types;
