//! Session-scoped services: one unit-of-work per call, accessor errors
//! passed through unchanged.

pub mod answer;
pub mod question;
