//! Router wiring.

pub mod common;
pub mod quiz;

pub use common::common_routes;
pub use quiz::quiz_routes;
