//! Plot state: data, viewport, gestures and measurements.

pub mod dataset;
pub mod domain;
pub mod drag;
pub mod loader;
pub mod measurement;
pub mod overlay;
pub mod session;
pub mod viewport;
