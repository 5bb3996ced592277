//! Orbit camera used for billboarding and view-dependent glow.

/// Turntable orbit camera around the entity center.
pub mod controller;

pub use controller::OrbitCamera;
