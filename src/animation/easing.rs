//! Easing functions for state transitions.
//!
//! All functions map normalized progress in [0, 1] to eased progress in
//! [0, 1] with fixed points at both ends.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing curve applied to raw transition progress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Symmetric cubic ease-in/ease-out: zero slope at both ends.
    #[default]
    CubicInOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => ease_in_out_cubic(t),
        }
    }
}

/// Standard cubic in/out: `4t³` below the midpoint, `1 - (2 - 2t)³ / 2`
/// above it.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
