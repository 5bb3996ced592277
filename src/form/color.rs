//! Exponential color approach shared by all forms.

use glam::Vec3;

/// A color that eases toward a moving target instead of snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorApproach {
    current: Vec3,
}

impl ColorApproach {
    /// Start at `initial`.
    #[must_use]
    pub const fn new(initial: Vec3) -> Self {
        Self { current: initial }
    }

    /// `current = lerp(current, target, dt * rate)`, with the blend factor
    /// capped at 1 so a long frame lands on the target rather than past it.
    pub fn approach(&mut self, target: Vec3, dt: f32, rate: f32) -> Vec3 {
        let t = (dt * rate).clamp(0.0, 1.0);
        self.current = self.current.lerp(target, t);
        self.current
    }

    /// Current color.
    #[must_use]
    pub fn current(&self) -> Vec3 {
        self.current
    }
}
