use glam::{Quat, Vec3};

use crate::options::CameraOptions;

/// Orbit camera circling the entity center.
///
/// Only the eye position matters to the core: eye clusters billboard toward
/// it and glow shells use it as the view direction. Projection, panning and
/// zoom belong to the render adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,
    auto_rotate: bool,
    auto_rotate_speed: f32,
}

impl OrbitCamera {
    /// Camera placed according to `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            orientation: Quat::from_rotation_x(-options.elevation),
            distance: options.distance,
            focus_point: Vec3::ZERO,
            auto_rotate: options.auto_rotate,
            auto_rotate_speed: options.auto_rotate_speed,
        }
    }

    /// Advance turntable rotation about world +Y.
    pub fn update(&mut self, dt: f32) {
        if !self.auto_rotate || dt <= 0.0 {
            return;
        }
        let spin = Quat::from_rotation_y(self.auto_rotate_speed * dt);
        self.orientation = (spin * self.orientation).normalize();
    }

    /// Flip auto-rotation; returns the new setting.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        log::info!(
            "camera auto-rotate {}",
            if self.auto_rotate { "on" } else { "off" }
        );
        self.auto_rotate
    }

    /// Whether turntable rotation is enabled.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// World-space eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.focus_point + self.orientation * Vec3::Z * self.distance
    }

    /// Point the camera looks at.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_sits_at_configured_distance() {
        let cam = OrbitCamera::default();
        assert!((cam.eye().length() - 8.0).abs() < 1e-4);
        assert!(cam.eye().y > 0.0, "elevated above the horizon");
    }

    #[test]
    fn auto_rotate_orbits_around_y() {
        let mut cam = OrbitCamera::default();
        let before = cam.eye();
        cam.update(1.0);
        let after = cam.eye();
        assert!((before.y - after.y).abs() < 1e-4);
        assert!((before.length() - after.length()).abs() < 1e-4);
        assert!(before.distance(after) > 1e-3);
    }

    #[test]
    fn toggled_off_camera_stays_put() {
        let mut cam = OrbitCamera::default();
        assert!(!cam.toggle_auto_rotate());
        let before = cam.eye();
        cam.update(2.0);
        assert_eq!(cam.eye(), before);
        assert!(cam.toggle_auto_rotate());
    }
}
