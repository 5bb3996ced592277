//! Enclosing glow shells: ring-form core and cloud-form heart.

use glam::Vec3;

use crate::animation::EngineSnapshot;
use crate::options::GlowOptions;
use crate::render::GlowShell;

/// View-angle edge brightening: `(1 - |n · v|)^power`.
///
/// Zero when looking straight at the surface, one at grazing angles.
/// Inputs are normalized here; a zero vector yields full brightness.
#[must_use]
pub fn fresnel(normal: Vec3, view_dir: Vec3, power: f32) -> f32 {
    let facing = normal
        .normalize_or_zero()
        .dot(view_dir.normalize_or_zero())
        .abs()
        .min(1.0);
    (1.0 - facing).powf(power)
}

/// Breathing glow shell whose parameters follow the entity state.
#[derive(Debug, Clone)]
pub struct GlowState {
    options: GlowOptions,
    /// Accumulated breathing phase; integrated so rate changes never jump.
    breath_phase: f32,
    shell: GlowShell,
}

impl GlowState {
    /// Idle shell built from `options`.
    #[must_use]
    pub fn new(options: GlowOptions) -> Self {
        Self {
            shell: GlowShell {
                intensity: options.intensity.resting,
                scale: options.scale.resting,
                fresnel_power: options.fresnel_power,
                color: [1.0; 3],
            },
            options,
            breath_phase: 0.0,
        }
    }

    /// Resolve this frame's intensity and breathing scale.
    pub fn tick(&mut self, dt: f32, snapshot: &EngineSnapshot, color: Vec3) {
        let rate = self.options.breathing_rate.resolve(snapshot);
        self.breath_phase =
            (self.breath_phase + rate * dt) % std::f32::consts::TAU;
        let breathing =
            1.0 + self.options.breathing_amplitude * self.breath_phase.sin();
        self.shell = GlowShell {
            intensity: self.options.intensity.resolve(snapshot),
            scale: self.options.scale.resolve(snapshot) * breathing,
            fresnel_power: self.options.fresnel_power,
            color: color.to_array(),
        };
    }

    /// Shell parameters for the current frame.
    #[must_use]
    pub fn shell(&self) -> GlowShell {
        self.shell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EntityState;

    #[test]
    fn fresnel_brighter_at_grazing_angles() {
        let n = Vec3::Z;
        let face_on = fresnel(n, Vec3::Z, 2.5);
        let oblique = fresnel(n, Vec3::new(1.0, 0.0, 1.0), 2.5);
        let grazing = fresnel(n, Vec3::X, 2.5);
        assert!(face_on.abs() < 1e-6);
        assert!(oblique > face_on && oblique < grazing);
        assert!((grazing - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fresnel_ignores_back_facing_sign() {
        let a = fresnel(Vec3::Z, Vec3::new(0.3, 0.0, 1.0), 2.0);
        let b = fresnel(Vec3::Z, Vec3::new(0.3, 0.0, -1.0), 2.0);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn breathing_stays_within_amplitude() {
        let opts = GlowOptions::core();
        let mut glow = GlowState::new(opts.clone());
        let snap = EngineSnapshot::Idle(EntityState::Acting);
        let base = opts.scale.acting;
        for _ in 0..500 {
            glow.tick(0.05, &snap, Vec3::ONE);
            let s = glow.shell();
            assert!((s.scale / base - 1.0).abs() <= opts.breathing_amplitude + 1e-5);
            assert_eq!(s.intensity, opts.intensity.acting);
        }
    }
}
