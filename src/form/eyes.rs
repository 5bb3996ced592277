//! Eye clusters: camera-facing iris patterns floating around the rings.
//!
//! Eight anchors sit at the cube-corner directions around the center. Each
//! hosts the same small iris (a pupil plus concentric rings of dimmer,
//! smaller particles) laid out in a local 2D plane that is re-oriented to
//! face the camera every frame.

use std::f32::consts::TAU;

use glam::{Quat, Vec2, Vec3};

use super::FrameContext;
use crate::animation::{blend_by_state, EntityState};
use crate::options::EyeOptions;
use crate::render::ParticleInstance;

/// Number of eye anchors.
pub const EYE_COUNT: usize = 8;

/// Anchor positions: the eight cube-corner directions at `radius`.
#[must_use]
pub fn eye_anchors(radius: f32) -> [Vec3; EYE_COUNT] {
    let mut anchors = [Vec3::ZERO; EYE_COUNT];
    for (i, anchor) in anchors.iter_mut().enumerate() {
        let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
        *anchor = Vec3::new(sign(1), sign(2), sign(4)).normalize() * radius;
    }
    anchors
}

/// Rotation taking local +Z (the iris normal) toward the camera.
#[must_use]
pub fn billboard(anchor: Vec3, camera_eye: Vec3) -> Quat {
    (camera_eye - anchor)
        .try_normalize()
        .map_or(Quat::IDENTITY, |dir| Quat::from_rotation_arc(Vec3::Z, dir))
}

/// Brightness of eye `index` in a given state at `time`.
///
/// Thinking runs a traveling wave around the eyes (a sequential scan);
/// acting pulses them nearly in unison at high frequency.
#[must_use]
pub fn eye_intensity(
    options: &EyeOptions,
    state: EntityState,
    time: f32,
    index: usize,
) -> f32 {
    let i = index as f32;
    match state {
        EntityState::Resting => options.rest_intensity,
        EntityState::Thinking => {
            let wave = (time * options.scan_speed - i * TAU / EYE_COUNT as f32)
                .sin();
            0.35 + 0.65 * wave.max(0.0)
        }
        EntityState::Acting => {
            0.9 + 0.1 * (time * options.blaze_speed + i * 0.05).sin()
        }
    }
}

/// Local iris layout shared by all eyes.
#[derive(Debug, Clone)]
struct IrisPattern {
    offsets: Vec<Vec2>,
    sizes: Vec<f32>,
    brightness: Vec<f32>,
}

impl IrisPattern {
    fn new(options: &EyeOptions) -> Self {
        let mut offsets = vec![Vec2::ZERO];
        let mut sizes = vec![options.pupil_size];
        let mut brightness = vec![1.0];

        for k in 1..=options.iris_rings {
            let count = options.base_count * k;
            let radius = k as f32 * options.ring_spacing;
            let size = options.pupil_size * options.size_falloff.powi(k as i32);
            let glow = options.brightness_falloff.powi(k as i32);
            // Stagger alternate rings by half a step.
            let stagger = if k % 2 == 0 { 0.0 } else { 0.5 };
            for j in 0..count {
                let angle = (j as f32 + stagger) / count as f32 * TAU;
                offsets.push(Vec2::from_angle(angle) * radius);
                sizes.push(size);
                brightness.push(glow);
            }
        }

        Self {
            offsets,
            sizes,
            brightness,
        }
    }

    fn len(&self) -> usize {
        self.offsets.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct Eye {
    anchor: Vec3,
    orientation: Quat,
    intensity: f32,
}

/// The eight eye clusters of the ring form.
#[derive(Debug, Clone)]
pub struct EyeClusters {
    options: EyeOptions,
    iris: IrisPattern,
    eyes: Vec<Eye>,
}

impl EyeClusters {
    /// Build the clusters; an empty set when eyes are disabled.
    #[must_use]
    pub fn new(options: &EyeOptions) -> Self {
        let eyes = if options.enabled {
            eye_anchors(options.anchor_radius)
                .into_iter()
                .map(|anchor| Eye {
                    anchor,
                    orientation: Quat::IDENTITY,
                    intensity: options.rest_intensity,
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            options: options.clone(),
            iris: IrisPattern::new(options),
            eyes,
        }
    }

    /// Re-orient every eye toward the camera and resolve its intensity.
    pub fn tick(&mut self, ctx: &FrameContext) {
        for (i, eye) in self.eyes.iter_mut().enumerate() {
            eye.orientation = billboard(eye.anchor, ctx.camera_eye);
            eye.intensity = blend_by_state(&ctx.snapshot, |state| {
                eye_intensity(&self.options, state, ctx.time, i)
            });
        }
    }

    /// Number of particles across all eyes.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.eyes.len() * self.iris.len()
    }

    /// Current per-eye intensities.
    #[must_use]
    pub fn intensities(&self) -> Vec<f32> {
        self.eyes.iter().map(|e| e.intensity).collect()
    }

    /// Render attributes for every eye particle.
    #[must_use]
    pub fn instances(&self, color: Vec3) -> Vec<ParticleInstance> {
        let mut out = Vec::with_capacity(self.particle_count());
        for (i, eye) in self.eyes.iter().enumerate() {
            let iris = &self.iris;
            let rows = iris.offsets.iter().zip(&iris.sizes).zip(&iris.brightness);
            for ((offset, &size), &glow) in rows {
                let position = eye.anchor + eye.orientation * offset.extend(0.0);
                out.push(ParticleInstance {
                    position: position.to_array(),
                    size,
                    color: color.to_array(),
                    // Scan phase of the eye, shared by its whole iris.
                    phase: i as f32 * TAU / EYE_COUNT as f32,
                    layer: i as u32,
                    brightness: glow * eye.intensity,
                });
            }
        }
        out
    }
}
