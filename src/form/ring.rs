//! Ring form: interlocking rings rotating about their own axes.
//!
//! Each ring is sampled once on a circle and then rigidly rotated a little
//! every tick. The rotation is cumulative, so positions compound onto the
//! previous frame's output rather than being recomputed from the base
//! layout; rotation preserves each particle's distance from the ring axis.
//! A radial "breathing" drift is added only when building render data.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::{Rng, RngCore};

use super::color::ColorApproach;
use super::eyes::EyeClusters;
use super::glow::GlowState;
use super::{FormKind, FrameContext, ParticleForm};
use crate::error::AnimusError;
use crate::options::{EyeOptions, RingOptions, RingSpec};
use crate::render::{GlowShell, ParticleBatch, ParticleInstance, Uniform};

/// A single rotating ring.
#[derive(Debug, Clone)]
pub struct Ring {
    axis: Vec3,
    radius: f32,
    base_speed: f32,
    base_positions: Vec<Vec3>,
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
    phases: Vec<f32>,
    color: ColorApproach,
}

impl Ring {
    /// Sample `spec.particle_count` particles evenly around the ring.
    ///
    /// The circle is laid out in the plane perpendicular to +Y and then
    /// tilted so that its normal matches `spec.axis`.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] if `spec` fails validation.
    pub fn new<R: Rng + ?Sized>(
        spec: &RingSpec,
        index: usize,
        options: &RingOptions,
        rng: &mut R,
    ) -> Result<Self, AnimusError> {
        spec.validate(index)?;
        let axis = Vec3::from_array(spec.axis).normalize();
        let tilt = Quat::from_rotation_arc(Vec3::Y, axis);
        let n = spec.particle_count;

        let base_positions: Vec<Vec3> = (0..n)
            .map(|i| {
                let angle = spec.phase_offset + i as f32 / n as f32 * TAU;
                let (sin, cos) = angle.sin_cos();
                tilt * Vec3::new(cos * spec.radius, 0.0, sin * spec.radius)
            })
            .collect();
        let phases = (0..n).map(|_| rng.random_range(0.0..TAU)).collect();
        let sizes = (0..n)
            .map(|_| rng.random_range(options.size_min..=options.size_max))
            .collect();

        Ok(Self {
            axis,
            radius: spec.radius,
            base_speed: spec.base_speed,
            positions: base_positions.clone(),
            base_positions,
            sizes,
            phases,
            color: ColorApproach::new(Vec3::from_array(options.colors.resting)),
        })
    }

    /// Rigidly rotate every particle about the ring axis by `angle`.
    pub fn rotate(&mut self, angle: f32) {
        let rotation = Quat::from_axis_angle(self.axis, angle);
        for p in &mut self.positions {
            *p = rotation * *p;
        }
    }

    /// Distance of `p` from the ring's rotation axis.
    #[must_use]
    pub fn distance_from_axis(&self, p: Vec3) -> f32 {
        (p - self.axis * p.dot(self.axis)).length()
    }

    /// Render-only radial offset for particle `i`.
    fn drift(&self, i: usize, time: f32, spread: f32) -> Vec3 {
        let p = self.positions[i];
        let radial = (p - self.axis * p.dot(self.axis)).normalize_or_zero();
        radial * (time * 2.0 + self.phases[i]).sin() * spread
    }

    /// Normalized rotation axis.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Nominal radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Live (rotated) positions, without drift.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Initial layout.
    #[must_use]
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    /// Current color.
    #[must_use]
    pub fn color(&self) -> Vec3 {
        self.color.current()
    }
}

/// Parameters resolved from the engine snapshot for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrameParams {
    /// Multiplier on each ring's base angular speed.
    pub speed_multiplier: f32,
    /// Render-time radial drift amplitude.
    pub spread: f32,
    /// Sprite opacity.
    pub opacity: f32,
    /// Sprite glow intensity.
    pub pulse_intensity: f32,
}

/// The full ring form: rings, eye clusters and core glow.
#[derive(Debug, Clone)]
pub struct RingForm {
    options: RingOptions,
    rings: Vec<Ring>,
    eyes: EyeClusters,
    core: GlowState,
    params: RingFrameParams,
    time: f32,
}

impl RingForm {
    /// Build every ring from `options`, sampling phases and sizes from
    /// `rng`.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] for any invalid ring.
    pub fn new<R: Rng + ?Sized>(
        options: &RingOptions,
        eyes: &EyeOptions,
        rng: &mut R,
    ) -> Result<Self, AnimusError> {
        options.validate()?;
        let rings = options
            .rings
            .iter()
            .enumerate()
            .map(|(i, spec)| Ring::new(spec, i, options, rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            params: RingFrameParams {
                speed_multiplier: options.speed_multiplier.resting,
                spread: options.spread.resting,
                opacity: options.opacity.resting,
                pulse_intensity: options.pulse_intensity.resting,
            },
            options: options.clone(),
            rings,
            eyes: EyeClusters::new(eyes),
            core: GlowState::new(options.core.clone()),
            time: 0.0,
        })
    }

    /// The rings, in configuration order.
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// The eye clusters.
    #[must_use]
    pub fn eyes(&self) -> &EyeClusters {
        &self.eyes
    }

    /// Parameters resolved on the last tick.
    #[must_use]
    pub fn params(&self) -> RingFrameParams {
        self.params
    }

    fn mean_color(&self) -> Vec3 {
        let sum: Vec3 = self.rings.iter().map(Ring::color).sum();
        sum / self.rings.len().max(1) as f32
    }
}

impl ParticleForm for RingForm {
    fn kind(&self) -> FormKind {
        FormKind::Rings
    }

    fn tick(&mut self, ctx: &FrameContext, _rng: &mut dyn RngCore) {
        let snap = &ctx.snapshot;
        self.params = RingFrameParams {
            speed_multiplier: self.options.speed_multiplier.resolve(snap),
            spread: self.options.spread.resolve(snap),
            opacity: self.options.opacity.resolve(snap),
            pulse_intensity: self.options.pulse_intensity.resolve(snap),
        };
        self.time = ctx.time;

        let target = self.options.colors.heading(snap);
        for ring in &mut self.rings {
            ring.rotate(ctx.dt * ring.base_speed * self.params.speed_multiplier);
            let _ = ring.color.approach(target, ctx.dt, self.options.color_rate);
        }

        self.eyes.tick(ctx);
        let color = self.mean_color();
        self.core.tick(ctx.dt, snap, color);
    }

    fn render_batches(&self) -> Vec<ParticleBatch> {
        let mut instances = Vec::with_capacity(
            self.rings.iter().map(|r| r.positions.len()).sum(),
        );
        for (ring_index, ring) in self.rings.iter().enumerate() {
            let color = ring.color().to_array();
            for (i, p) in ring.positions.iter().enumerate() {
                let p = *p + ring.drift(i, self.time, self.params.spread);
                instances.push(ParticleInstance {
                    position: p.to_array(),
                    size: ring.sizes[i],
                    color,
                    phase: ring.phases[i],
                    layer: ring_index as u32,
                    brightness: 1.0,
                });
            }
        }

        let mut batches = vec![ParticleBatch::additive(
            "rings",
            instances,
            vec![
                Uniform::scalar("u_time", self.time),
                Uniform::scalar("u_opacity", self.params.opacity),
                Uniform::scalar("u_intensity", self.params.pulse_intensity),
                Uniform::scalar("u_spread", self.params.spread),
            ],
        )];

        if self.eyes.particle_count() > 0 {
            let color = self.mean_color();
            batches.push(ParticleBatch::additive(
                "eyes",
                self.eyes.instances(color),
                vec![
                    Uniform::scalar("u_time", self.time),
                    Uniform::scalar("u_intensity", self.params.pulse_intensity),
                    Uniform::color("u_color", color),
                ],
            ));
        }
        batches
    }

    fn glow(&self) -> GlowShell {
        self.core.shell()
    }

    fn particle_count(&self) -> usize {
        self.rings.iter().map(|r| r.positions.len()).sum::<usize>()
            + self.eyes.particle_count()
    }
}
