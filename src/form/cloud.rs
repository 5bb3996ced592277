//! Cloud form: three nested density shells in a bounded flow field.
//!
//! Every tick each particle orbits the vertical axis, spirals inward, bobs,
//! drifts toward the center and picks up a little random jitter. A soft
//! containment clamp then pulls any particle that escaped its shell's
//! contracted limit back to 95% of that limit.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::{Rng, RngCore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::color::ColorApproach;
use super::glow::GlowState;
use super::{FormKind, FrameContext, ParticleForm};
use crate::error::AnimusError;
use crate::options::{CloudOptions, ShellSpec};
use crate::render::{GlowShell, ParticleBatch, ParticleInstance, Uniform};

/// Density shell a cloud particle belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Dense inner shell.
    Core,
    /// Middle shell.
    Mid,
    /// Sparse outer shell.
    Edge,
}

impl Layer {
    /// All layers, core outward.
    pub const ALL: [Layer; 3] = [Layer::Core, Layer::Mid, Layer::Edge];

    /// Shell index `s` (0, 1, 2) used by the flow field.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Core => 0,
            Self::Mid => 1,
            Self::Edge => 2,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Mid => "mid",
            Self::Edge => "edge",
        }
    }
}

/// One value per cloud layer.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
pub struct PerLayer<T> {
    /// Core shell value.
    pub core: T,
    /// Mid shell value.
    pub mid: T,
    /// Edge shell value.
    pub edge: T,
}

impl<T> PerLayer<T> {
    /// Build from the three layer values.
    #[must_use]
    pub const fn new(core: T, mid: T, edge: T) -> Self {
        Self { core, mid, edge }
    }

    /// Borrow the value for `layer`.
    #[must_use]
    pub fn get(&self, layer: Layer) -> &T {
        match layer {
            Layer::Core => &self.core,
            Layer::Mid => &self.mid,
            Layer::Edge => &self.edge,
        }
    }

    fn get_mut(&mut self, layer: Layer) -> &mut T {
        match layer {
            Layer::Core => &mut self.core,
            Layer::Mid => &mut self.mid,
            Layer::Edge => &mut self.edge,
        }
    }
}

/// Uniform direction on the unit sphere: `z ~ U[-1, 1]`, `θ ~ U[0, 2π)`.
fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let z: f32 = rng.random_range(-1.0..=1.0);
    let theta: f32 = rng.random_range(0.0..TAU);
    let ring = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(ring * theta.cos(), z, ring * theta.sin())
}

/// Sample a point in the radius band `[inner, outer)` of `shell`.
fn sample_in_band<R: Rng + ?Sized>(shell: &ShellSpec, rng: &mut R) -> Vec3 {
    let r = rng.random_range(shell.inner_radius..shell.outer_radius);
    random_direction(rng) * r
}

/// Flow-field parameters resolved for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudFrameParams {
    /// Orbital flow rate.
    pub flow_speed: f32,
    /// Containment multiplier on each shell's outer radius.
    pub contraction: f32,
    /// Sprite intensity.
    pub intensity: f32,
    /// Inward spiral pull.
    pub spiral_strength: f32,
    /// Per-axis jitter amplitude.
    pub chaos: f32,
}

/// The cloud form.
#[derive(Debug, Clone)]
pub struct CloudForm {
    options: CloudOptions,
    base_positions: Vec<Vec3>,
    positions: Vec<Vec3>,
    layers: Vec<Layer>,
    phases: Vec<f32>,
    colors: PerLayer<ColorApproach>,
    heart: GlowState,
    params: CloudFrameParams,
    time: f32,
}

impl CloudForm {
    /// Sample every shell from `options` using `rng`.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] for an invalid band or an empty cloud.
    pub fn new<R: Rng + ?Sized>(
        options: &CloudOptions,
        rng: &mut R,
    ) -> Result<Self, AnimusError> {
        options.validate()?;
        let total = options.particle_count();
        let mut base_positions = Vec::with_capacity(total);
        let mut layers = Vec::with_capacity(total);
        let mut phases = Vec::with_capacity(total);

        for layer in Layer::ALL {
            let shell = options.shells.get(layer);
            for _ in 0..shell.count {
                base_positions.push(sample_in_band(shell, rng));
                layers.push(layer);
                phases.push(rng.random_range(0.0..TAU));
            }
        }

        let initial = |layer: Layer| {
            ColorApproach::new(Vec3::from_array(
                options.colors.get(layer).resting,
            ))
        };
        Ok(Self {
            params: CloudFrameParams {
                flow_speed: options.flow_speed.resting,
                contraction: options.contraction.resting,
                intensity: options.intensity.resting,
                spiral_strength: options.spiral_strength.resting,
                chaos: options.chaos.resting,
            },
            colors: PerLayer::new(
                initial(Layer::Core),
                initial(Layer::Mid),
                initial(Layer::Edge),
            ),
            heart: GlowState::new(options.heart.clone()),
            options: options.clone(),
            positions: base_positions.clone(),
            base_positions,
            layers,
            phases,
            time: 0.0,
        })
    }

    /// Current positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Positions as sampled at construction.
    #[must_use]
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    /// Layer of every particle, parallel to [`Self::positions`].
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Parameters resolved on the last tick.
    #[must_use]
    pub fn params(&self) -> CloudFrameParams {
        self.params
    }

    /// Containment radius of `layer` under the current contraction.
    #[must_use]
    pub fn containment_radius(&self, layer: Layer) -> f32 {
        self.options.shells.get(layer).outer_radius * self.params.contraction
    }

    /// Current color of `layer`.
    #[must_use]
    pub fn layer_color(&self, layer: Layer) -> Vec3 {
        self.colors.get(layer).current()
    }

    fn step_particle(
        &self,
        i: usize,
        p: Vec3,
        dt: f32,
        rng: &mut dyn RngCore,
    ) -> Vec3 {
        let layer = self.layers[i];
        let s = layer.index() as f32;
        let CloudFrameParams {
            flow_speed: flow,
            spiral_strength: spiral,
            chaos,
            ..
        } = self.params;

        let horizontal = Vec2::new(p.x, p.z);
        let angle = horizontal.y.atan2(horizontal.x) + flow * (0.5 + s * 0.3) * dt;
        let r = (horizontal.length() - spiral * dt * (s + 1.0) * 0.1).max(0.0);
        let (sin, cos) = angle.sin_cos();
        let y = p.y + (self.time * 2.0 + i as f32 * 0.1).sin() * 0.002 * flow;
        let mut p = Vec3::new(cos * r, y, sin * r);

        p -= p * self.options.centering * flow * dt;

        p += Vec3::new(
            rng.random::<f32>() - 0.5,
            rng.random::<f32>() - 0.5,
            rng.random::<f32>() - 0.5,
        ) * chaos;

        let limit = self.containment_radius(layer);
        let distance = p.length();
        if distance > limit {
            p *= limit / distance * 0.95;
        }
        p
    }
}

impl ParticleForm for CloudForm {
    fn kind(&self) -> FormKind {
        FormKind::Cloud
    }

    fn tick(&mut self, ctx: &FrameContext, rng: &mut dyn RngCore) {
        let snap = &ctx.snapshot;
        self.params = CloudFrameParams {
            flow_speed: self.options.flow_speed.resolve(snap),
            contraction: self.options.contraction.resolve(snap),
            intensity: self.options.intensity.resolve(snap),
            spiral_strength: self.options.spiral_strength.resolve(snap),
            chaos: self.options.chaos.resolve(snap),
        };
        self.time = ctx.time;

        let mut positions = std::mem::take(&mut self.positions);
        for (i, p) in positions.iter_mut().enumerate() {
            *p = self.step_particle(i, *p, ctx.dt, rng);
        }
        self.positions = positions;

        for layer in Layer::ALL {
            let target = self.options.colors.get(layer).heading(snap);
            let rate = self.options.color_rate;
            let _ = self.colors.get_mut(layer).approach(target, ctx.dt, rate);
        }

        let heart_color = self.layer_color(Layer::Core);
        self.heart.tick(ctx.dt, snap, heart_color);
        log::trace!(
            "cloud tick: flow {:.3} contraction {:.3}",
            self.params.flow_speed,
            self.params.contraction
        );
    }

    fn render_batches(&self) -> Vec<ParticleBatch> {
        let instances = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let layer = self.layers[i];
                ParticleInstance {
                    position: p.to_array(),
                    size: self.options.shells.get(layer).size,
                    color: self.layer_color(layer).to_array(),
                    phase: self.phases[i],
                    layer: layer.index() as u32,
                    brightness: 1.0,
                }
            })
            .collect();

        vec![ParticleBatch::additive(
            "cloud",
            instances,
            vec![
                Uniform::scalar("u_time", self.time),
                Uniform::scalar("u_intensity", self.params.intensity),
                Uniform::scalar("u_flow", self.params.flow_speed),
                Uniform::scalar("u_contraction", self.params.contraction),
                Uniform::color("u_core_color", self.layer_color(Layer::Core)),
            ],
        )]
    }

    fn glow(&self) -> GlowShell {
        self.heart.shell()
    }

    fn particle_count(&self) -> usize {
        self.positions.len()
    }
}
