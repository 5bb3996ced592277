//! Render boundary: what the core hands to a drawing backend each frame.
//!
//! A backend draws every [`ParticleBatch`] as camera-facing soft circular
//! sprites, additively blended without depth sorting, and every
//! [`GlowShell`] as a translucent fresnel-lit sphere. The core never talks
//! to a GPU itself; [`ParticleInstance`] is `Pod` so a backend can upload
//! `instances` with `bytemuck::cast_slice` as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::animation::EngineSnapshot;
use crate::form::glow::fresnel;
use crate::form::FormKind;

/// Per-particle vertex attributes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World-space position for this frame (including render-only drift).
    pub position: [f32; 3],
    /// Sprite size in world units.
    pub size: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Per-particle random phase in [0, 2π).
    pub phase: f32,
    /// Layer tag: cloud shell index, ring index, or eye index.
    pub layer: u32,
    /// Brightness multiplier in addition to batch intensity.
    pub brightness: f32,
}

/// How a batch composites onto the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// `dst + src * alpha`; order-independent.
    #[default]
    Additive,
}

/// Alpha falloff across a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteFalloff {
    /// `exp(-k r²)`-style soft edge.
    #[default]
    Gaussian,
}

/// Value of a named uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar uniform.
    Scalar(f32),
    /// Linear RGB color uniform.
    Color([f32; 3]),
}

/// Named per-material uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    /// Uniform name as the backend's shader expects it.
    pub name: &'static str,
    /// Value for this frame.
    pub value: UniformValue,
}

impl Uniform {
    /// Scalar uniform.
    #[must_use]
    pub const fn scalar(name: &'static str, value: f32) -> Self {
        Self {
            name,
            value: UniformValue::Scalar(value),
        }
    }

    /// Color uniform.
    #[must_use]
    pub fn color(name: &'static str, value: Vec3) -> Self {
        Self {
            name,
            value: UniformValue::Color(value.to_array()),
        }
    }
}

/// One drawable group of particles sharing a material.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBatch {
    /// Debug label (`"rings"`, `"eyes"` or `"cloud"`).
    pub label: &'static str,
    /// Per-particle attributes.
    pub instances: Vec<ParticleInstance>,
    /// Material uniforms.
    pub uniforms: Vec<Uniform>,
    /// Compositing mode.
    pub blend: BlendMode,
    /// Sprite alpha falloff.
    pub falloff: SpriteFalloff,
}

impl ParticleBatch {
    /// Additive gaussian-sprite batch.
    #[must_use]
    pub fn additive(
        label: &'static str,
        instances: Vec<ParticleInstance>,
        uniforms: Vec<Uniform>,
    ) -> Self {
        Self {
            label,
            instances,
            uniforms,
            blend: BlendMode::Additive,
            falloff: SpriteFalloff::Gaussian,
        }
    }

    /// Look up a uniform by name.
    #[must_use]
    pub fn uniform(&self, name: &str) -> Option<UniformValue> {
        self.uniforms
            .iter()
            .find(|u| u.name == name)
            .map(|u| u.value)
    }

    /// Look up a scalar uniform by name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        match self.uniform(name)? {
            UniformValue::Scalar(v) => Some(v),
            UniformValue::Color(_) => None,
        }
    }
}

/// Translucent enclosing shell lit by view-angle edge brightening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowShell {
    /// Brightness multiplier.
    pub intensity: f32,
    /// Radius multiplier, including breathing.
    pub scale: f32,
    /// Exponent for [`fresnel`].
    pub fresnel_power: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
}

impl GlowShell {
    /// Shell brightness at a surface point: `intensity` scaled by the
    /// fresnel term for this shell's `fresnel_power`.
    ///
    /// A CPU-side reference for backends shading the shell.
    #[must_use]
    pub fn edge_brightness(&self, normal: Vec3, view_dir: Vec3) -> f32 {
        self.intensity * fresnel(normal, view_dir, self.fresnel_power)
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Seconds of animation time.
    pub time: f32,
    /// Engine state this frame was built from.
    pub snapshot: EngineSnapshot,
    /// Form that produced the frame.
    pub form: FormKind,
    /// Camera eye position the frame was oriented for.
    pub camera_eye: [f32; 3],
    /// Particle batches in draw order.
    pub batches: Vec<ParticleBatch>,
    /// Enclosing glow shell.
    pub glow: GlowShell,
}

impl RenderFrame {
    /// Total number of particles across batches.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.batches.iter().map(|b| b.instances.len()).sum()
    }

    /// Find a batch by label.
    #[must_use]
    pub fn batch(&self, label: &str) -> Option<&ParticleBatch> {
        self.batches.iter().find(|b| b.label == label)
    }
}
