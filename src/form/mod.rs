//! Particle forms: the visual bodies the entity can take.
//!
//! Each form owns its particle buffers exclusively and consumes a read-only
//! [`FrameContext`] once per tick. The set of forms is closed, so dispatch
//! goes through the [`ActiveForm`] enum rather than trait objects.

pub mod cloud;
pub mod color;
pub mod eyes;
pub mod glow;
pub mod ring;

use glam::Vec3;
use rand::{Rng, RngCore};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use cloud::{CloudForm, Layer, PerLayer};
pub use ring::RingForm;

use crate::animation::EngineSnapshot;
use crate::error::AnimusError;
use crate::options::Options;
use crate::render::{GlowShell, ParticleBatch};

/// Selectable particle form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Interlocking rotating rings with eye clusters.
    #[default]
    Rings,
    /// Nested density shells in a flow field.
    Cloud,
    /// Planned lattice form; currently shown as rings.
    Lattice,
}

impl FormKind {
    /// The form that is actually built for this selection.
    #[must_use]
    pub fn resolve(self) -> FormKind {
        match self {
            Self::Lattice => {
                log::info!("lattice form is not available yet, showing rings");
                Self::Rings
            }
            other => other,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rings => "rings",
            Self::Cloud => "cloud",
            Self::Lattice => "lattice",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only inputs for one form tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Seconds of animation time.
    pub time: f32,
    /// Engine state, already advanced for this tick.
    pub snapshot: EngineSnapshot,
    /// Camera eye position in world space.
    pub camera_eye: Vec3,
}

/// Shared behavior of every live particle form.
pub trait ParticleForm {
    /// Which form this is.
    fn kind(&self) -> FormKind;

    /// Advance one frame. Randomness comes only from `rng`.
    fn tick(&mut self, ctx: &FrameContext, rng: &mut dyn RngCore);

    /// Particle batches to draw this frame, in draw order.
    fn render_batches(&self) -> Vec<ParticleBatch>;

    /// Enclosing glow shell parameters for this frame.
    fn glow(&self) -> GlowShell;

    /// Total particle count; fixed for the form's lifetime.
    fn particle_count(&self) -> usize;
}

/// The form currently driven by the animator.
#[derive(Debug, Clone)]
pub enum ActiveForm {
    /// Ring form.
    Rings(RingForm),
    /// Cloud form.
    Cloud(CloudForm),
}

impl ActiveForm {
    /// Build the form selected by `kind` from `options`.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] if that form's options are invalid.
    pub fn build<R: Rng + ?Sized>(
        kind: FormKind,
        options: &Options,
        rng: &mut R,
    ) -> Result<Self, AnimusError> {
        match kind.resolve() {
            FormKind::Cloud => Ok(Self::Cloud(CloudForm::new(&options.cloud, rng)?)),
            FormKind::Rings | FormKind::Lattice => Ok(Self::Rings(RingForm::new(
                &options.rings,
                &options.eyes,
                rng,
            )?)),
        }
    }

    fn inner(&self) -> &dyn ParticleForm {
        match self {
            Self::Rings(form) => form,
            Self::Cloud(form) => form,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ParticleForm {
        match self {
            Self::Rings(form) => form,
            Self::Cloud(form) => form,
        }
    }
}

impl ParticleForm for ActiveForm {
    fn kind(&self) -> FormKind {
        self.inner().kind()
    }

    fn tick(&mut self, ctx: &FrameContext, rng: &mut dyn RngCore) {
        self.inner_mut().tick(ctx, rng);
    }

    fn render_batches(&self) -> Vec<ParticleBatch> {
        self.inner().render_batches()
    }

    fn glow(&self) -> GlowShell {
        self.inner().glow()
    }

    fn particle_count(&self) -> usize {
        self.inner().particle_count()
    }
}
