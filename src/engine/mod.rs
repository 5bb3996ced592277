//! The entity animator: transition engine, camera and active form driven by
//! one external tick.

mod command;

use std::time::Duration;

pub use command::EntityCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{EngineSnapshot, EntityState, TransitionEngine};
use crate::camera::OrbitCamera;
use crate::error::AnimusError;
use crate::form::{ActiveForm, FormKind, FrameContext, ParticleForm};
use crate::options::Options;
use crate::render::RenderFrame;

/// Owns everything needed to animate the entity.
///
/// There are no timers or threads: a host loop calls [`tick`](Self::tick)
/// with the elapsed frame time, then [`render_frame`](Self::render_frame)
/// to collect draw data. Within a tick the transition engine is advanced
/// before the form reads its snapshot.
pub struct EntityAnimator {
    options: Options,
    engine: TransitionEngine,
    camera: OrbitCamera,
    form: ActiveForm,
    rng: StdRng,
    /// Animation clock; the sum of all sanitized tick deltas.
    clock: Duration,
}

impl EntityAnimator {
    /// Build an animator from validated options.
    ///
    /// Seeds the RNG from `options.seed` when set, otherwise from entropy.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] if the options fail validation.
    pub fn new(options: Options) -> Result<Self, AnimusError> {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self::with_seed(options, seed)
    }

    /// Build an animator with an explicit RNG seed.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] if the options fail validation.
    pub fn with_seed(options: Options, seed: u64) -> Result<Self, AnimusError> {
        options.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let engine =
            TransitionEngine::with_durations(options.transitions.duration_table())
                .with_easing(options.transitions.easing);
        let camera = OrbitCamera::new(&options.camera);
        let form = ActiveForm::build(options.initial_form, &options, &mut rng)?;
        log::info!(
            "animator ready: {} form, {} particles, seed {seed}",
            form.kind(),
            form.particle_count()
        );
        Ok(Self {
            options,
            engine,
            camera,
            form,
            rng,
            clock: Duration::ZERO,
        })
    }

    /// Advance the whole entity by `dt` seconds.
    ///
    /// Negative, non-finite or unrepresentably large deltas are treated as
    /// zero. The clock saturates instead of overflowing.
    pub fn tick(&mut self, dt: f32) -> EngineSnapshot {
        let step = if dt.is_finite() && dt > 0.0 {
            Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO)
        } else {
            Duration::ZERO
        };
        let dt = if step.is_zero() { 0.0 } else { dt };
        self.clock = self.clock.saturating_add(step);

        let _ = self.engine.advance(self.clock);
        self.camera.update(dt);

        let ctx = FrameContext {
            dt,
            time: self.time(),
            snapshot: self.engine.snapshot(),
            camera_eye: self.camera.eye(),
        };
        self.form.tick(&ctx, &mut self.rng);
        log::trace!("tick dt {dt:.4} -> {:?}", ctx.snapshot);
        ctx.snapshot
    }

    /// Alias of [`tick`](Self::tick).
    pub fn advance(&mut self, dt: f32) -> EngineSnapshot {
        self.tick(dt)
    }

    /// Request a state transition at the current clock.
    ///
    /// Returns `false` when the request is ignored (already in `target`, or
    /// a transition is still running).
    pub fn transition_to(&mut self, target: EntityState) -> bool {
        self.engine.transition_to(target, self.clock)
    }

    /// Switch to another particle form, rebuilding it from the options.
    ///
    /// Returns `Ok(false)` when the resolved form is already active. The
    /// transition engine and camera are unaffected.
    ///
    /// # Errors
    ///
    /// Propagates form construction failures; options are validated up
    /// front, so this does not happen for an animator built by [`Self::new`].
    pub fn select_form(&mut self, kind: FormKind) -> Result<bool, AnimusError> {
        let resolved = kind.resolve();
        if resolved == self.form.kind() {
            return Ok(false);
        }
        self.form = ActiveForm::build(resolved, &self.options, &mut self.rng)?;
        log::info!(
            "switched to {resolved} form ({} particles)",
            self.form.particle_count()
        );
        Ok(true)
    }

    /// Execute a command, returning whether it changed anything.
    ///
    /// # Errors
    ///
    /// Only [`EntityCommand::SelectForm`] can fail, as for
    /// [`Self::select_form`].
    pub fn execute(&mut self, command: EntityCommand) -> Result<bool, AnimusError> {
        match command {
            EntityCommand::TransitionTo(state) => Ok(self.transition_to(state)),
            EntityCommand::ToggleAutoRotate => {
                let _ = self.camera.toggle_auto_rotate();
                Ok(true)
            }
            EntityCommand::SelectForm(kind) => self.select_form(kind),
        }
    }

    /// Draw data for the current frame.
    #[must_use]
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            time: self.time(),
            snapshot: self.engine.snapshot(),
            form: self.form.kind(),
            camera_eye: self.camera.eye().to_array(),
            batches: self.form.render_batches(),
            glow: self.form.glow(),
        }
    }

    /// Seconds of animation time.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.clock.as_secs_f32()
    }

    /// Animation clock.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// The transition engine.
    #[must_use]
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// The committed state.
    #[must_use]
    pub fn state(&self) -> EntityState {
        self.engine.current()
    }

    /// The orbit camera.
    #[must_use]
    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    /// The active form.
    #[must_use]
    pub fn form(&self) -> &ActiveForm {
        &self.form
    }

    /// Options the animator was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
