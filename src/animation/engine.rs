//! Transition engine: the entity's finite-state machine.
//!
//! The engine is either idle in a committed [`EntityState`] or running a
//! single [`TransitionRecord`] toward a new one. Requests made while a
//! transition is running are ignored rather than queued or preempting; a
//! transition always runs to completion once started.
//!
//! Timestamps are [`Duration`]s on the caller's animation clock (time since
//! the animator started), so tests can drive the engine with synthetic
//! values.

use std::time::Duration;

use super::durations::DurationTable;
use super::easing::EasingFunction;
use super::state::EntityState;

/// The single live transition of an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRecord {
    /// State the transition started from.
    pub from: EntityState,
    /// State the transition commits to.
    pub to: EntityState,
    /// Animation-clock timestamp at which the transition was requested.
    pub start: Duration,
    /// Total length of the transition.
    pub duration: Duration,
    /// Linear progress in [0, 1].
    pub progress_raw: f32,
    /// `progress_raw` mapped through the engine's easing curve.
    pub progress_eased: f32,
}

/// Read-only view of the engine consumed by parameter interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineSnapshot {
    /// No transition is running.
    Idle(EntityState),
    /// A transition is running.
    Transitioning {
        /// Source state.
        from: EntityState,
        /// Destination state.
        to: EntityState,
        /// Linear progress in [0, 1].
        progress_raw: f32,
        /// Eased progress in [0, 1].
        progress_eased: f32,
    },
}

impl EngineSnapshot {
    /// The state the entity is heading toward: the destination while
    /// transitioning, the current state otherwise.
    #[must_use]
    pub fn heading(&self) -> EntityState {
        match *self {
            Self::Idle(state) => state,
            Self::Transitioning { to, .. } => to,
        }
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EngineState {
    Idle(EntityState),
    Transitioning(TransitionRecord),
}

/// Owns the current state and the live transition, if any.
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    state: EngineState,
    durations: DurationTable,
    easing: EasingFunction,
}

impl TransitionEngine {
    /// Engine idle in [`EntityState::Resting`] with the default duration
    /// table and cubic in/out easing.
    #[must_use]
    pub fn new() -> Self {
        Self::with_durations(DurationTable::default())
    }

    /// Engine using a custom duration table.
    #[must_use]
    pub fn with_durations(durations: DurationTable) -> Self {
        Self {
            state: EngineState::Idle(EntityState::Resting),
            durations,
            easing: EasingFunction::CubicInOut,
        }
    }

    /// Replace the easing curve. Only affects progress computed from now on.
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Request a transition to `target` at animation time `now`.
    ///
    /// Returns `true` if a transition started. Requesting the current state
    /// or requesting anything while a transition is running is a silent
    /// no-op that returns `false`.
    pub fn transition_to(&mut self, target: EntityState, now: Duration) -> bool {
        let current = match self.state {
            EngineState::Idle(current) => current,
            EngineState::Transitioning(record) => {
                log::debug!(
                    "ignoring transition to {target}: {} -> {} in progress",
                    record.from,
                    record.to
                );
                return false;
            }
        };
        if current == target {
            log::debug!("ignoring transition to {target}: already there");
            return false;
        }

        let duration = self.durations.get(current, target);
        log::info!(
            "transition {current} -> {target} started ({}ms)",
            duration.as_millis()
        );
        self.state = EngineState::Transitioning(TransitionRecord {
            from: current,
            to: target,
            start: now,
            duration,
            progress_raw: 0.0,
            progress_eased: 0.0,
        });
        true
    }

    /// Advance the live transition to animation time `now`.
    ///
    /// Commits to the destination state once raw progress reaches 1.
    /// Calling this repeatedly with the same `now` is idempotent, and
    /// progress never moves backwards if `now` does. Returns `true` while a
    /// transition is still running after the call.
    pub fn advance(&mut self, now: Duration) -> bool {
        let EngineState::Transitioning(record) = &mut self.state else {
            return false;
        };

        let raw = if record.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_sub(record.start);
            (elapsed.as_secs_f64() / record.duration.as_secs_f64()).min(1.0)
                as f32
        };
        record.progress_raw = raw.max(record.progress_raw);
        record.progress_eased = self.easing.evaluate(record.progress_raw);

        if record.progress_raw >= 1.0 {
            let to = record.to;
            log::info!("transition {} -> {to} complete", record.from);
            self.state = EngineState::Idle(to);
            return false;
        }
        log::trace!(
            "transition {} -> {} at {:.3}",
            record.from,
            record.to,
            record.progress_raw
        );
        true
    }

    /// The committed state. While transitioning this is still the source.
    #[must_use]
    pub fn current(&self) -> EntityState {
        match self.state {
            EngineState::Idle(state) => state,
            EngineState::Transitioning(record) => record.from,
        }
    }

    /// Destination of the live transition, if any.
    #[must_use]
    pub fn target(&self) -> Option<EntityState> {
        self.record().map(|r| r.to)
    }

    /// Whether a transition is running.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, EngineState::Transitioning(_))
    }

    /// The live transition record, if any.
    #[must_use]
    pub fn record(&self) -> Option<&TransitionRecord> {
        match &self.state {
            EngineState::Idle(_) => None,
            EngineState::Transitioning(record) => Some(record),
        }
    }

    /// Copyable view for this frame's parameter interpolation.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        match self.state {
            EngineState::Idle(state) => EngineSnapshot::Idle(state),
            EngineState::Transitioning(record) => {
                EngineSnapshot::Transitioning {
                    from: record.from,
                    to: record.to,
                    progress_raw: record.progress_raw,
                    progress_eased: record.progress_eased,
                }
            }
        }
    }

    /// The duration table this engine was built with.
    #[must_use]
    pub fn duration_table(&self) -> &DurationTable {
        &self.durations
    }
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new()
    }
}
