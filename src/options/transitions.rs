use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::{DurationTable, EasingFunction, EntityState};
use crate::error::{invalid, AnimusError};

/// One row of the transition duration table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DurationEntry {
    /// Source state.
    pub from: EntityState,
    /// Destination state.
    pub to: EntityState,
    /// Transition length in milliseconds.
    pub millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Transition timing: easing curve and per-pair durations.
pub struct TransitionOptions {
    /// Easing curve applied to raw progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Per-pair durations. Unlisted pairs take 1000ms.
    #[schemars(skip)]
    pub durations: Vec<DurationEntry>,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        use EntityState::{Acting, Resting, Thinking};
        let row = |from, to, millis| DurationEntry { from, to, millis };
        Self {
            easing: EasingFunction::CubicInOut,
            durations: vec![
                row(Resting, Thinking, 1500),
                row(Resting, Acting, 1000),
                row(Thinking, Resting, 1200),
                row(Thinking, Acting, 800),
                row(Acting, Resting, 2000),
                row(Acting, Thinking, 1000),
            ],
        }
    }
}

impl TransitionOptions {
    /// Build the read-only lookup table for a transition engine.
    #[must_use]
    pub fn duration_table(&self) -> DurationTable {
        DurationTable::from_entries(self.durations.iter().map(|e| {
            (e.from, e.to, Duration::from_millis(e.millis))
        }))
    }

    /// Reject self-transition rows, which could never be used.
    ///
    /// # Errors
    ///
    /// [`AnimusError::InvalidConfig`] naming the offending row.
    pub fn validate(&self) -> Result<(), AnimusError> {
        match self.durations.iter().find(|e| e.from == e.to) {
            Some(e) => Err(invalid(format!(
                "duration entry {} -> {} is a self-transition",
                e.from, e.to
            ))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_table() {
        assert_eq!(
            TransitionOptions::default().duration_table(),
            DurationTable::default()
        );
    }

    #[test]
    fn self_transition_row_is_rejected() {
        let mut opts = TransitionOptions::default();
        opts.durations.push(DurationEntry {
            from: EntityState::Acting,
            to: EntityState::Acting,
            millis: 5,
        });
        assert!(opts.validate().is_err());
    }
}
