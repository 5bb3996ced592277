//! Entity behavioral states and per-state value tables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Named behavioral mode of the entity.
///
/// No ordering is implied between states; only identity matters.
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
pub enum EntityState {
    /// Calm idle mode.
    #[default]
    Resting,
    /// Contemplative mode: tighter spirals, scanning eyes.
    Thinking,
    /// Energetic mode: fast motion, blazing eyes.
    Acting,
}

impl EntityState {
    /// All states, in table order.
    pub const ALL: [Self; 3] = [Self::Resting, Self::Thinking, Self::Acting];

    /// Position of this state in [`PerState`] tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Resting => 0,
            Self::Thinking => 1,
            Self::Acting => 2,
        }
    }

    /// Lowercase display name, used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resting => "resting",
            Self::Thinking => "thinking",
            Self::Acting => "acting",
        }
    }
}

impl std::fmt::Display for EntityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`EntityState`].
///
/// Every tunable that morphs with the entity's mood is stored as a
/// `PerState` table and resolved against the transition engine's snapshot
/// once per frame (see [`crate::animation::interpolation`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
pub struct PerState<T> {
    /// Value while resting.
    pub resting: T,
    /// Value while thinking.
    pub thinking: T,
    /// Value while acting.
    pub acting: T,
}

impl<T: Copy> PerState<T> {
    /// Table from the three per-state values.
    pub const fn new(resting: T, thinking: T, acting: T) -> Self {
        Self {
            resting,
            thinking,
            acting,
        }
    }

    /// Value associated with `state`.
    #[inline]
    pub fn get(&self, state: EntityState) -> T {
        match state {
            EntityState::Resting => self.resting,
            EntityState::Thinking => self.thinking,
            EntityState::Acting => self.acting,
        }
    }

    /// Apply `f` to every entry.
    pub fn map<U: Copy>(&self, mut f: impl FnMut(T) -> U) -> PerState<U> {
        PerState::new(f(self.resting), f(self.thinking), f(self.acting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_resting() {
        assert_eq!(EntityState::default(), EntityState::Resting);
    }

    #[test]
    fn index_matches_all_order() {
        for (i, state) in EntityState::ALL.iter().enumerate() {
            assert_eq!(state.index(), i);
        }
    }

    #[test]
    fn per_state_lookup() {
        let table = PerState::new(1.0, 2.0, 3.0);
        assert_eq!(table.get(EntityState::Resting), 1.0);
        assert_eq!(table.get(EntityState::Thinking), 2.0);
        assert_eq!(table.get(EntityState::Acting), 3.0);
        assert_eq!(table.map(|v| v * 10.0).get(EntityState::Acting), 30.0);
    }

    #[test]
    fn state_serializes_snake_case() {
        let json = serde_json::to_string(&EntityState::Thinking).unwrap();
        assert_eq!(json, "\"thinking\"");
    }
}
