//! Per-transition durations.

use std::time::Duration;

use super::state::EntityState;

/// Fallback used for any pair the table does not list.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1000);

/// Read-only mapping from `(from, to)` to a transition duration.
///
/// Unlisted pairs, including `from == to`, resolve to
/// [`DEFAULT_TRANSITION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationTable {
    entries: [[Option<Duration>; 3]; 3],
}

impl DurationTable {
    /// Table with no entries; every lookup returns the default.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: [[None; 3]; 3],
        }
    }

    /// Build a table from `(from, to, duration)` triples. Later entries for
    /// the same pair win.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (EntityState, EntityState, Duration)>,
    ) -> Self {
        let mut table = Self::empty();
        for (from, to, duration) in entries {
            table.entries[from.index()][to.index()] = Some(duration);
        }
        table
    }

    /// Duration for the given pair.
    #[must_use]
    pub fn get(&self, from: EntityState, to: EntityState) -> Duration {
        self.entries[from.index()][to.index()].unwrap_or(DEFAULT_TRANSITION)
    }

    /// Whether the pair has an explicit entry.
    #[must_use]
    pub fn contains(&self, from: EntityState, to: EntityState) -> bool {
        self.entries[from.index()][to.index()].is_some()
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        use EntityState::{Acting, Resting, Thinking};
        let ms = Duration::from_millis;
        Self::from_entries([
            (Resting, Thinking, ms(1500)),
            (Resting, Acting, ms(1000)),
            (Thinking, Resting, ms(1200)),
            (Thinking, Acting, ms(800)),
            (Acting, Resting, ms(2000)),
            (Acting, Thinking, ms(1000)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_lists_all_distinct_pairs() {
        let table = DurationTable::default();
        for from in EntityState::ALL {
            for to in EntityState::ALL {
                assert_eq!(table.contains(from, to), from != to);
            }
        }
    }

    #[test]
    fn resting_to_thinking_is_1500ms() {
        let table = DurationTable::default();
        assert_eq!(
            table.get(EntityState::Resting, EntityState::Thinking),
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn unlisted_pair_falls_back_to_default() {
        let table = DurationTable::empty();
        assert_eq!(
            table.get(EntityState::Acting, EntityState::Resting),
            DEFAULT_TRANSITION
        );
        assert_eq!(
            DurationTable::default()
                .get(EntityState::Thinking, EntityState::Thinking),
            DEFAULT_TRANSITION
        );
    }

    #[test]
    fn later_entries_override() {
        let table = DurationTable::from_entries([
            (
                EntityState::Resting,
                EntityState::Acting,
                Duration::from_millis(10),
            ),
            (
                EntityState::Resting,
                EntityState::Acting,
                Duration::from_millis(20),
            ),
        ]);
        assert_eq!(
            table.get(EntityState::Resting, EntityState::Acting),
            Duration::from_millis(20)
        );
    }
}
