use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EntityState;
use crate::engine::EntityCommand;
use crate::form::FormKind;

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// thinking = "KeyT"
/// toggle_auto_rotate = "KeyO"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Transition to resting.
    Resting,
    /// Transition to thinking.
    Thinking,
    /// Transition to acting.
    Acting,
    /// Toggle camera turntable rotation.
    ToggleAutoRotate,
    /// Show the ring form.
    FormRings,
    /// Show the cloud form.
    FormCloud,
    /// Show the lattice form (planned; falls back to rings).
    FormLattice,
}

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub fn to_command(self) -> EntityCommand {
        match self {
            Self::Resting => EntityCommand::TransitionTo(EntityState::Resting),
            Self::Thinking => {
                EntityCommand::TransitionTo(EntityState::Thinking)
            }
            Self::Acting => EntityCommand::TransitionTo(EntityState::Acting),
            Self::ToggleAutoRotate => EntityCommand::ToggleAutoRotate,
            Self::FormRings => EntityCommand::SelectForm(FormKind::Rings),
            Self::FormCloud => EntityCommand::SelectForm(FormKind::Cloud),
            Self::FormLattice => EntityCommand::SelectForm(FormKind::Lattice),
        }
    }
}
