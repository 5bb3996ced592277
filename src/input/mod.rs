//! Thin input adapter: key strings to entity commands.
//!
//! Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyT"`,
//! `"Digit2"`, ...). The adapter never touches the animator directly; it
//! only produces [`EntityCommand`]s for
//! [`EntityAnimator::execute`](crate::engine::EntityAnimator::execute).

mod keyboard;

pub use keyboard::KeyAction;

use crate::engine::EntityCommand;
use crate::options::KeybindingOptions;

/// Look up a key press and return the corresponding command, if bound.
#[must_use]
pub fn handle_key_press(
    bindings: &KeybindingOptions,
    key: &str,
) -> Option<EntityCommand> {
    bindings.lookup(key).map(KeyAction::to_command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::EntityState;
    use crate::form::FormKind;

    #[test]
    fn default_keys_map_to_commands() {
        let bindings = KeybindingOptions::default();
        assert_eq!(
            handle_key_press(&bindings, "KeyT"),
            Some(EntityCommand::TransitionTo(EntityState::Thinking))
        );
        assert_eq!(
            handle_key_press(&bindings, "KeyO"),
            Some(EntityCommand::ToggleAutoRotate)
        );
        assert_eq!(
            handle_key_press(&bindings, "Digit2"),
            Some(EntityCommand::SelectForm(FormKind::Cloud))
        );
        assert_eq!(handle_key_press(&bindings, "KeyQ"), None);
    }

    #[test]
    fn rebinding_moves_the_action() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::Acting, "Space");
        assert_eq!(handle_key_press(&bindings, "KeyA"), None);
        assert_eq!(
            handle_key_press(&bindings, "Space"),
            Some(EntityCommand::TransitionTo(EntityState::Acting))
        );
    }
}
