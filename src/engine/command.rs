//! The animator's complete interactive vocabulary.
//!
//! Every user-facing operation, whether it comes from a key press or a
//! programmatic call, is represented as an [`EntityCommand`]. Consumers
//! construct commands and pass them to
//! [`EntityAnimator::execute`](super::EntityAnimator::execute).

use crate::animation::EntityState;
use crate::form::FormKind;

/// A single operation on the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCommand {
    /// Request a transition to a behavioral state.
    TransitionTo(EntityState),
    /// Toggle the camera's turntable rotation.
    ToggleAutoRotate,
    /// Rebuild the entity as a different particle form.
    SelectForm(FormKind),
}
