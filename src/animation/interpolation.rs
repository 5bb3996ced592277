//! Stateless per-frame parameter resolution.
//!
//! Every tunable that differs between entity states is resolved here from
//! a [`PerState`] table and the engine's [`EngineSnapshot`]: a direct lookup
//! while idle, a lerp over eased progress while transitioning. Nothing in
//! this module holds state, so it can be queried any number of times per
//! tick.

use glam::Vec3;

use super::engine::EngineSnapshot;
use super::state::{EntityState, PerState};

/// Lerp two f32 values.
#[inline]
#[must_use]
pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Effective value of a three-state parameter for this frame.
#[must_use]
pub fn interpolate(
    resting: f32,
    thinking: f32,
    acting: f32,
    snapshot: &EngineSnapshot,
) -> f32 {
    PerState::new(resting, thinking, acting).resolve(snapshot)
}

/// Resolve a per-state *function* rather than a constant.
///
/// While idle `f` is evaluated once for the current state; while
/// transitioning it is evaluated for both endpoints and the results are
/// blended over eased progress. Used for time-varying patterns (eye scan
/// vs. blaze) that must morph smoothly instead of switching.
pub fn blend_by_state(
    snapshot: &EngineSnapshot,
    mut f: impl FnMut(EntityState) -> f32,
) -> f32 {
    match *snapshot {
        EngineSnapshot::Idle(state) => f(state),
        EngineSnapshot::Transitioning {
            from,
            to,
            progress_eased,
            ..
        } => lerp_f32(f(from), f(to), progress_eased),
    }
}

impl PerState<f32> {
    /// Effective value for this frame.
    #[must_use]
    pub fn resolve(&self, snapshot: &EngineSnapshot) -> f32 {
        blend_by_state(snapshot, |state| self.get(state))
    }
}

impl PerState<[f32; 3]> {
    /// Color (or any 3-vector) for the state the entity is heading toward.
    ///
    /// Colors are not lerped through the snapshot; callers approach this
    /// target exponentially (see [`crate::form::color::ColorApproach`]).
    #[must_use]
    pub fn heading(&self, snapshot: &EngineSnapshot) -> Vec3 {
        Vec3::from_array(self.get(snapshot.heading()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transitioning(
        from: EntityState,
        to: EntityState,
        p: f32,
    ) -> EngineSnapshot {
        EngineSnapshot::Transitioning {
            from,
            to,
            progress_raw: p,
            progress_eased: p,
        }
    }

    #[test]
    fn test_idle_returns_exact_value() {
        let values = [
            (1.0_f32, 2.0_f32, 3.0_f32),
            (0.1, 0.7, 0.3),
            (-5.5, 1e-7, 1e9),
        ];
        for (a, b, c) in values {
            let snap = EngineSnapshot::Idle(EntityState::Thinking);
            assert_eq!(interpolate(a, b, c, &snap), b);
            let snap = EngineSnapshot::Idle(EntityState::Resting);
            assert_eq!(interpolate(a, b, c, &snap), a);
            let snap = EngineSnapshot::Idle(EntityState::Acting);
            assert_eq!(interpolate(a, b, c, &snap), c);
        }
    }

    #[test]
    fn test_transition_lerps_over_eased_progress() {
        let (a, b, c) = (0.2, 1.4, 9.0);
        for p in [0.0, 0.1, 0.25, 0.5, 0.9, 1.0] {
            let snap =
                transitioning(EntityState::Resting, EntityState::Thinking, p);
            let expected = a + (b - a) * p;
            assert!((interpolate(a, b, c, &snap) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_uses_eased_not_raw_progress() {
        let snap = EngineSnapshot::Transitioning {
            from: EntityState::Acting,
            to: EntityState::Resting,
            progress_raw: 0.9,
            progress_eased: 0.25,
        };
        assert!((interpolate(0.0, 5.0, 4.0, &snap) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_blend_by_state_evaluates_endpoints() {
        let snap =
            transitioning(EntityState::Thinking, EntityState::Acting, 0.5);
        let v = blend_by_state(&snap, |s| s.index() as f32 * 10.0);
        assert!((v - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_color() {
        let colors = PerState::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0; 3]);
        let snap =
            transitioning(EntityState::Resting, EntityState::Thinking, 0.1);
        assert_eq!(colors.heading(&snap), Vec3::Y);
        let snap = EngineSnapshot::Idle(EntityState::Resting);
        assert_eq!(colors.heading(&snap), Vec3::X);
    }
}
