//! State transition engine and per-frame parameter interpolation.

pub mod durations;
pub mod easing;
pub mod engine;
pub mod interpolation;
pub mod state;

pub use durations::{DurationTable, DEFAULT_TRANSITION};
pub use easing::{ease_in_out_cubic, EasingFunction};
pub use engine::{EngineSnapshot, TransitionEngine, TransitionRecord};
pub use interpolation::{blend_by_state, interpolate, lerp_f32};
pub use state::{EntityState, PerState};
