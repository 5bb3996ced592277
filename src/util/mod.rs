//! Small shared helpers.

/// Frame pacing and FPS measurement for driver loops.
pub mod frame_timing;
