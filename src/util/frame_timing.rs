use web_time::{Duration, Instant};

/// Frame pacing with smoothed FPS and an optional frame-rate cap.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Duration of the most recent completed frame
    last_delta: Duration,
    /// Frames completed since construction
    frames: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_frame: Instant::now(),
            last_delta: Duration::ZERO,
            frames: 0,
            smoothed_fps: target_fps.max(1) as f32,
            smoothing: 0.05,
        }
    }

    /// True once enough wall time has passed for the next frame.
    #[must_use]
    pub fn should_render(&self) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the next frame is due.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Close the current frame and return its wall-clock duration.
    pub fn end_frame(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.last_delta = elapsed;
        self.frames += 1;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed
    }

    /// Nominal frame delta in seconds: the cap's period, or the last
    /// measured frame when uncapped.
    #[must_use]
    pub fn nominal_dt(&self) -> f32 {
        if self.target_fps > 0 {
            self.min_frame_duration.as_secs_f32()
        } else {
            self.last_delta.as_secs_f32()
        }
    }

    /// Smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_timer_reports_period() {
        let timing = FrameTiming::new(50);
        assert!((timing.nominal_dt() - 0.02).abs() < 1e-6);
        assert!(timing.remaining() <= Duration::from_millis(20));
    }

    #[test]
    fn uncapped_timer_always_renders() {
        let mut timing = FrameTiming::new(0);
        assert!(timing.should_render());
        let _ = timing.end_frame();
        let _ = timing.end_frame();
        assert_eq!(timing.frames(), 2);
        assert!(timing.fps() > 0.0);
    }
}
