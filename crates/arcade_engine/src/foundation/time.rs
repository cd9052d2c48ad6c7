//! Time management utilities

use std::time::{Duration, Instant};

/// High-precision timer for frame timing
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame)
    ///
    /// Returns the seconds elapsed since the previous call.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.record(now.duration_since(self.last_frame));
        self.last_frame = now;
        self.delta_time
    }

    fn record(&mut self, elapsed: Duration) {
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        self.frame_count += 1;
    }

    /// Instant at which the current frame started
    pub fn frame_start(&self) -> Instant {
        self.last_frame
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

/// Caps the loop at a target frequency by sleeping off the unused part of
/// each frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_duration: Duration,
}

impl FrameLimiter {
    /// Create a limiter for `target_fps` frames per second
    ///
    /// A zero target disables limiting.
    pub fn new(target_fps: u32) -> Self {
        let frame_duration = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        };
        Self { frame_duration }
    }

    /// Target duration of one frame
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Time still to wait when `elapsed` of the frame budget has been used
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_duration.saturating_sub(elapsed)
    }

    /// Block until the frame that started at `frame_start` has used its
    /// whole budget.
    pub fn wait(&self, frame_start: Instant) {
        let remaining = self.remaining(frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
