//! Frame timing.

use std::time::{Duration, Instant};

/// Frame budget for 60 FPS.
pub const TARGET_FRAME_TIME: Duration = Duration::from_micros(16_666);

/// Largest delta handed to widgets, so a stall does not jump animations.
pub const MAX_FRAME_TIME: f32 = 0.1;

/// Tracks elapsed time, per-frame delta and a once-per-second FPS figure.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Instant of the previous tick.
    last: Option<Instant>,
    /// Total unclamped time since the first tick, in seconds.
    elapsed: f32,
    /// Unclamped delta of the last tick, in seconds.
    frame_time: f32,
    /// Time accumulated toward the next FPS sample.
    accumulated: f32,
    /// Frames accumulated toward the next FPS sample.
    frames: u32,
    /// Last FPS sample.
    fps: f32,
}

impl FrameClock {
    /// Creates a clock that has not ticked yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to `now` and returns the delta for this frame.
    ///
    /// The first tick only records the baseline and returns zero. The
    /// returned delta is clamped to [`MAX_FRAME_TIME`]; elapsed time and FPS
    /// use the real delta.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let Some(last) = self.last.replace(now) else {
            return 0.0;
        };

        self.frame_time = now.saturating_duration_since(last).as_secs_f32();
        self.elapsed += self.frame_time;
        self.accumulated += self.frame_time;
        self.frames += 1;

        if self.accumulated >= 1.0 {
            #[allow(clippy::cast_precision_loss)]
            let frames = self.frames as f32;
            self.fps = frames / self.accumulated;
            self.accumulated = 0.0;
            self.frames = 0;
        }

        self.frame_time.min(MAX_FRAME_TIME)
    }

    /// Returns seconds since the first tick.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Returns the unclamped delta of the last tick.
    #[inline]
    #[must_use]
    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    /// Returns the last FPS sample. Zero until one second has elapsed.
    #[inline]
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_is_baseline() {
        let mut clock = FrameClock::new();
        assert!(clock.tick(Instant::now()).abs() < f32::EPSILON);
        assert!(clock.elapsed().abs() < f32::EPSILON);
    }

    #[test]
    fn test_fps_sampled_each_second() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick(start);

        for i in 1..=3_u64 {
            clock.tick(start + Duration::from_millis(250 * i));
        }
        assert!(clock.fps().abs() < f32::EPSILON);

        clock.tick(start + Duration::from_millis(1000));
        assert!((clock.fps() - 4.0).abs() < 1e-4);
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_stall_is_clamped_for_widgets() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick(start);

        let dt = clock.tick(start + Duration::from_secs(2));
        assert!((dt - MAX_FRAME_TIME).abs() < f32::EPSILON);
        assert!((clock.frame_time() - 2.0).abs() < 1e-4);
    }
}
