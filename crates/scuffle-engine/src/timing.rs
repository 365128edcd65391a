//! Frame timing.
//!
//! The match always advances in fixed steps. In realtime mode each step is
//! also paced to the wall clock; otherwise frames run back to back.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Fixed-step frame timing.
#[derive(Debug)]
pub struct FrameTiming {
    /// Target frames per second
    target_fps: u32,
    /// Time budget per frame
    frame_budget: Duration,
    /// Time of last frame start
    last_frame: Instant,
    /// Pace frames to the wall clock
    realtime: bool,
    /// Recent frame times for averaging
    frame_times: VecDeque<f32>,
    /// Maximum samples for averaging
    max_samples: usize,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameTiming {
    /// Create a new frame timing manager.
    ///
    /// # Arguments
    /// * `target_fps` - Simulated frames per second
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let target_fps = target_fps.max(1);
        Self {
            target_fps,
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(target_fps)),
            last_frame: Instant::now(),
            realtime: false,
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
        }
    }

    /// Create with wall-clock pacing on or off.
    #[must_use]
    pub fn with_realtime(mut self, realtime: bool) -> Self {
        self.realtime = realtime;
        self
    }

    /// Game delta handed to every update, in milliseconds.
    #[must_use]
    pub fn fixed_delta_ms(&self) -> f32 {
        1000.0 / self.target_fps as f32
    }

    /// Closes a frame: waits out the budget in realtime mode and records the
    /// wall time the frame took.
    pub fn end_frame(&mut self) {
        if self.realtime {
            let elapsed = self.last_frame.elapsed();
            if elapsed < self.frame_budget {
                std::thread::sleep(self.frame_budget - elapsed);
            }
        }

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
    }

    /// Get the current FPS (averaged over recent frames).
    #[must_use]
    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let avg_frame_time: f32 =
            self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }

    /// Get the target FPS.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timing_creation() {
        let timing = FrameTiming::new(60);
        assert_eq!(timing.target_fps(), 60);
        assert!((timing.fixed_delta_ms() - 16.666).abs() < 0.01);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let timing = FrameTiming::new(0);
        assert_eq!(timing.target_fps(), 1);
        assert_eq!(timing.fixed_delta_ms(), 1000.0);
    }

    #[test]
    fn test_realtime_paces_frames() {
        let mut timing = FrameTiming::new(100).with_realtime(true);
        let start = Instant::now();
        for _ in 0..3 {
            timing.end_frame();
        }
        // three 10ms budgets
        assert!(start.elapsed() >= Duration::from_millis(25));
        assert!(timing.current_fps() > 0.0);
    }

    #[test]
    fn test_fps_without_samples() {
        let timing = FrameTiming::new(60);
        assert_eq!(timing.current_fps(), 0.0);
    }
}
