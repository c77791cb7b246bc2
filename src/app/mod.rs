//! Application Framework
//!
//! Frame timing shared by every frontend, and the winit-based runner in
//! [`winit`].

pub mod winit;

use std::time::Instant;

/// Per-frame timing handed to [`AppHandler::update`](winit::AppHandler::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Seconds since the loop started.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Number of frames produced before this one.
    pub frame_count: u64,
}

/// Tracks loop start, previous frame and frame count.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start_time: Instant,
    last_loop_time: Instant,
    frame_count: u64,
}

impl FrameClock {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self {
            start_time: now,
            last_loop_time: now,
            frame_count: 0,
        }
    }

    /// Advances to the frame beginning at `now`.
    pub fn tick(&mut self, now: Instant) -> FrameState {
        let state = FrameState {
            time: now.saturating_duration_since(self.start_time).as_secs_f32(),
            dt: now.saturating_duration_since(self.last_loop_time).as_secs_f32(),
            frame_count: self.frame_count,
        };
        self.last_loop_time = now;
        self.frame_count += 1;
        state
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
