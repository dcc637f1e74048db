//! Robot-style driver for frame-loop tests.
//!
//! The robot owns a [`FrameLoop`] wired to a [`ManualScheduler`] and a
//! [`ManualClock`]. Frames are only delivered when the loop itself asked for
//! one, so a test that runs N frames also proves the loop kept
//! rescheduling itself.
//!
//! # Example
//!
//! ```
//! use folio_testing::FrameRobot;
//!
//! let robot = FrameRobot::new();
//! let frame_loop = robot.frame_loop();
//! let _task = frame_loop.register(|_frame| {});
//! frame_loop.start();
//!
//! assert_eq!(robot.run_frames(5), 5);
//! ```

use crate::{HeadlessSurface, ManualClock, ManualScheduler};
use folio_core::FrameLoop;
use std::rc::Rc;
use std::time::Duration;

/// Default spacing between frames, about 60 FPS.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(16_666_667);

pub struct FrameRobot {
    scheduler: Rc<ManualScheduler>,
    clock: Rc<ManualClock>,
    frame_loop: FrameLoop,
    surface: HeadlessSurface,
    frame_interval: Duration,
}

impl FrameRobot {
    pub fn new() -> Self {
        let scheduler = Rc::new(ManualScheduler::new());
        let clock = Rc::new(ManualClock::new());
        let frame_loop = FrameLoop::with_clock(scheduler.clone(), clock.clone());
        Self {
            scheduler,
            clock,
            frame_loop,
            surface: HeadlessSurface::new(),
            frame_interval: FRAME_INTERVAL,
        }
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn frame_loop(&self) -> FrameLoop {
        self.frame_loop.clone()
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Delivers up to `count` frames, stopping early once the loop no longer
    /// has a frame request outstanding. Returns the number delivered.
    pub fn run_frames(&self, count: usize) -> usize {
        let mut delivered = 0;
        for _ in 0..count {
            if !self.scheduler.take_frame_request() {
                break;
            }
            self.clock.advance(self.frame_interval);
            self.frame_loop.tick_now();
            delivered += 1;
        }
        delivered
    }

    /// Advances the clock by `duration`, delivering a frame per interval.
    pub fn advance_time(&self, duration: Duration) -> usize {
        let interval = self.frame_interval.as_nanos().max(1);
        let frames = duration.as_nanos().div_ceil(interval) as usize;
        self.run_frames(frames)
    }
}

impl Default for FrameRobot {
    fn default() -> Self {
        Self::new()
    }
}
