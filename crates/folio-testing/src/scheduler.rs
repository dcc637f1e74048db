//! Manually driven scheduler and clock.

use folio_core::{Clock, FrameScheduler};
use std::cell::Cell;
use std::time::Duration;

/// Scheduler that records frame requests instead of delivering them.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    frame_requested: Cell<bool>,
    requests: Cell<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }

    pub fn has_frame_request(&self) -> bool {
        self.frame_requested.get()
    }

    /// Total number of requests received.
    pub fn request_count(&self) -> u64 {
        self.requests.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.set(true);
        self.requests.set(self.requests.get() + 1);
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_nanos: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now_nanos
            .set(self.now_nanos.get() + by.as_nanos() as u64);
    }
}

impl Clock for ManualClock {
    fn now_nanos(&self) -> u64 {
        self.now_nanos.get()
    }
}
