//! Platform abstraction traits for Folio runtime services.
//!
//! These traits let the frame loop delegate scheduling and timing to the
//! host, so the same controllers run under `requestAnimationFrame` in the
//! browser and under a manual driver in tests.

/// Schedules frames on behalf of the frame loop.
///
/// Everything runs on one thread: implementations are called from the
/// frame loop and invoke it back from the host's event queue.
pub trait FrameScheduler {
    /// Request that the host deliver one more frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the runtime.
pub trait Clock {
    /// Monotonic nanoseconds since the clock was created.
    fn now_nanos(&self) -> u64;
}
