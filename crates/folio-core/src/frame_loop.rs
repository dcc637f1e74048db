//! Explicit frame loop with cancellable per-frame tasks.
//!
//! A [`FrameLoop`] replaces the self-rescheduling animation callback: while
//! running, every [`FrameLoop::tick`] runs the registered tasks and asks the
//! [`FrameScheduler`] for the next frame. [`FrameLoop::stop`] clears the
//! running flag so no further frame is requested, which lets tests drive an
//! exact number of frames.

use crate::{Clock, FrameScheduler, SystemClock};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type FrameTaskId = u64;

/// Information handed to every task for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Zero-based number of the frame since the loop was created.
    pub index: u64,
    /// Frame timestamp from the loop's clock.
    pub time_nanos: u64,
}

impl Frame {
    pub fn time_millis(&self) -> u64 {
        self.time_nanos / 1_000_000
    }
}

struct FrameTaskEntry {
    id: FrameTaskId,
    active: Cell<bool>,
    task: RefCell<Box<dyn FnMut(Frame)>>,
}

struct FrameLoopInner {
    scheduler: Rc<dyn FrameScheduler>,
    clock: Rc<dyn Clock>,
    running: Cell<bool>,
    frame_pending: Cell<bool>,
    frames: Cell<u64>,
    next_task_id: Cell<FrameTaskId>,
    tasks: RefCell<Vec<Rc<FrameTaskEntry>>>,
}

impl FrameLoopInner {
    fn request_frame(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        self.scheduler.schedule_frame();
    }

    fn prune(&self) {
        self.tasks.borrow_mut().retain(|entry| entry.active.get());
    }
}

/// Handle to a single-threaded frame loop. Clones share the same loop.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<FrameLoopInner>,
}

impl FrameLoop {
    /// Creates a stopped loop that timestamps frames with a [`SystemClock`].
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self::with_clock(scheduler, Rc::new(SystemClock::new()))
    }

    pub fn with_clock(scheduler: Rc<dyn FrameScheduler>, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(FrameLoopInner {
                scheduler,
                clock,
                running: Cell::new(false),
                frame_pending: Cell::new(false),
                frames: Cell::new(0),
                next_task_id: Cell::new(0),
                tasks: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakFrameLoop {
        WeakFrameLoop {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Registers a task that runs on every frame until the returned
    /// registration is cancelled or dropped.
    pub fn register(&self, task: impl FnMut(Frame) + 'static) -> FrameTaskRegistration {
        let id = self.inner.next_task_id.get();
        self.inner.next_task_id.set(id + 1);
        let entry = Rc::new(FrameTaskEntry {
            id,
            active: Cell::new(true),
            task: RefCell::new(Box::new(task)),
        });
        self.inner.tasks.borrow_mut().push(Rc::clone(&entry));
        log::trace!("registered frame task {id}");
        FrameTaskRegistration {
            frame_loop: Rc::downgrade(&self.inner),
            entry: Some(entry),
        }
    }

    /// Marks the loop running and requests the first frame.
    pub fn start(&self) {
        if self.inner.running.replace(true) {
            return;
        }
        log::debug!("frame loop started");
        self.inner.request_frame();
    }

    /// Stops requesting frames. A frame that is already scheduled is
    /// delivered but ignored.
    pub fn stop(&self) {
        if self.inner.running.replace(false) {
            log::debug!("frame loop stopped after {} frames", self.frame_count());
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    /// Whether a frame was requested from the scheduler and not yet delivered.
    pub fn is_frame_pending(&self) -> bool {
        self.inner.frame_pending.get()
    }

    pub fn frame_count(&self) -> u64 {
        self.inner.frames.get()
    }

    pub fn task_count(&self) -> usize {
        self.inner
            .tasks
            .borrow()
            .iter()
            .filter(|entry| entry.active.get())
            .count()
    }

    pub fn now_nanos(&self) -> u64 {
        self.inner.clock.now_nanos()
    }

    /// Delivers a frame stamped with the loop's clock.
    pub fn tick_now(&self) -> bool {
        self.tick(self.now_nanos())
    }

    /// Delivers one frame: runs every active task in registration order and,
    /// while the loop is running, requests the next frame.
    ///
    /// Returns whether another frame was requested.
    pub fn tick(&self, time_nanos: u64) -> bool {
        self.inner.frame_pending.set(false);
        if !self.is_running() {
            return false;
        }

        let frame = Frame {
            index: self.inner.frames.get(),
            time_nanos,
        };
        self.inner.frames.set(frame.index + 1);

        // Snapshot so tasks can register or cancel while the frame runs.
        let tasks: Vec<Rc<FrameTaskEntry>> = self.inner.tasks.borrow().clone();
        for entry in tasks {
            if !entry.active.get() {
                continue;
            }
            match entry.task.try_borrow_mut() {
                Ok(mut task) => (*task)(frame),
                Err(_) => log::warn!("frame task {} re-entered, skipping", entry.id),
            }
        }
        self.inner.prune();

        if self.is_running() {
            self.inner.request_frame();
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for FrameLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameLoop")
            .field("running", &self.is_running())
            .field("frames", &self.frame_count())
            .field("tasks", &self.task_count())
            .finish()
    }
}

/// Non-owning handle used by host callbacks to reach the loop.
#[derive(Clone)]
pub struct WeakFrameLoop {
    inner: Weak<FrameLoopInner>,
}

impl WeakFrameLoop {
    pub fn upgrade(&self) -> Option<FrameLoop> {
        self.inner.upgrade().map(|inner| FrameLoop { inner })
    }
}

/// Keeps a frame task registered. Dropping it cancels the task.
pub struct FrameTaskRegistration {
    frame_loop: Weak<FrameLoopInner>,
    entry: Option<Rc<FrameTaskEntry>>,
}

impl FrameTaskRegistration {
    pub fn is_active(&self) -> bool {
        self.entry
            .as_ref()
            .map(|entry| entry.active.get())
            .unwrap_or(false)
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(entry) = self.entry.take() {
            entry.active.set(false);
            log::trace!("cancelled frame task {}", entry.id);
            if let Some(inner) = self.frame_loop.upgrade() {
                inner.prune();
            }
        }
    }
}

impl Drop for FrameTaskRegistration {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "tests/frame_loop_tests.rs"]
mod tests;
