use super::*;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<u32>,
}

impl FrameScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

struct FixedClock;

impl Clock for FixedClock {
    fn now_nanos(&self) -> u64 {
        42_000_000
    }
}

fn new_loop() -> (FrameLoop, Rc<CountingScheduler>) {
    let scheduler = Rc::new(CountingScheduler::default());
    let frame_loop = FrameLoop::with_clock(scheduler.clone(), Rc::new(FixedClock));
    (frame_loop, scheduler)
}

#[test]
fn start_requests_exactly_one_frame() {
    let (frame_loop, scheduler) = new_loop();
    assert!(!frame_loop.is_running());

    frame_loop.start();
    frame_loop.start();

    assert!(frame_loop.is_running());
    assert!(frame_loop.is_frame_pending());
    assert_eq!(scheduler.requests.get(), 1);
}

#[test]
fn tick_runs_tasks_and_reschedules_while_running() {
    let (frame_loop, scheduler) = new_loop();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _registration = {
        let seen = Rc::clone(&seen);
        frame_loop.register(move |frame| seen.borrow_mut().push(frame))
    };

    frame_loop.start();
    assert!(frame_loop.tick(16_000_000));
    assert!(frame_loop.tick_now());

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            Frame {
                index: 0,
                time_nanos: 16_000_000
            },
            Frame {
                index: 1,
                time_nanos: 42_000_000
            },
        ]
    );
    assert_eq!(seen.borrow()[1].time_millis(), 42);
    assert_eq!(scheduler.requests.get(), 3);
}

#[test]
fn tick_after_stop_is_ignored() {
    let (frame_loop, scheduler) = new_loop();
    let runs = Rc::new(Cell::new(0));
    let _registration = {
        let runs = Rc::clone(&runs);
        frame_loop.register(move |_| runs.set(runs.get() + 1))
    };

    frame_loop.start();
    frame_loop.stop();

    assert!(!frame_loop.tick(0));
    assert_eq!(runs.get(), 0);
    assert_eq!(frame_loop.frame_count(), 0);
    assert!(!frame_loop.is_frame_pending());
    assert_eq!(scheduler.requests.get(), 1);
}

#[test]
fn stopping_from_inside_a_task_ends_the_loop() {
    let (frame_loop, scheduler) = new_loop();
    let _registration = {
        let handle = frame_loop.clone();
        frame_loop.register(move |frame| {
            if frame.index == 2 {
                handle.stop();
            }
        })
    };

    frame_loop.start();
    assert!(frame_loop.tick(0));
    assert!(frame_loop.tick(0));
    assert!(!frame_loop.tick(0));
    assert_eq!(frame_loop.frame_count(), 3);
    assert_eq!(scheduler.requests.get(), 3);
}

#[test]
fn dropping_a_registration_cancels_the_task() {
    let (frame_loop, _scheduler) = new_loop();
    let runs = Rc::new(Cell::new(0));
    let registration = {
        let runs = Rc::clone(&runs);
        frame_loop.register(move |_| runs.set(runs.get() + 1))
    };
    assert!(registration.is_active());
    assert_eq!(frame_loop.task_count(), 1);

    frame_loop.start();
    frame_loop.tick(0);
    drop(registration);
    frame_loop.tick(0);

    assert_eq!(runs.get(), 1);
    assert_eq!(frame_loop.task_count(), 0);
}

#[test]
fn task_can_cancel_itself_mid_frame() {
    let (frame_loop, _scheduler) = new_loop();
    let slot: Rc<RefCell<Option<FrameTaskRegistration>>> = Rc::new(RefCell::new(None));
    let runs = Rc::new(Cell::new(0));
    let registration = {
        let slot = Rc::clone(&slot);
        let runs = Rc::clone(&runs);
        frame_loop.register(move |_| {
            runs.set(runs.get() + 1);
            if let Some(registration) = slot.borrow_mut().take() {
                registration.cancel();
            }
        })
    };
    *slot.borrow_mut() = Some(registration);

    frame_loop.start();
    frame_loop.tick(0);
    frame_loop.tick(0);

    assert_eq!(runs.get(), 1);
    assert_eq!(frame_loop.task_count(), 0);
}

#[test]
fn weak_handle_does_not_keep_the_loop_alive() {
    let (frame_loop, _scheduler) = new_loop();
    let weak = frame_loop.downgrade();
    assert!(weak.upgrade().is_some());
    drop(frame_loop);
    assert!(weak.upgrade().is_none());
}

#[test]
fn loop_owns_its_scheduler() {
    let scheduler = Rc::new(CountingScheduler::default());
    let weak = Rc::downgrade(&scheduler);
    let frame_loop = FrameLoop::with_clock(scheduler, Rc::new(FixedClock));

    frame_loop.start();
    let scheduler = weak.upgrade().expect("scheduler dropped while the loop is alive");
    assert_eq!(scheduler.requests.get(), 1);
    drop(scheduler);

    drop(frame_loop);
    assert!(weak.upgrade().is_none());
}
