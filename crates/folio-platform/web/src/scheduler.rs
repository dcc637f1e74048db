use folio_core::{FrameLoop, FrameScheduler};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Delivers frames through `requestAnimationFrame`.
///
/// The callback only holds a weak handle to the loop, so dropping the last
/// [`FrameLoop`] ends the animation instead of leaking it.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: RefCell::new(None),
        }
    }

    /// Connects the scheduler to the loop it serves. Must be called before
    /// the loop is started.
    pub fn bind(&self, frame_loop: &FrameLoop) {
        let frame_loop = frame_loop.downgrade();
        let callback = Closure::wrap(Box::new(move || {
            if let Some(frame_loop) = frame_loop.upgrade() {
                frame_loop.tick_now();
            }
        }) as Box<dyn FnMut()>);
        *self.callback.borrow_mut() = Some(callback);
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule_frame(&self) {
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            log::warn!("frame requested before the scheduler was bound");
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            log::warn!("requestAnimationFrame unavailable, frames stop: {err:?}");
        }
    }
}
