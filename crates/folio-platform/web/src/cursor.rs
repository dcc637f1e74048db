//! Wires the cursor follower to document pointer events.

use crate::dom::{listen, query_all, viewport_size};
use crate::{DomSurface, WebError};
use folio_core::FrameLoop;
use folio_effects::{interactive_selector, CursorConfig, CursorFollower};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Window};

pub(crate) fn bind_cursor(
    window: &Window,
    document: &Document,
    surface: &DomSurface,
    frame_loop: &FrameLoop,
    config: CursorConfig,
) -> Result<Rc<CursorFollower>, WebError> {
    let follower = Rc::new(CursorFollower::new(config));
    let (viewport_width, _) = viewport_size(window);
    follower.attach(surface, viewport_width);

    {
        let follower = Rc::clone(&follower);
        listen(document, "mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                follower.on_pointer_move(event.client_x() as f32, event.client_y() as f32);
            }
        })?;
    }

    let targets = query_all(document, &interactive_selector())?;
    log::debug!("cursor hover bound to {} elements", targets.len());
    for target in &targets {
        let enter = Rc::clone(&follower);
        listen(target, "mouseenter", move |_| enter.on_hover_enter())?;
        let leave = Rc::clone(&follower);
        listen(target, "mouseleave", move |_| leave.on_hover_leave())?;
    }

    follower.start(frame_loop);
    Ok(follower)
}
