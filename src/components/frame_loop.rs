use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};

/// A callback run once per display frame until the loop is dropped.
///
/// The next frame is requested only after the current step returns, and only
/// while the loop is alive. Dropping the loop clears the flag and cancels the
/// pending frame, so no callback outlives its owner.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start<F>(step: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let alive = Rc::new(Cell::new(true));
        let pending = Rc::new(RefCell::new(None));
        let step: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(step));
        schedule(alive.clone(), pending.clone(), step);
        Self { alive, pending }
    }
}

fn schedule(
    alive: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    step: Rc<RefCell<dyn FnMut()>>,
) {
    if !alive.get() {
        return;
    }
    let slot = pending.clone();
    let frame = request_animation_frame(move |_timestamp| {
        slot.borrow_mut().take();
        (&mut *step.borrow_mut())();
        schedule(alive, slot, step);
    });
    *pending.borrow_mut() = Some(frame);
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.alive.set(false);
        // dropping the handle cancels the request
        self.pending.borrow_mut().take();
    }
}
