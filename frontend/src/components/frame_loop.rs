use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

struct FrameState {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl FrameState {
    fn schedule(state: &Rc<RefCell<FrameState>>) {
        let Some(window) = web_sys::window() else { return };
        let mut guard = state.borrow_mut();
        let state = &mut *guard;
        if state.handle.is_some() {
            return;
        }
        if let Some(callback) = state.callback.as_ref() {
            match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                Ok(handle) => state.handle = Some(handle),
                Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&mut self) {
        if let (Some(handle), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Dropping the handle cancels the pending frame.
pub struct AnimationFrameLoop {
    state: Rc<RefCell<FrameState>>,
}

impl AnimationFrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let state = Rc::new(RefCell::new(FrameState { handle: None, callback: None }));
        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else { return };
            state.borrow_mut().handle = None;
            on_frame(timestamp);
            FrameState::schedule(&state);
        }) as Box<dyn FnMut(f64)>);
        state.borrow_mut().callback = Some(callback);
        FrameState::schedule(&state);
        Self { state }
    }


    pub fn pause(&self) {
        self.state.borrow_mut().cancel();
    }

    pub fn resume(&self) {
        FrameState::schedule(&self.state);
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.cancel();
        state.callback = None;
    }
}
