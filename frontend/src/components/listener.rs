use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener that removes itself when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl DomListener {
    pub fn new(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        Self::register(target, event, false, handler)
    }

    /// Runs before any bubbling listener on the same target.
    pub fn capture(target: &EventTarget, event: &'static str, handler: impl FnMut(Event) + 'static) -> Self {
        Self::register(target, event, true, handler)
    }

    fn register(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback_and_bool(event, callback.as_ref().unchecked_ref(), capture)
        {
            warn!("Failed to add {} listener: {:?}", event, e);
        }
        Self { target: target.clone(), event, capture, callback }
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}
