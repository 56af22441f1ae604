use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, VisibilityState};
use yew::prelude::*;

use super::frame_loop::AnimationFrameLoop;
use super::listener::{document, DomListener};
use crate::state::cursor::{CursorTracker, Point};

const INTERACTIVE: &str = "a, button, [role='button'], [role='tab'], [role='option']";

fn point(event: &web_sys::Event) -> Option<Point> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| Point::new(f64::from(e.client_x()), f64::from(e.client_y())))
}

fn paint(tracker: &CursorTracker, dot: &NodeRef, ring: &NodeRef) {
    if let Some(dot) = dot.cast::<HtmlElement>() {
        let _ = dot.style().set_property("transform", &tracker.dot_transform());
    }
    if let Some(ring) = ring.cast::<HtmlElement>() {
        let style = ring.style();
        let _ = style.set_property("transform", &tracker.ring_transform());
        let _ = style.set_property("width", tracker.ring_size());
        let _ = style.set_property("height", tracker.ring_size());
        let _ = style.set_property("border", tracker.ring_border());
    }
}

#[function_component(FloatingCursor)]
pub fn floating_cursor() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let start = window
                    .as_ref()
                    .map(|w| {
                        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        Point::new(width / 2.0, height / 2.0)
                    })
                    .unwrap_or_default();
                let tracker = Rc::new(RefCell::new(CursorTracker::new(start)));

                let frames = {
                    let tracker = tracker.clone();
                    let (dot_ref, ring_ref) = (dot_ref.clone(), ring_ref.clone());
                    Rc::new(AnimationFrameLoop::start(move |_| {
                        let mut tracker = tracker.borrow_mut();
                        tracker.frame();
                        paint(&tracker, &dot_ref, &ring_ref);
                    }))
                };

                let mut listeners = Vec::new();
                if let (Some(window), Some(document)) = (window, document()) {
                    {
                        let tracker = tracker.clone();
                        let (dot_ref, ring_ref) = (dot_ref.clone(), ring_ref.clone());
                        listeners.push(DomListener::new(&window, "mousemove", move |event| {
                            if let Some(at) = point(&event) {
                                let mut tracker = tracker.borrow_mut();
                                tracker.pointer_move(at);
                                paint(&tracker, &dot_ref, &ring_ref);
                            }
                        }));
                    }
                    {
                        let tracker = tracker.clone();
                        let (dot_ref, ring_ref) = (dot_ref.clone(), ring_ref.clone());
                        listeners.push(DomListener::new(&window, "mousedown", move |event| {
                            if let Some(at) = point(&event) {
                                let mut tracker = tracker.borrow_mut();
                                tracker.pointer_down(at);
                                paint(&tracker, &dot_ref, &ring_ref);
                            }
                        }));
                    }
                    {
                        let tracker = tracker.clone();
                        let (dot_ref, ring_ref) = (dot_ref.clone(), ring_ref.clone());
                        listeners.push(DomListener::new(&window, "mouseup", move |_| {
                            let mut tracker = tracker.borrow_mut();
                            tracker.pointer_up();
                            paint(&tracker, &dot_ref, &ring_ref);
                        }));
                    }
                    {
                        let tracker = tracker.clone();
                        listeners.push(DomListener::new(&document, "mouseover", move |event| {
                            let over_link = event
                                .target()
                                .and_then(|t| t.dyn_into::<Element>().ok())
                                .and_then(|el| el.closest(INTERACTIVE).ok().flatten())
                                .is_some();
                            tracker.borrow_mut().set_over_link(over_link);
                        }));
                    }

                    let pause = {
                        let frames = frames.clone();
                        move |_: web_sys::Event| frames.pause()
                    };
                    let resume = {
                        let frames = frames.clone();
                        move |_: web_sys::Event| frames.resume()
                    };
                    listeners.push(DomListener::new(&window, "blur", pause.clone()));
                    listeners.push(DomListener::new(&window, "focus", resume.clone()));
                    if let Some(root) = document.document_element() {
                        listeners.push(DomListener::new(&root, "mouseleave", pause));
                        listeners.push(DomListener::new(&root, "mouseenter", resume));
                    }
                    {
                        let frames = frames.clone();
                        let doc = document.clone();
                        listeners.push(DomListener::new(&document, "visibilitychange", move |_| {
                            if doc.visibility_state() == VisibilityState::Hidden {
                                frames.pause();
                            } else {
                                frames.resume();
                            }
                        }));
                    }
                }

                move || {
                    drop(listeners);
                    drop(frames);
                }
            },
            (),
        );
    }

    html! {
        <>
            <div ref={dot_ref} class="floating-cursor-dot" aria-hidden="true" />
            <div ref={ring_ref} class="floating-cursor-ring" aria-hidden="true" />
            <style>
                {r#"
                    .floating-cursor-dot, .floating-cursor-ring {
                        position: fixed;
                        top: 0;
                        left: 0;
                        pointer-events: none;
                        z-index: 9999;
                        border-radius: 50%;
                        mix-blend-mode: difference;
                    }
                    .floating-cursor-dot {
                        width: 6px;
                        height: 6px;
                        background: white;
                    }
                    .floating-cursor-ring {
                        width: 30px;
                        height: 30px;
                        border: 1px solid white;
                        transition: width 0.2s ease, height 0.2s ease, border 0.2s ease;
                    }
                    @media (max-width: 768px), (pointer: coarse) {
                        .floating-cursor-dot, .floating-cursor-ring { display: none; }
                    }
                "#}
            </style>
        </>
    }
}
