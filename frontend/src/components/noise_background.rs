use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};
use yew::prelude::*;

use super::frame_loop::AnimationFrameLoop;
use super::listener::DomListener;
use crate::state::noise::fill_noise;

fn fit_to_window(canvas: &HtmlCanvasElement) {
    if let Some(window) = web_sys::window() {
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[function_component(NoiseBackground)]
pub fn noise_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let setup = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = context_2d(&canvas)?;
                    fit_to_window(&canvas);

                    let resize = {
                        let canvas = canvas.clone();
                        let window = web_sys::window()?;
                        DomListener::new(&window, "resize", move |_| fit_to_window(&canvas))
                    };

                    let buffer = Rc::new(RefCell::new(Vec::<u8>::new()));
                    let frames = AnimationFrameLoop::start(move |_| {
                        let (width, height) = (canvas.width(), canvas.height());
                        if width == 0 || height == 0 {
                            return;
                        }
                        let mut data = buffer.borrow_mut();
                        data.resize((width * height * 4) as usize, 0);
                        fill_noise(&mut data[..], Math::random);
                        match ImageData::new_with_u8_clamped_array_and_sh(Clamped(&data[..]), width, height) {
                            Ok(image) => {
                                let _ = ctx.put_image_data(&image, 0.0, 0.0);
                            }
                            Err(e) => warn!("Failed to build noise frame: {:?}", e),
                        }
                    });
                    Some((resize, frames))
                });
                move || drop(setup)
            },
            (),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="noise-background"
            aria-hidden="true"
            style="position: fixed; inset: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0; opacity: 0.6;"
        />
    }
}
