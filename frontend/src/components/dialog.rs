use std::cell::{Cell, RefCell};

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;

use super::listener::{document, DomListener};
use crate::state::dialog::{
    accepts_close, escape_closes, CloseReason, LockId, ScrollLockStack, LOCKED_OVERFLOW,
};
use crate::state::dual_state::use_dual_state;

thread_local! {
    static SCROLL_LOCKS: RefCell<ScrollLockStack> = RefCell::new(ScrollLockStack::default());
    static NEXT_ID: Cell<u64> = Cell::new(0);
}

fn next_element_id(prefix: &str) -> AttrValue {
    let id = NEXT_ID.with(|next| {
        next.set(next.get() + 1);
        next.get()
    });
    AttrValue::from(format!("{}-{}", prefix, id))
}

fn lock_body_scroll() -> Option<LockId> {
    let style = document()?.body()?.style();
    let current = style.get_property_value("overflow").unwrap_or_default();
    let id = SCROLL_LOCKS.with(|locks| locks.borrow_mut().acquire(&current));
    let _ = style.set_property("overflow", LOCKED_OVERFLOW);
    Some(id)
}

fn is_topmost(id: LockId) -> bool {
    SCROLL_LOCKS.with(|locks| locks.borrow().is_topmost(id))
}

fn unlock_body_scroll(id: LockId) {
    let Some(restore) = SCROLL_LOCKS.with(|locks| locks.borrow_mut().release(id)) else { return };
    if let Some(body) = document().and_then(|d| d.body()) {
        let style = body.style();
        let _ = if restore.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &restore)
        };
    }
}

#[derive(Clone, PartialEq)]
pub struct DialogContext {
    pub open: bool,
    pub close_on_backdrop: bool,
    set_open: Callback<bool>,
}

impl DialogContext {
    pub fn open(&self) {
        self.set_open.emit(true);
    }

    pub fn request_close(&self, reason: CloseReason) {
        if accepts_close(reason, self.close_on_backdrop) {
            debug!("Closing dialog: {:?}", reason);
            self.set_open.emit(false);
        }
    }
}

#[hook]
fn use_dialog_context() -> DialogContext {
    use_context::<DialogContext>().expect("Dialog parts must be rendered inside <Dialog>")
}

#[derive(Clone, PartialEq)]
pub struct DialogContentContext {
    pub title_id: Option<AttrValue>,
    pub description_id: Option<AttrValue>,
    set_title_id: Callback<Option<AttrValue>>,
    set_description_id: Callback<Option<AttrValue>>,
}

#[hook]
pub fn use_dialog_content_context() -> DialogContentContext {
    use_context::<DialogContentContext>()
        .expect("DialogTitle and DialogDescription must be rendered inside <DialogContent>")
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    #[prop_or_default]
    pub default_open: bool,
    #[prop_or_default]
    pub open: Option<bool>,
    #[prop_or_default]
    pub on_open_change: Option<Callback<bool>>,
    #[prop_or(true)]
    pub close_on_backdrop: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let state = use_dual_state(props.open, props.default_open, props.on_open_change.clone());
    let context = DialogContext {
        open: state.value,
        close_on_backdrop: props.close_on_backdrop,
        set_open: state.setter(),
    };

    html! {
        <ContextProvider<DialogContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<DialogContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogPartProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DialogTrigger)]
pub fn dialog_trigger(props: &DialogPartProps) -> Html {
    let context = use_dialog_context();
    let onclick = Callback::from(move |_: MouseEvent| context.open());
    html! {
        <button type="button" class={props.class.clone()} aria-haspopup="dialog" {onclick}>
            { for props.children.iter() }
        </button>
    }
}

#[function_component(DialogContent)]
pub fn dialog_content(props: &DialogPartProps) -> Html {
    let context = use_dialog_context();
    let title_id = use_state(|| None::<AttrValue>);
    let description_id = use_state(|| None::<AttrValue>);

    {
        let is_open = context.open;
        let context = context.clone();
        use_effect_with_deps(
            move |open| {
                let guard = (*open).then(|| {
                    let lock = lock_body_scroll();
                    let escape = document().map(|document| {
                        DomListener::new(&document, "keydown", move |event| {
                            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|e| e.key()) else {
                                return;
                            };
                            let topmost = lock.map(is_topmost).unwrap_or(true);
                            if escape_closes(&key, event.default_prevented(), topmost) {
                                context.request_close(CloseReason::Escape);
                            }
                        })
                    });
                    (lock, escape)
                });
                move || {
                    if let Some((Some(lock), _)) = &guard {
                        unlock_body_scroll(*lock);
                    }
                    drop(guard);
                }
            },
            is_open,
        );
    }

    if !context.open {
        return html! {};
    }
    let Some(host) = document().and_then(|d| d.body()).map(Element::from) else {
        return html! {};
    };

    let content_context = DialogContentContext {
        title_id: (*title_id).clone(),
        description_id: (*description_id).clone(),
        set_title_id: {
            let title_id = title_id.clone();
            Callback::from(move |id| title_id.set(id))
        },
        set_description_id: {
            let description_id = description_id.clone();
            Callback::from(move |id| description_id.set(id))
        },
    };
    let on_backdrop = {
        let context = context.clone();
        Callback::from(move |_: MouseEvent| context.request_close(CloseReason::Backdrop))
    };
    // clicks inside the panel must not reach the backdrop
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    yew::create_portal(
        html! {
            <ContextProvider<DialogContentContext> context={content_context}>
                <div class="dialog-overlay" onclick={on_backdrop}>
                    <div
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby={(*title_id).clone()}
                        aria-describedby={(*description_id).clone()}
                        class={classes!("dialog-content", props.class.clone())}
                        onclick={stop}
                    >
                        { for props.children.iter() }
                    </div>
                </div>
            </ContextProvider<DialogContentContext>>
        },
        host,
    )
}

#[function_component(DialogHeader)]
pub fn dialog_header(props: &DialogPartProps) -> Html {
    html! {
        <div class={classes!("dialog-header", props.class.clone())}>{ for props.children.iter() }</div>
    }
}

#[function_component(DialogFooter)]
pub fn dialog_footer(props: &DialogPartProps) -> Html {
    html! {
        <div class={classes!("dialog-footer", props.class.clone())}>{ for props.children.iter() }</div>
    }
}

#[hook]
fn use_registered_id(prefix: &'static str, register: Callback<Option<AttrValue>>) -> AttrValue {
    let id = use_state(|| next_element_id(prefix));
    {
        let id = (*id).clone();
        use_effect_with_deps(
            move |_| {
                register.emit(Some(id));
                move || register.emit(None)
            },
            (),
        );
    }
    (*id).clone()
}

#[function_component(DialogTitle)]
pub fn dialog_title(props: &DialogPartProps) -> Html {
    let content = use_dialog_content_context();
    let id = use_registered_id("dialog-title", content.set_title_id.clone());
    html! {
        <h2 {id} class={classes!("dialog-title", props.class.clone())}>{ for props.children.iter() }</h2>
    }
}

#[function_component(DialogDescription)]
pub fn dialog_description(props: &DialogPartProps) -> Html {
    let content = use_dialog_content_context();
    let id = use_registered_id("dialog-description", content.set_description_id.clone());
    html! {
        <p {id} class={classes!("dialog-description", props.class.clone())}>{ for props.children.iter() }</p>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogCloseProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DialogClose)]
pub fn dialog_close(props: &DialogCloseProps) -> Html {
    let context = use_dialog_context();
    let onclick = Callback::from(move |_: MouseEvent| context.request_close(CloseReason::Explicit));
    html! {
        <button
            type="button"
            class={classes!("dialog-close", props.class.clone())}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}
