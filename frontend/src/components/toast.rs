use std::collections::HashMap;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use super::language::use_language;
use crate::state::toast::{ToastId, ToastOptions, ToastQueue, ToastVariant, TOAST_LIFETIME_MS};

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    push: Callback<ToastOptions>,
    dismiss: Callback<ToastId>,
}

impl ToastContext {
    pub fn push(&self, options: ToastOptions) {
        self.push.emit(options);
    }

    pub fn success(&self, message: impl Into<String>, description: impl Into<String>) {
        self.push(ToastOptions::new(message).description(description).variant(ToastVariant::Success));
    }

    pub fn error(&self, message: impl Into<String>, description: impl Into<String>) {
        self.push(ToastOptions::new(message).description(description).variant(ToastVariant::Error));
    }

    pub fn dismiss(&self, id: ToastId) {
        self.dismiss.emit(id);
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("use_toast must be used within a ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_mut_ref(ToastQueue::default);
    // one pending timer per live toast; fired handles are pruned lazily
    let timers = use_mut_ref(HashMap::<ToastId, Timeout>::new);
    let rerender = use_force_update();
    let t = use_language().t();

    {
        let timers = timers.clone();
        use_effect_with_deps(move |_| move || timers.borrow_mut().clear(), ());
    }

    let dismiss = {
        let queue = queue.clone();
        let timers = timers.clone();
        let rerender = rerender.clone();
        Callback::from(move |id: ToastId| {
            timers.borrow_mut().remove(&id);
            if queue.borrow_mut().dismiss(id) {
                rerender.force_update();
            }
        })
    };

    let push = {
        let queue = queue.clone();
        let timers = timers.clone();
        let rerender = rerender.clone();
        Callback::from(move |options: ToastOptions| {
            let id = queue.borrow_mut().push(options, Utc::now());
            let timeout = {
                let queue = queue.clone();
                let rerender = rerender.clone();
                Timeout::new(TOAST_LIFETIME_MS as u32, move || {
                    let mut queue = queue.borrow_mut();
                    let mut changed = !queue.expire(Utc::now()).is_empty();
                    changed |= queue.dismiss(id);
                    drop(queue);
                    if changed {
                        rerender.force_update();
                    }
                })
            };
            let mut timers = timers.borrow_mut();
            let live = queue.borrow();
            timers.retain(|id, _| live.contains(*id));
            timers.insert(id, timeout);
            drop(live);
            rerender.force_update();
        })
    };

    let context = ToastContext { push, dismiss };
    let records = queue.borrow().records().to_vec();

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            { for props.children.iter() }
            <div class="toast-viewport" aria-live="polite" role="status">
                { for records.into_iter().map(|record| {
                    let heading = match record.variant {
                        ToastVariant::Default => t.toast.notice,
                        ToastVariant::Success => t.toast.success,
                        ToastVariant::Error => t.toast.error,
                    };
                    let onclick = {
                        let context = context.clone();
                        let id = record.id;
                        Callback::from(move |_: MouseEvent| context.dismiss(id))
                    };
                    html! {
                        <div key={record.id.0} class={classes!("toast", record.variant.class())}>
                            <div class="toast-body">
                                <span class="toast-variant">{ heading }</span>
                                <p class="toast-message">{ record.message.clone() }</p>
                                {
                                    if let Some(description) = &record.description {
                                        html! { <p class="toast-description">{ description.clone() }</p> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                            <button type="button" class="toast-dismiss" {onclick}>{ t.toast.dismiss }</button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastContext>>
    }
}
