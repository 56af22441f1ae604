use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, Node, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use super::listener::{document, DomListener};
use crate::state::dual_state::use_dual_state;
use crate::state::listbox::{Listbox, ListboxEffect, ListboxKey};

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: AttrValue,
    pub label: AttrValue,
    pub description: Option<AttrValue>,
}

impl SelectOption {
    pub fn new(value: impl Into<AttrValue>, label: impl Into<AttrValue>) -> Self {
        Self { value: value.into(), label: label.into(), description: None }
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub options: Vec<SelectOption>,
    /// A value matching no option shows the placeholder.
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub default_value: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Option<Callback<AttrValue>>,
    #[prop_or(AttrValue::from("Select an option"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let selection = use_dual_state(props.value.clone().map(Some), props.default_value.clone(), None);
    let listbox = use_state(Listbox::default);
    let trigger_ref = use_node_ref();
    let list_ref = use_node_ref();

    let len = props.options.len();
    let selected_index = selection
        .value
        .as_ref()
        .and_then(|value| props.options.iter().position(|option| &option.value == value));

    // Applies a listbox transition and carries out its side effects.
    let apply = {
        let listbox = listbox.clone();
        let selection = selection.clone();
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        let trigger_ref = trigger_ref.clone();
        Callback::from(move |transition: (Listbox, ListboxEffect)| {
            let (next, effect) = transition;
            listbox.set(next);
            match effect {
                ListboxEffect::Commit(index) => {
                    if let Some(option) = options.get(index) {
                        selection.set(Some(option.value.clone()));
                        if let Some(on_change) = &on_change {
                            on_change.emit(option.value.clone());
                        }
                    }
                    focus(&trigger_ref);
                }
                ListboxEffect::Dismissed => focus(&trigger_ref),
                _ => {}
            }
        })
    };

    // While open, keys, focus and outside presses are handled at the document level.
    {
        let apply = apply.clone();
        let trigger_ref = trigger_ref.clone();
        let list_ref = list_ref.clone();
        let current = *listbox;
        use_effect_with_deps(
            move |_| {
                let listeners = document().filter(|_| current.is_open()).map(|document| {
                    let refs = [trigger_ref, list_ref];
                    let close_outside = {
                        let apply = apply.clone();
                        move || {
                            let mut next = current;
                            let effect = next.outside();
                            apply.emit((next, effect));
                        }
                    };
                    // capture phase: consumed keys never reach an enclosing dialog
                    let keydown = {
                        let refs = refs.clone();
                        let close_outside = close_outside.clone();
                        DomListener::capture(&document, "keydown", move |event| {
                            if !targets_inside(&event, &refs) {
                                close_outside();
                                return;
                            }
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else { return };
                            let mut next = current;
                            let effect = next.key(ListboxKey::from_key(&event.key()), selected_index, len);
                            if effect.consumes_key() {
                                event.prevent_default();
                                event.stop_propagation();
                                apply.emit((next, effect));
                            }
                        })
                    };
                    let focusin = {
                        let refs = refs.clone();
                        let close_outside = close_outside.clone();
                        DomListener::new(&document, "focusin", move |event| {
                            if !targets_inside(&event, &refs) {
                                close_outside();
                            }
                        })
                    };
                    let mousedown = DomListener::new(&document, "mousedown", move |event| {
                        if !targets_inside(&event, &refs) {
                            close_outside();
                        }
                    });
                    (keydown, focusin, mousedown)
                });
                move || drop(listeners)
            },
            (current, selected_index, len),
        );
    }

    // Keep the highlighted option visible.
    {
        let list_ref = list_ref.clone();
        use_effect_with_deps(
            move |highlighted| {
                if let (Some(index), Some(list)) = (*highlighted, list_ref.cast::<Element>()) {
                    if let Some(item) = list.children().item(index as u32) {
                        let options = ScrollIntoViewOptions::new();
                        options.set_block(ScrollLogicalPosition::Nearest);
                        item.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            listbox.highlighted(),
        );
    }

    let disabled = props.disabled;
    let on_trigger_click = {
        let apply = apply.clone();
        let current = *listbox;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            let mut next = current;
            let effect = next.toggle(selected_index, len);
            apply.emit((next, effect));
        })
    };
    let on_trigger_keydown = {
        let apply = apply.clone();
        let current = *listbox;
        Callback::from(move |event: KeyboardEvent| {
            if disabled || current.is_open() {
                return;
            }
            let mut next = current;
            let effect = next.key(ListboxKey::from_key(&event.key()), selected_index, len);
            if effect.consumes_key() {
                event.prevent_default();
                apply.emit((next, effect));
            }
        })
    };

    let list_id = list_id(props.id.as_deref());
    let label = selected_index
        .and_then(|index| props.options.get(index))
        .map(|option| html! { <span class="select-value">{ option.label.clone() }</span> })
        .unwrap_or_else(|| html! { <span class="select-placeholder">{ props.placeholder.clone() }</span> });

    html! {
        <div class={classes!("select", listbox.is_open().then_some("open"), disabled.then_some("disabled"), props.class.clone())}>
            <button
                type="button"
                id={props.id.clone()}
                ref={trigger_ref}
                class="select-trigger"
                aria-haspopup="listbox"
                aria-expanded={listbox.is_open().to_string()}
                aria-controls={list_id.clone()}
                {disabled}
                onclick={on_trigger_click}
                onkeydown={on_trigger_keydown}
            >
                { label }
                <span class="select-chevron" aria-hidden="true">{ "▾" }</span>
            </button>
            {
                if listbox.is_open() {
                    html! {
                        <ul id={list_id} ref={list_ref} class="select-list" role="listbox" tabindex="-1">
                            { for props.options.iter().enumerate().map(|(index, option)| {
                                let selected = Some(index) == selected_index;
                                let highlighted = Some(index) == listbox.highlighted();
                                let onclick = {
                                    let apply = apply.clone();
                                    let current = *listbox;
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = current;
                                        let effect = next.click_option(index, len);
                                        apply.emit((next, effect));
                                    })
                                };
                                let onmouseenter = {
                                    let apply = apply.clone();
                                    let current = *listbox;
                                    Callback::from(move |_: MouseEvent| {
                                        let mut next = current;
                                        let effect = next.hover(index, len);
                                        if effect != ListboxEffect::None {
                                            apply.emit((next, effect));
                                        }
                                    })
                                };
                                // keep focus on the trigger while clicking an option
                                let onmousedown = Callback::from(|event: MouseEvent| event.prevent_default());
                                html! {
                                    <li
                                        key={option.value.to_string()}
                                        role="option"
                                        aria-selected={selected.to_string()}
                                        class={classes!("select-option", selected.then_some("selected"), highlighted.then_some("highlighted"))}
                                        {onclick}
                                        {onmouseenter}
                                        {onmousedown}
                                    >
                                        <span class="select-option-label">{ option.label.clone() }</span>
                                        {
                                            if let Some(description) = &option.description {
                                                html! { <span class="select-option-description">{ description.clone() }</span> }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn list_id(trigger_id: Option<&str>) -> String {
    trigger_id
        .map(|id| format!("{}-listbox", id))
        .unwrap_or_else(|| "select-listbox".to_string())
}

fn targets_inside(event: &Event, refs: &[NodeRef; 2]) -> bool {
    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
    refs.iter()
        .any(|node_ref| node_ref.get().map(|node| node.contains(target.as_ref())).unwrap_or(false))
}

fn focus(node_ref: &NodeRef) {
    if let Some(element) = node_ref.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_id_follows_trigger_id() {
        assert_eq!(list_id(Some("schedule-challenge")), "schedule-challenge-listbox");
        assert_ne!(list_id(Some("contact-challenge")), list_id(Some("schedule-challenge")));
        assert_eq!(list_id(None), "select-listbox");
    }
}
