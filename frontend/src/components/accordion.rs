use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::dual_state::use_dual_state;
use crate::state::presence::Presence;
use crate::state::selection;

const TRANSITION_MS: u32 = 250;

#[derive(Clone, PartialEq)]
pub struct AccordionContext {
    pub value: Option<AttrValue>,
    toggle: Callback<AttrValue>,
}

impl AccordionContext {
    pub fn toggle(&self, key: AttrValue) {
        self.toggle.emit(key);
    }

    pub fn is_open(&self, key: &AttrValue) -> bool {
        selection::is_active(self.value.as_ref(), key)
    }
}

#[hook]
pub fn use_accordion_context() -> AccordionContext {
    use_context::<AccordionContext>().expect("AccordionItem must be rendered inside <AccordionSingle>")
}

#[derive(Properties, PartialEq)]
pub struct AccordionSingleProps {
    #[prop_or_default]
    pub default_value: Option<AttrValue>,
    /// `Some` makes the accordion controlled; `Some(None)` means all closed.
    #[prop_or_default]
    pub value: Option<Option<AttrValue>>,
    #[prop_or_default]
    pub on_value_change: Option<Callback<Option<AttrValue>>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionSingle)]
pub fn accordion_single(props: &AccordionSingleProps) -> Html {
    let state = use_dual_state(
        props.value.clone(),
        props.default_value.clone(),
        props.on_value_change.clone(),
    );
    let toggle = {
        let state = state.clone();
        Callback::from(move |key: AttrValue| {
            state.update(|current| selection::toggle(current.as_ref(), &key));
        })
    };
    let context = AccordionContext { value: state.value.clone(), toggle };

    html! {
        <ContextProvider<AccordionContext> context={context}>
            <div class={classes!("accordion", props.class.clone())}>
                { for props.children.iter() }
            </div>
        </ContextProvider<AccordionContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub value: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let context = use_accordion_context();
    let open = context.is_open(&props.value);
    let presence = use_state(|| Presence::initial(open));

    {
        let presence = presence.clone();
        use_effect_with_deps(
            move |open| {
                let next = (*presence).sync(*open);
                if next != *presence {
                    presence.set(next);
                }
                let settle = matches!(next, Presence::Entering | Presence::Exiting).then(|| {
                    let presence = presence.clone();
                    Timeout::new(TRANSITION_MS, move || presence.set(next.settle()))
                });
                move || drop(settle)
            },
            open,
        );
    }

    let trigger_id = format!("accordion-trigger-{}", props.value);
    let panel_id = format!("accordion-panel-{}", props.value);
    let onclick = {
        let context = context.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| context.toggle(value.clone()))
    };

    html! {
        <div class={classes!("accordion-item", open.then_some("open"), props.class.clone())}>
            <button
                type="button"
                id={trigger_id.clone()}
                class="accordion-trigger"
                aria-expanded={open.to_string()}
                aria-controls={panel_id.clone()}
                {onclick}
            >
                <span class="accordion-heading">
                    {
                        if let Some(eyebrow) = &props.eyebrow {
                            html! { <span class="accordion-eyebrow">{ eyebrow.clone() }</span> }
                        } else {
                            html! {}
                        }
                    }
                    <span class="accordion-title">{ props.title.clone() }</span>
                </span>
                <span class="accordion-icon" aria-hidden="true">{ if open { "−" } else { "+" } }</span>
            </button>
            {
                if presence.is_mounted() {
                    html! {
                        <div
                            id={panel_id}
                            role="region"
                            aria-labelledby={trigger_id}
                            class={classes!("accordion-panel", presence.class())}
                        >
                            {
                                if let Some(description) = &props.description {
                                    html! { <p class="accordion-description">{ description.clone() }</p> }
                                } else {
                                    html! {}
                                }
                            }
                            { for props.children.iter() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .accordion-panel {
                        overflow: hidden;
                    }
                    .accordion-panel.entering {
                        animation: accordion-expand 250ms ease-out;
                    }
                    .accordion-panel.exiting {
                        animation: accordion-collapse 250ms ease-in forwards;
                    }
                    @keyframes accordion-expand {
                        from { max-height: 0; opacity: 0; }
                        to { max-height: 600px; opacity: 1; }
                    }
                    @keyframes accordion-collapse {
                        from { max-height: 600px; opacity: 1; }
                        to { max-height: 0; opacity: 0; }
                    }
                "#}
            </style>
        </div>
    }
}
