use yew::prelude::*;

use crate::state::dual_state::use_dual_state;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct TabsContext {
    pub value: AttrValue,
    pub orientation: Orientation,
    set_value: Callback<AttrValue>,
}

impl TabsContext {
    pub fn activate(&self, value: AttrValue) {
        self.set_value.emit(value);
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.value.as_str() == value
    }
}

#[hook]
pub fn use_tabs_context() -> TabsContext {
    use_context::<TabsContext>().expect("Tabs components must be rendered inside <Tabs>")
}

fn trigger_id(value: &str) -> String {
    format!("tabs-trigger-{}", value)
}

fn panel_id(value: &str) -> String {
    format!("tabs-panel-{}", value)
}

#[derive(Properties, PartialEq)]
pub struct TabsProps {
    pub default_value: AttrValue,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or_default]
    pub on_value_change: Option<Callback<AttrValue>>,
    #[prop_or_default]
    pub orientation: Orientation,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Tabs)]
pub fn tabs(props: &TabsProps) -> Html {
    let state = use_dual_state(
        props.value.clone(),
        props.default_value.clone(),
        props.on_value_change.clone(),
    );
    let context = TabsContext {
        value: state.value.clone(),
        orientation: props.orientation,
        set_value: state.setter(),
    };

    html! {
        <ContextProvider<TabsContext> context={context}>
            <div
                class={classes!("tabs", format!("tabs-{}", props.orientation.as_str()), props.class.clone())}
                data-orientation={props.orientation.as_str()}
            >
                { for props.children.iter() }
            </div>
        </ContextProvider<TabsContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsListProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsList)]
pub fn tabs_list(props: &TabsListProps) -> Html {
    let context = use_tabs_context();
    html! {
        <div
            role="tablist"
            aria-orientation={context.orientation.as_str()}
            class={classes!("tabs-list", props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsTriggerProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsTrigger)]
pub fn tabs_trigger(props: &TabsTriggerProps) -> Html {
    let context = use_tabs_context();
    let active = context.is_active(&props.value);
    let onclick = {
        let context = context.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| context.activate(value.clone()))
    };

    html! {
        <button
            type="button"
            role="tab"
            id={trigger_id(&props.value)}
            aria-controls={panel_id(&props.value)}
            aria-selected={active.to_string()}
            data-state={if active { "active" } else { "inactive" }}
            tabindex={if active { "0" } else { "-1" }}
            class={classes!("tabs-trigger", active.then_some("active"), props.class.clone())}
            {onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabsContentProps {
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TabsContent)]
pub fn tabs_content(props: &TabsContentProps) -> Html {
    let context = use_tabs_context();
    if !context.is_active(&props.value) {
        return html! {};
    }

    html! {
        <div
            role="tabpanel"
            id={panel_id(&props.value)}
            aria-labelledby={trigger_id(&props.value)}
            class={classes!("tabs-content", props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
