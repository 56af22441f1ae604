use yew::prelude::*;

use super::contact_form::ContactForm;
use super::dialog::{Dialog, DialogClose, DialogContent, DialogDescription, DialogHeader, DialogTitle, DialogTrigger};
use super::language::use_language;

#[derive(Properties, PartialEq)]
pub struct ScheduleDialogProps {
    /// Overrides the translated call to action.
    #[prop_or_default]
    pub trigger_label: Option<AttrValue>,
    #[prop_or_default]
    pub trigger_class: Classes,
    #[prop_or_default]
    pub on_open_change: Option<Callback<bool>>,
}

#[function_component(ScheduleDialog)]
pub fn schedule_dialog(props: &ScheduleDialogProps) -> Html {
    let t = use_language().t();
    let open = use_state(|| false);

    let on_open_change = {
        let open = open.clone();
        let forward = props.on_open_change.clone();
        Callback::from(move |next: bool| {
            open.set(next);
            if let Some(forward) = &forward {
                forward.emit(next);
            }
        })
    };
    let on_success = {
        let on_open_change = on_open_change.clone();
        Callback::from(move |_| on_open_change.emit(false))
    };
    let label = props
        .trigger_label
        .clone()
        .unwrap_or_else(|| AttrValue::from(t.navbar.cta));

    html! {
        <Dialog open={Some(*open)} {on_open_change}>
            <DialogTrigger class={classes!("schedule-trigger", props.trigger_class.clone())}>
                { label }
            </DialogTrigger>
            <DialogContent class="schedule-dialog">
                <DialogClose class="schedule-dialog-close" aria_label={AttrValue::from(t.contact.close_label)}>
                    { "×" }
                </DialogClose>
                <DialogHeader>
                    <DialogTitle>{ t.contact.dialog_title }</DialogTitle>
                    <DialogDescription>{ t.contact.dialog_description }</DialogDescription>
                </DialogHeader>
                <ContactForm id_prefix="schedule" {on_success} />
            </DialogContent>
        </Dialog>
    }
}
