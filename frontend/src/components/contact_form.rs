use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use shared::contact::{ContactResponse, ContactSubmission, CHALLENGE_OPTIONS};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::language::use_language;
use super::select::{Select, SelectOption};
use super::toast::use_toast;
use crate::config;

const SUCCESS_DELAY_MS: u32 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// `Err(None)` means show the generic failure message.
async fn send_submission(submission: &ContactSubmission) -> Result<String, Option<String>> {
    let url = format!("{}/api/contact", config::get_backend_url());
    let request = Request::post(&url).json(submission).map_err(|e| {
        error!("Failed to serialize contact submission: {:?}", e);
        None
    })?;
    let response = request.send().await.map_err(|e| {
        error!("Contact request failed: {:?}", e);
        None
    })?;
    let ok = response.ok();
    let message = response.json::<ContactResponse>().await.ok().map(|body| body.message);
    if ok {
        Ok(message.unwrap_or_default())
    } else {
        error!("Contact endpoint returned {}", response.status());
        Err(message)
    }
}

fn field_id(prefix: &str, field: &str) -> AttrValue {
    AttrValue::from(format!("{}-{}", prefix, field))
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// Keeps element ids unique when the form is on the page more than once.
    #[prop_or(AttrValue::from("contact"))]
    pub id_prefix: AttrValue,
    #[prop_or_default]
    pub on_success: Option<Callback<()>>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let language = use_language();
    let toast = use_toast();
    let t = language.t();

    let full_name = use_state(String::new);
    let work_email = use_state(String::new);
    let company = use_state(String::new);
    let challenge = use_state(|| AttrValue::from(""));
    let project = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);
    let feedback = use_state(|| None::<String>);
    let challenge_id = field_id(&props.id_prefix, "challenge");
    let success_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let success_timer = success_timer.clone();
        use_effect_with_deps(move |_| move || drop(success_timer.borrow_mut().take()), ());
    }

    let options: Vec<SelectOption> = CHALLENGE_OPTIONS
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect();

    let on_input = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let on_project = {
        let project = project.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            project.set(input.value());
        })
    };
    let on_challenge = {
        let challenge = challenge.clone();
        Callback::from(move |value: AttrValue| challenge.set(value))
    };

    let onsubmit = {
        let (full_name, work_email, company, challenge, project) =
            (full_name.clone(), work_email.clone(), company.clone(), challenge.clone(), project.clone());
        let status = status.clone();
        let feedback = feedback.clone();
        let success_timer = success_timer.clone();
        let on_success = props.on_success.clone();
        let code = language.language.code();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == FormStatus::Loading {
                return;
            }

            let submission = ContactSubmission {
                full_name: Some((*full_name).clone()),
                work_email: Some((*work_email).clone()),
                company: Some((*company).clone()),
                challenge: Some(challenge.to_string()),
                project: Some((*project).clone()),
                locale: Some(code.to_string()),
            };
            if let Err(rejection) = submission.validate() {
                status.set(FormStatus::Error);
                feedback.set(Some(rejection.to_string()));
                return;
            }

            status.set(FormStatus::Loading);
            feedback.set(None);

            let (full_name, work_email, company, challenge, project) =
                (full_name.clone(), work_email.clone(), company.clone(), challenge.clone(), project.clone());
            let status = status.clone();
            let feedback = feedback.clone();
            let toast = toast.clone();
            let success_timer = success_timer.clone();
            let on_success = on_success.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match send_submission(&submission).await {
                    Ok(_) => {
                        info!("Contact submission accepted");
                        full_name.set(String::new());
                        work_email.set(String::new());
                        company.set(String::new());
                        challenge.set(AttrValue::from(""));
                        project.set(String::new());
                        status.set(FormStatus::Success);
                        feedback.set(Some(t.contact.success.to_string()));
                        toast.success(t.toast.sent_title, t.contact.success);
                        if let Some(on_success) = on_success {
                            *success_timer.borrow_mut() =
                                Some(Timeout::new(SUCCESS_DELAY_MS, move || on_success.emit(())));
                        }
                    }
                    Err(message) => {
                        let message = message.unwrap_or_else(|| t.contact.fallback_error.to_string());
                        status.set(FormStatus::Error);
                        feedback.set(Some(message.clone()));
                        toast.error(t.toast.failed_title, message);
                    }
                }
            });
        })
    };

    let loading = *status == FormStatus::Loading;
    let feedback_class = match *status {
        FormStatus::Success => "contact-feedback success",
        FormStatus::Error => "contact-feedback error",
        FormStatus::Idle | FormStatus::Loading => "contact-feedback",
    };

    html! {
        <form class={classes!("contact-form", props.class.clone())} {onsubmit} novalidate={true}>
            <div class="contact-row">
                <label class="contact-field">
                    <span>{ t.contact.full_name }</span>
                    <input
                        type="text"
                        name="fullName"
                        autocomplete="name"
                        value={(*full_name).clone()}
                        oninput={on_input(&full_name)}
                        disabled={loading}
                    />
                </label>
                <label class="contact-field">
                    <span>{ t.contact.work_email }</span>
                    <input
                        type="email"
                        name="workEmail"
                        autocomplete="email"
                        value={(*work_email).clone()}
                        oninput={on_input(&work_email)}
                        disabled={loading}
                    />
                </label>
            </div>
            <label class="contact-field">
                <span>{ t.contact.company }</span>
                <input
                    type="text"
                    name="company"
                    autocomplete="organization"
                    value={(*company).clone()}
                    oninput={on_input(&company)}
                    disabled={loading}
                />
            </label>
            <div class="contact-field">
                <label for={challenge_id.clone()}>{ t.contact.challenge }</label>
                <Select
                    id={challenge_id}
                    {options}
                    value={(*challenge).clone()}
                    on_change={on_challenge}
                    placeholder={t.contact.challenge_placeholder}
                    disabled={loading}
                />
            </div>
            <label class="contact-field">
                <span>{ t.contact.project }</span>
                <textarea
                    name="project"
                    rows="4"
                    value={(*project).clone()}
                    oninput={on_project}
                    disabled={loading}
                />
            </label>
            <button type="submit" class="contact-submit" disabled={loading}>
                { if loading { t.contact.sending } else { t.contact.submit } }
            </button>
            {
                if let Some(message) = (*feedback).clone() {
                    html! { <p class={feedback_class} role="status">{ message }</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_keep_both_forms_apart() {
        let section = field_id("contact", "challenge");
        let dialog = field_id("schedule", "challenge");
        assert_eq!(section.as_str(), "contact-challenge");
        assert_ne!(section, dialog);
    }
}
