use yew::prelude::*;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use kaycore_common::contact::{MAX_MESSAGE_CHARS, SITUATIONS, TIMELINES, USE_CASES};
use kaycore_common::{ContactErrors, ContactField, ContactRequest};
use crate::components::notification::{Banner, BannerKind};
use crate::config::{self, CONTACT_EMAIL};

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
    #[serde(default)]
    fields: Option<ContactErrors>,
}

#[derive(Debug, Error)]
enum SubmitError {
    #[error("Could not reach the server. Please try again.")]
    Network(String),
    #[error("Please fix the highlighted fields.")]
    Invalid(ContactErrors),
    #[error("{0}")]
    Rejected(String),
}

/// Trims and validates. `Err` means nothing may be sent.
pub fn prepare_submission(form: &ContactRequest) -> Result<ContactRequest, ContactErrors> {
    let request = form.trimmed();
    request.validate()?;
    Ok(request)
}

async fn send_contact(request: &ContactRequest) -> Result<String, SubmitError> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(request)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        return match response.json::<SubmitResponse>().await {
            Ok(body) => Ok(body.message),
            Err(_) => Ok("Thanks! We'll be in touch soon.".to_string()),
        };
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(ErrorResponse { fields: Some(fields), .. }) if !fields.is_empty() => Err(SubmitError::Invalid(fields)),
        Ok(body) => Err(SubmitError::Rejected(body.error)),
        Err(_) => Err(SubmitError::Rejected(format!(
            "Something went wrong ({}). Please try again or email {}.",
            status, CONTACT_EMAIL
        ))),
    }
}

fn field_error(errors: &ContactErrors, field: ContactField) -> Html {
    match errors.get(&field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactRequest::default);
    let errors = use_state(ContactErrors::new);
    let submitting = use_state(|| false);
    let banner = use_state(|| None::<(BannerKind, String)>);

    let text_input = |apply: fn(&mut ContactRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let select_input = |apply: fn(&mut ContactRequest, String)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, select.value());
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactRequest { message: area.value(), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let banner = banner.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let request = match prepare_submission(&form) {
                Ok(request) => request,
                Err(found) => {
                    info!("Contact form has {} invalid fields", found.len());
                    errors.set(found);
                    return;
                }
            };

            errors.set(ContactErrors::new());
            banner.set(None);
            submitting.set(true);

            let form = form.clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let banner = banner.clone();
            spawn_local(async move {
                match send_contact(&request).await {
                    Ok(message) => {
                        form.set(ContactRequest::default());
                        banner.set(Some((BannerKind::Success, message)));
                    }
                    Err(e) => {
                        warn!("Contact submission failed: {:?}", e);
                        banner.set(Some((BannerKind::Error, e.to_string())));
                        if let SubmitError::Invalid(fields) = e {
                            errors.set(fields);
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };

    let dismiss = {
        let banner = banner.clone();
        Callback::from(move |_: ()| banner.set(None))
    };

    let message_len = form.message.chars().count();

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Let's talk"}</h1>
                <p>{"Tell us a little about what you're working on. A senior engineer, not a sales rep, will reply within one business day."}</p>
            </section>
            <section class="contact-section">
                if let Some((kind, message)) = (*banner).clone() {
                    <Banner {kind} message={message} on_dismiss={dismiss.clone()} />
                }
                <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                    <div class="form-row">
                        <label>
                            {"Name *"}
                            <input type="text" value={form.name.clone()}
                                oninput={text_input(|f, v| f.name = v)}
                                class={classes!(errors.contains_key(&ContactField::Name).then_some("invalid"))} />
                            { field_error(&errors, ContactField::Name) }
                        </label>
                        <label>
                            {"Work email *"}
                            <input type="email" value={form.email.clone()}
                                oninput={text_input(|f, v| f.email = v)}
                                class={classes!(errors.contains_key(&ContactField::Email).then_some("invalid"))} />
                            { field_error(&errors, ContactField::Email) }
                        </label>
                    </div>
                    <label>
                        {"Company"}
                        <input type="text" value={form.company.clone()} oninput={text_input(|f, v| f.company = v)} />
                    </label>
                    <div class="form-row">
                        <label>
                            {"What do you need help with?"}
                            <select onchange={select_input(|f, v| f.use_case = v)}>
                                <option value="" selected={form.use_case.is_empty()}>{"Select..."}</option>
                                { for USE_CASES.iter().map(|o| html! { <option value={*o} selected={form.use_case == *o}>{*o}</option> }) }
                            </select>
                        </label>
                        <label>
                            {"Where are you today?"}
                            <select onchange={select_input(|f, v| f.situation = v)}>
                                <option value="" selected={form.situation.is_empty()}>{"Select..."}</option>
                                { for SITUATIONS.iter().map(|o| html! { <option value={*o} selected={form.situation == *o}>{*o}</option> }) }
                            </select>
                        </label>
                        <label>
                            {"Timeline"}
                            <select onchange={select_input(|f, v| f.timeline = v)}>
                                <option value="" selected={form.timeline.is_empty()}>{"Select..."}</option>
                                { for TIMELINES.iter().map(|o| html! { <option value={*o} selected={form.timeline == *o}>{*o}</option> }) }
                            </select>
                        </label>
                    </div>
                    <label>
                        {"Message"}
                        <textarea rows="6" value={form.message.clone()} oninput={on_message}
                            class={classes!(errors.contains_key(&ContactField::Message).then_some("invalid"))} />
                        <span class={classes!("char-count", (message_len > MAX_MESSAGE_CHARS).then_some("over"))}>
                            {format!("{}/{}", message_len, MAX_MESSAGE_CHARS)}
                        </span>
                        { field_error(&errors, ContactField::Message) }
                    </label>
                    <button type="submit" class="primary-button" disabled={*submitting}>
                        { if *submitting { "Sending..." } else { "Send message" } }
                    </button>
                </form>
                <p class="contact-alt">
                    {"Prefer email? "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                </p>
            </section>
            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .contact-hero {
                    text-align: center;
                    padding: 6rem 2rem 2rem;
                }
                .contact-hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-hero p {
                    font-size: 1.2rem;
                    color: #999;
                    max-width: 620px;
                    margin: 0 auto;
                }
                .contact-section {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 2rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .form-row {
                    display: flex;
                    gap: 1rem;
                }
                .form-row label {
                    flex: 1;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    color: #ccc;
                    font-size: 0.95rem;
                }
                .contact-form input, .contact-form select, .contact-form textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 8px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 1rem;
                    font-family: inherit;
                }
                .contact-form .invalid {
                    border-color: #e74c3c;
                }
                .field-error {
                    color: #ff8a7a;
                    font-size: 0.85rem;
                }
                .char-count {
                    align-self: flex-end;
                    color: #666;
                    font-size: 0.8rem;
                }
                .char-count.over {
                    color: #ff8a7a;
                }
                .contact-alt {
                    text-align: center;
                    color: #999;
                    margin-top: 2rem;
                }
                .contact-alt a {
                    color: #7EB2FF;
                }
                @media (max-width: 768px) {
                    .form-row {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_and_bad_email_block_submission() {
        let form = ContactRequest {
            name: "".into(),
            email: "nope".into(),
            ..Default::default()
        };
        let errors = prepare_submission(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Please enter a valid email address");
    }

    #[test]
    fn valid_form_is_trimmed_before_sending() {
        let form = ContactRequest {
            name: "  Lin ".into(),
            email: " lin@example.com ".into(),
            message: "Hello\n".into(),
            ..Default::default()
        };
        let request = prepare_submission(&form).unwrap();
        assert_eq!(request.name, "Lin");
        assert_eq!(request.email, "lin@example.com");
        assert_eq!(request.message, "Hello");
    }

    #[test]
    fn server_field_errors_deserialize() {
        let body: ErrorResponse = serde_json::from_str(
            r#"{"error":"Validation failed","fields":{"name":"Name is required"}}"#,
        )
        .unwrap();
        let fields = body.fields.unwrap();
        assert_eq!(fields[&ContactField::Name], "Name is required");

        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Too many requests"}"#).unwrap();
        assert!(body.fields.is_none());
        assert_eq!(body.error, "Too many requests");
    }
}
