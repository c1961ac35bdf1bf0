use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::utils::validation::validate_contact_form;

const GENERIC_ERROR: &str = "Something went wrong while sending your message. Please try again.";
const SUCCESS_MESSAGE: &str = "Message sent successfully! Our team will get back to you soon.";

#[derive(Serialize)]
struct ContactRequest {
    name: String,
    email: String,
    phone: String,
    company: String,
    message: String,
}

#[derive(Deserialize)]
struct ContactResponse {
    success: bool,
    #[serde(default)]
    id: Option<u64>,
}

#[derive(Clone, PartialEq)]
enum FormMessage {
    Success(&'static str),
    Error(&'static str),
}

impl FormMessage {
    fn class(&self) -> &'static str {
        match self {
            FormMessage::Success(_) => "success",
            FormMessage::Error(_) => "error",
        }
    }

    fn text(&self) -> &'static str {
        match self {
            FormMessage::Success(text) | FormMessage::Error(text) => text,
        }
    }
}

/// The contact form: validates locally, posts to the intake API, and shows a
/// transient status message. The submit button is disabled while a request is
/// in flight so a form instance never has two outstanding submissions.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);
    let form_message = use_state(|| None::<FormMessage>);
    let is_submitting = use_state(|| false);

    let on_input = |field: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(textarea.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let company = company.clone();
        let message = message.clone();
        let form_message = form_message.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let trimmed_name = name.trim().to_string();
            let trimmed_email = email.trim().to_string();
            let trimmed_phone = phone.trim().to_string();
            let trimmed_company = company.trim().to_string();

            // Validation failures stay local: no request goes out, the fields
            // keep their values, and the message waits for the next attempt.
            if let Err(validation_error) = validate_contact_form(
                &trimmed_name,
                &trimmed_email,
                &trimmed_phone,
                &trimmed_company,
            ) {
                form_message.set(Some(FormMessage::Error(validation_error.message())));
                return;
            }

            is_submitting.set(true);
            let payload = ContactRequest {
                name: trimmed_name,
                email: trimmed_email,
                phone: trimmed_phone,
                company: trimmed_company,
                message: message.trim().to_string(),
            };

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let company = company.clone();
            let message = message.clone();
            let form_message = form_message.clone();
            let is_submitting = is_submitting.clone();
            spawn_local(async move {
                let outcome = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&payload)
                    .unwrap()
                    .send()
                    .await
                {
                    Ok(response) if response.ok() => match response.json::<ContactResponse>().await {
                        Ok(body) if body.success => {
                            log!("Contact request accepted, id:", body.id.unwrap_or_default());
                            name.set(String::new());
                            email.set(String::new());
                            phone.set(String::new());
                            company.set(String::new());
                            message.set(String::new());
                            FormMessage::Success(SUCCESS_MESSAGE)
                        }
                        _ => FormMessage::Error(GENERIC_ERROR),
                    },
                    Ok(response) => {
                        log!("Contact request failed with status:", response.status());
                        FormMessage::Error(GENERIC_ERROR)
                    }
                    Err(e) => {
                        log!("Network request failed:", e.to_string());
                        FormMessage::Error(GENERIC_ERROR)
                    }
                };

                form_message.set(Some(outcome));
                is_submitting.set(false);

                // Whatever the outcome was, the status line clears itself.
                gloo_timers::future::TimeoutFuture::new(5_000).await;
                form_message.set(None);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="form-group">
                <label for="name">{"Name *"}</label>
                <input
                    id="name"
                    type="text"
                    value={(*name).clone()}
                    oninput={on_input(name.clone())}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email *"}</label>
                <input
                    id="email"
                    type="email"
                    value={(*email).clone()}
                    oninput={on_input(email.clone())}
                />
            </div>
            <div class="form-group">
                <label for="phone">{"Phone *"}</label>
                <input
                    id="phone"
                    type="tel"
                    value={(*phone).clone()}
                    oninput={on_input(phone.clone())}
                />
            </div>
            <div class="form-group">
                <label for="company">{"Company *"}</label>
                <input
                    id="company"
                    type="text"
                    value={(*company).clone()}
                    oninput={on_input(company.clone())}
                />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    rows="4"
                    value={(*message).clone()}
                    oninput={on_message_input}
                />
            </div>
            if let Some(status) = &*form_message {
                <div class={classes!("form-message", status.class())}>{ status.text() }</div>
            }
            <button type="submit" disabled={*is_submitting}>
                { if *is_submitting { "Sending..." } else { "Send Request" } }
            </button>
        </form>
    }
}
