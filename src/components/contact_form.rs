use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::STATUS_CLEAR_MS;
use crate::contact::{
    submit, timestamp, validate, ContactForm, FieldReport, StatusMessage, INVALID_ALERT,
};
use crate::email::EmailJs;

/// Shows `message` and clears whatever is displayed once the delay runs out.
fn show_status(status: &UseStateHandle<Option<StatusMessage>>, message: StatusMessage) {
    status.set(Some(message));
    let status = status.clone();
    Timeout::new(STATUS_CLEAR_MS, move || status.set(None)).forget();
}

fn border(color: &str) -> String {
    format!("border-color: {};", color)
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let report = use_state(FieldReport::default);
    let sending = use_state(|| false);
    let status = use_state(|| None::<StatusMessage>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let report = report.clone();
        let sending = sending.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let current = (*form).clone();
            let checked = validate(&current);
            report.set(checked);
            if !checked.is_valid() {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(INVALID_ALERT);
                }
                return;
            }

            let form = form.clone();
            let sending = sending.clone();
            let status = status.clone();
            spawn_local(async move {
                let sender = EmailJs::from_config();
                let result = submit(&sender, &current, timestamp(), |phase| {
                    sending.set(phase.is_sending());
                    show_status(&status, phase.status());
                })
                .await;

                // Keep the typed text on failure so nothing is lost.
                if result.is_ok() {
                    form.set(ContactForm::default());
                }
            });
        })
    };

    html! {
        <form id="contact-form" class="contact-form" onsubmit={onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Nome"}</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    value={form.name.clone()}
                    oninput={on_name}
                    style={border(report.name.border_color())}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    value={form.email.clone()}
                    oninput={on_email}
                    style={border(report.email.border_color())}
                />
            </div>
            <div class="form-group">
                <label for="message">{"Mensagem"}</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    value={form.message.clone()}
                    oninput={on_message}
                    style={border(report.message.border_color())}
                />
            </div>
            <button type="submit" class="submit-btn" disabled={*sending}>
                if *sending {
                    <><i class="fas fa-spinner fa-spin"></i>{" Enviando..."}</>
                } else {
                    <><i class="fas fa-paper-plane"></i>{" Enviar Mensagem"}</>
                }
            </button>
            <p id="form-status" style={status.map(|s| format!("color: {};", s.color())).unwrap_or_default()}>
                {status.map(|s| s.text).unwrap_or_default()}
            </p>
        </form>
    }
}
