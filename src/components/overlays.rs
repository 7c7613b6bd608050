//! Overlay markup plus the hooks that keep page state in line with `ModalState`.

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew::virtual_dom::VNode;

use crate::config::{Founder, FOCUS_DELAY_MS};
use crate::modal::{overlay_dom_id, ModalState, PROJECT_OVERLAY, SERVICE_OVERLAY};

fn display(visible: bool, shown: &str) -> String {
    format!("display: {};", if visible { shown } else { "none" })
}

/// Locks `<body>` scrolling while an overlay is up.
#[hook]
pub fn use_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                let value = if *locked { "hidden" } else { "" };
                if body.style().set_property("overflow", value).is_err() {
                    warn!("Could not set body overflow");
                }
            }
            || ()
        },
        locked,
    );
}

/// Moves focus to the close button of a freshly opened profile overlay.
#[hook]
pub fn use_focus_on_open(target: Option<String>) {
    use_effect_with_deps(
        move |target| {
            if let Some(id) = target.clone() {
                // Fire and forget; if the overlay closed meanwhile the button is just hidden.
                Timeout::new(FOCUS_DELAY_MS, move || focus_close_button(&id)).forget();
            }
            || ()
        },
        target,
    );
}

fn focus_close_button(id: &str) {
    let button = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&overlay_dom_id(id)))
        .and_then(|overlay| overlay.query_selector(".close-modal").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    if let Some(button) = button {
        let _ = button.focus();
    }
}

pub fn founder_overlay(founder: &Founder, state: &ModalState) -> Html {
    let visible = state.is_visible(&founder.id);
    html! {
        <div
            id={overlay_dom_id(&founder.id)}
            class="modal"
            data-role="backdrop"
            role="dialog"
            aria-modal="true"
            aria-hidden={state.aria_hidden(&founder.id)}
            style={display(visible, "block")}
        >
            <div class="modal-content" data-role="content">
                <button class="close-modal" data-role="dismiss" aria-label="Fechar">{"×"}</button>
                <img class="modal-photo" src={founder.photo.clone()} alt={founder.name.clone()} />
                <h2>{&founder.name}</h2>
                <h3 class="modal-role">{&founder.role}</h3>
                { for founder.bio.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
            </div>
        </div>
    }
}

pub fn project_overlay(state: &ModalState) -> Html {
    let visible = state.is_visible(PROJECT_OVERLAY);
    let content = state.content().filter(|c| c.overlay == PROJECT_OVERLAY);
    let title = content.map(|c| c.title.clone()).unwrap_or_default();

    html! {
        <div
            id={overlay_dom_id(PROJECT_OVERLAY)}
            class="modal"
            data-role="backdrop"
            aria-hidden={state.aria_hidden(PROJECT_OVERLAY)}
            style={display(visible, "block")}
        >
            <div class="modal-content" data-role="content">
                <button class="close-modal" data-role="dismiss" aria-label="Fechar">{"×"}</button>
                <img
                    id="modal-project-img"
                    src={content.and_then(|c| c.image.clone()).unwrap_or_default()}
                    alt={title.clone()}
                />
                <h2 id="modal-project-title">{title}</h2>
                <p id="modal-project-desc">{content.map(|c| c.description.clone()).unwrap_or_default()}</p>
                <div id="modal-project-details" class="modal-details">
                    if let Some(details) = content.and_then(|c| c.details.clone()) {
                        <RawHtml html={details} />
                    }
                </div>
            </div>
        </div>
    }
}

pub fn service_overlay(state: &ModalState) -> Html {
    let visible = state.is_visible(SERVICE_OVERLAY);
    let content = state.content().filter(|c| c.overlay == SERVICE_OVERLAY);

    html! {
        <div
            id={overlay_dom_id(SERVICE_OVERLAY)}
            class="modal service-modal"
            data-role="backdrop"
            aria-hidden={state.aria_hidden(SERVICE_OVERLAY)}
            style={display(visible, "flex")}
        >
            <div class="modal-content" data-role="content">
                <button class="close-btn" data-role="dismiss" aria-label="Fechar">{"×"}</button>
                <i id="modal-icon" class={content.and_then(|c| c.icon.clone()).unwrap_or_default()}></i>
                <h2 id="modal-title">{content.map(|c| c.title.clone()).unwrap_or_default()}</h2>
                <p id="modal-text">{content.map(|c| c.description.clone()).unwrap_or_default()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RawHtmlProps {
    html: String,
}

/// Renders trusted markup from the site content as-is.
#[function_component(RawHtml)]
fn raw_html(props: &RawHtmlProps) -> Html {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("div").ok());

    match element {
        Some(element) => {
            element.set_inner_html(&props.html);
            VNode::VRef(element.into())
        }
        None => html! {},
    }
}
