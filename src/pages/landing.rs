use std::rc::Rc;

use web_sys::{Element, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::contact_form::ContactFormView;
use crate::components::overlays::{
    founder_overlay, project_overlay, service_overlay, use_focus_on_open, use_scroll_lock,
};
use crate::config::SiteContent;
use crate::dispatch::{collect_hits, resolve};
use crate::modal::{overlay_dom_id, ModalAction, ModalState};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let content = props.content.clone();

    // Every founder card has an open control pointing at its overlay.
    let modals = {
        let content = content.clone();
        use_reducer(move || ModalState::new(content.founder_ids(), content.founder_ids()))
    };

    use_scroll_lock(modals.scroll_locked());
    use_focus_on_open(modals.focus_target());

    {
        let modals = modals.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modals.dispatch(ModalAction::CloseAll);
            }
        });
    }

    let root = use_node_ref();

    // Single listener for the whole page; see `dispatch` for the role table.
    let onclick = {
        let root = root.clone();
        let modals = modals.clone();
        let content = content.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(root) = root.cast::<Element>() else {
                return;
            };
            let Some(dispatch) = resolve(&collect_hits(e.target(), &root)) else {
                return;
            };
            e.prevent_default();
            if dispatch.stop_propagation {
                e.stop_propagation();
            }
            if let Some(action) = dispatch.intent.into_action(&content) {
                modals.dispatch(action);
            }
        })
    };

    html! {
        <div class="landing-page" ref={root} onclick={onclick}>
            <header id="inicio" class="hero">
                <div class="hero-content">
                    <h1>{"The Sister's Vision Services"}</h1>
                    <p class="hero-subtitle">
                        {"Gastronomia e eventos com a assinatura de duas irmãs."}
                    </p>
                    <a href="#contato" class="hero-cta">{"Peça um orçamento"}</a>
                </div>
            </header>

            <section id="fundadoras" class="founders">
                <h2>{"Fundadoras"}</h2>
                <div class="founders-grid">
                    { for content.founders.iter().map(|founder| html! {
                        <article class="founder-card" data-role="card" data-key={founder.id.clone()}>
                            <img src={founder.photo.clone()} alt={founder.name.clone()} loading="lazy" />
                            <h3>{&founder.name}</h3>
                            <p>{&founder.role}</p>
                            <button
                                class="btn-modal"
                                data-role="open-control"
                                aria-controls={overlay_dom_id(&founder.id)}
                                aria-expanded={modals.is_expanded(&founder.id).to_string()}
                            >
                                {"Conhecer"}
                            </button>
                        </article>
                    }) }
                </div>
            </section>

            <section id="projetos" class="gallery">
                <h2>{"Projetos"}</h2>
                <Carousel content={content.clone()} />
            </section>

            <section id="servicos" class="services">
                <h2>{"Serviços"}</h2>
                <div class="services-grid">
                    { for content.services.iter().map(|service| html! {
                        <div class="service-card" data-role="service-card" data-key={service.key.clone()}>
                            <i class={service.icon.clone()}></i>
                            <h3>{&service.title}</h3>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contato" class="contact">
                <h2>{"Contato"}</h2>
                <ContactFormView />
            </section>

            { for content.founders.iter().map(|founder| founder_overlay(founder, &modals)) }
            { project_overlay(&modals) }
            { service_overlay(&modals) }
        </div>
    }
}
