use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod contact;
mod dispatch;
mod email;
mod modal;
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod nav;
    pub mod overlays;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use config::SiteContent;
use pages::landing::Landing;

fn load_content() -> SiteContent {
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Loaded {} founders, {} projects, {} services",
                content.founders.len(),
                content.projects.len(),
                content.services.len()
            );
            content
        }
        Err(e) => {
            error!("Site content rejected, rendering without it: {}", e);
            SiteContent::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let content: Rc<SiteContent> = use_memo(|_| load_content(), ());

    html! {
        <>
            <Nav />
            <Landing content={content} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
