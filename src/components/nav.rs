use yew::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Class on the hamburger icon, animates it into a cross.
    pub fn toggle_class(self) -> Option<&'static str> {
        self.open.then_some("open")
    }

    pub fn panel_class(self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}

const LINKS: [(&str, &str); 5] = [
    ("#inicio", "Início"),
    ("#fundadoras", "Fundadoras"),
    ("#projetos", "Projetos"),
    ("#servicos", "Serviços"),
    ("#contato", "Contato"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#inicio" class="nav-logo">{"TVS"}</a>
                <button
                    id="menu-toggle"
                    class={classes!("menu-toggle", menu.toggle_class())}
                    aria-label="Abrir menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-links", menu.panel_class())}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <li><a href={*href} onclick={close_menu.clone()}>{*label}</a></li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_clicks_toggle_the_panel_on_then_off() {
        let menu = MenuState::default();
        assert_eq!(menu.panel_class(), None);

        let menu = menu.toggled();
        assert_eq!(menu.panel_class(), Some("active"));
        assert_eq!(menu.toggle_class(), Some("open"));

        let menu = menu.toggled();
        assert_eq!(menu.panel_class(), None);
        assert_eq!(menu.toggle_class(), None);
    }

    #[test]
    fn following_a_link_closes_the_menu() {
        assert!(!MenuState { open: true }.closed().open);
        assert!(!MenuState::default().closed().open);
    }
}
