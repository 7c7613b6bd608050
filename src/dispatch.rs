//! Role-based click dispatch.
//!
//! The landing page has one click listener on its root. Elements that react to
//! clicks carry `data-role` (and `data-key` where an overlay or catalog entry is
//! named). The listener collects the role-bearing ancestors of the target and
//! `resolve` picks a single intent from them using `TABLE`.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, Node};

use crate::config::SiteContent;
use crate::modal::{ModalAction, OverlayContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Card,
    OpenControl,
    Dismiss,
    Backdrop,
    /// The content box inside an overlay; shields the backdrop from inner clicks.
    Content,
    GalleryItem,
    ServiceCard,
}

impl Role {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "card" => Some(Role::Card),
            "open-control" => Some(Role::OpenControl),
            "dismiss" => Some(Role::Dismiss),
            "backdrop" => Some(Role::Backdrop),
            "content" => Some(Role::Content),
            "gallery-item" => Some(Role::GalleryItem),
            "service-card" => Some(Role::ServiceCard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Card => "card",
            Role::OpenControl => "open-control",
            Role::Dismiss => "dismiss",
            Role::Backdrop => "backdrop",
            Role::Content => "content",
            Role::GalleryItem => "gallery-item",
            Role::ServiceCard => "service-card",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub role: Role,
    pub key: Option<String>,
}

impl Hit {
    pub fn new(role: Role, key: Option<&str>) -> Self {
        Self { role, key: key.map(str::to_string) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    OpenOverlay(String),
    OpenProject(String),
    OpenService(String),
    CloseAll,
}

impl Intent {
    /// Looks catalog keys up in the site content; unknown keys are dropped.
    pub fn into_action(self, content: &SiteContent) -> Option<ModalAction> {
        match self {
            Intent::OpenOverlay(id) => Some(ModalAction::Open(id)),
            Intent::OpenProject(key) => match content.project(&key) {
                Some(project) => Some(ModalAction::OpenContent(OverlayContent::project(project))),
                None => {
                    warn!("Unknown gallery project: {}", key);
                    None
                }
            },
            Intent::OpenService(key) => match content.service(&key) {
                Some(service) => Some(ModalAction::OpenContent(OverlayContent::service(service))),
                None => {
                    warn!("Unknown service: {}", key);
                    None
                }
            },
            Intent::CloseAll => Some(ModalAction::CloseAll),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub intent: Intent,
    pub stop_propagation: bool,
}

type Handler = fn(hits: &[Hit], index: usize) -> Option<Intent>;

/// Checked top to bottom; the first role present in the hit list wins.
const TABLE: [(Role, Handler); 6] = [
    (Role::OpenControl, open_control),
    (Role::Dismiss, dismiss),
    (Role::Card, card),
    (Role::GalleryItem, gallery_item),
    (Role::ServiceCard, service_card),
    (Role::Backdrop, backdrop),
];

/// `hits` is ordered innermost first, starting at the click target.
pub fn resolve(hits: &[Hit]) -> Option<Dispatch> {
    for (role, handler) in TABLE {
        let Some(index) = hits.iter().position(|hit| hit.role == role) else {
            continue;
        };
        return handler(hits, index).map(|intent| Dispatch {
            intent,
            stop_propagation: role == Role::OpenControl,
        });
    }
    None
}

fn dismiss(_: &[Hit], _: usize) -> Option<Intent> {
    Some(Intent::CloseAll)
}

fn card(hits: &[Hit], index: usize) -> Option<Intent> {
    keyed(&hits[index]).map(Intent::OpenOverlay)
}

fn gallery_item(hits: &[Hit], index: usize) -> Option<Intent> {
    keyed(&hits[index]).map(Intent::OpenProject)
}

fn service_card(hits: &[Hit], index: usize) -> Option<Intent> {
    keyed(&hits[index]).map(Intent::OpenService)
}

/// Only a click landing on the backdrop itself; anything inside the content box
/// resolves to `Role::Content` first.
fn backdrop(_: &[Hit], index: usize) -> Option<Intent> {
    (index == 0).then_some(Intent::CloseAll)
}

fn keyed(hit: &Hit) -> Option<String> {
    if hit.key.is_none() {
        warn!("{} element has no data-key", hit.role.as_str());
    }
    hit.key.clone()
}

/// Buttons inside a card may name the overlay themselves or inherit the card's.
fn open_control(hits: &[Hit], index: usize) -> Option<Intent> {
    let own = hits[index].key.clone();
    let inherited = || {
        hits[index + 1..]
            .iter()
            .find(|hit| hit.role == Role::Card)
            .and_then(|card| card.key.clone())
    };
    match own.or_else(inherited) {
        Some(id) => Some(Intent::OpenOverlay(id)),
        None => {
            warn!("open control is not inside a keyed card");
            None
        }
    }
}

/// Walks from the event target up to (not including) `root`, collecting every
/// element that carries a known `data-role`.
pub fn collect_hits(target: Option<EventTarget>, root: &Element) -> Vec<Hit> {
    let root_node: &Node = root;
    let mut hits = Vec::new();
    let mut current = target.and_then(|t| t.dyn_into::<Element>().ok());

    while let Some(element) = current {
        if element.is_same_node(Some(root_node)) {
            break;
        }
        let Ok(Some(found)) = element.closest("[data-role]") else {
            break;
        };
        let found_node: &Node = &found;
        if found.is_same_node(Some(root_node)) || !root.contains(Some(found_node)) {
            break;
        }
        if let Some(role) = found.get_attribute("data-role").as_deref().and_then(Role::parse) {
            hits.push(Hit::new(role, found.get_attribute("data-key").as_deref()));
        }
        current = found.parent_element();
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(id: &str) -> Option<Dispatch> {
        Some(Dispatch { intent: Intent::OpenOverlay(id.into()), stop_propagation: false })
    }

    #[test]
    fn card_click_opens_its_overlay() {
        let hits = [Hit::new(Role::Card, Some("ana"))];
        assert_eq!(resolve(&hits), open("ana"));
    }

    #[test]
    fn open_control_wins_over_card_and_stops_propagation() {
        let hits = [Hit::new(Role::OpenControl, None), Hit::new(Role::Card, Some("clara"))];
        assert_eq!(
            resolve(&hits),
            Some(Dispatch { intent: Intent::OpenOverlay("clara".into()), stop_propagation: true })
        );
    }

    #[test]
    fn open_control_prefers_its_own_key() {
        let hits = [Hit::new(Role::OpenControl, Some("ana")), Hit::new(Role::Card, Some("clara"))];
        assert_eq!(resolve(&hits).map(|d| d.intent), Some(Intent::OpenOverlay("ana".into())));
    }

    #[test]
    fn orphan_open_control_does_nothing() {
        assert_eq!(resolve(&[Hit::new(Role::OpenControl, None)]), None);
    }

    #[test]
    fn dismiss_inside_overlay_closes() {
        let hits = [Hit::new(Role::Dismiss, None), Hit::new(Role::Backdrop, Some("ana"))];
        assert_eq!(resolve(&hits).map(|d| d.intent), Some(Intent::CloseAll));
    }

    #[test]
    fn backdrop_closes_only_when_clicked_directly() {
        assert_eq!(
            resolve(&[Hit::new(Role::Backdrop, None)]).map(|d| d.intent),
            Some(Intent::CloseAll)
        );
        let inner = [Hit::new(Role::Content, None), Hit::new(Role::Backdrop, None)];
        assert_eq!(resolve(&inner), None);
    }

    #[test]
    fn gallery_and_service_cards_carry_their_keys() {
        assert_eq!(
            resolve(&[Hit::new(Role::GalleryItem, Some("conferencia-anual"))]).map(|d| d.intent),
            Some(Intent::OpenProject("conferencia-anual".into()))
        );
        assert_eq!(
            resolve(&[Hit::new(Role::ServiceCard, Some("eventos"))]).map(|d| d.intent),
            Some(Intent::OpenService("eventos".into()))
        );
    }

    #[test]
    fn catalog_intents_become_content_actions() {
        let content = SiteContent::load().unwrap();
        match Intent::OpenService("consultoria".into()).into_action(&content) {
            Some(ModalAction::OpenContent(payload)) => {
                assert_eq!(payload.title, "Consultoria Gastronômica");
                assert_eq!(payload.icon.as_deref(), Some("fas fa-concierge-bell service-icon"));
            }
            other => panic!("unexpected action {:?}", other),
        }
        match Intent::OpenProject("casamento-quinta".into()).into_action(&content) {
            Some(ModalAction::OpenContent(payload)) => {
                assert_eq!(payload.image.as_deref(), Some("/assets/gallery/casamento.jpg"));
                assert!(payload.details.is_some());
            }
            other => panic!("unexpected action {:?}", other),
        }
        assert_eq!(Intent::OpenService("buffet".into()).into_action(&content), None);
        assert_eq!(
            Intent::OpenOverlay("ana".into()).into_action(&content),
            Some(ModalAction::Open("ana".into()))
        );
    }

    #[test]
    fn no_roles_means_no_dispatch() {
        assert_eq!(resolve(&[]), None);
    }

    #[test]
    fn role_names_round_trip() {
        for role in TABLE.map(|(role, _)| role) {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("content"), Some(Role::Content));
        assert_eq!(Role::parse("tooltip"), None);
    }
}
