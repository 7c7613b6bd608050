//! Overlay visibility for the whole page.
//!
//! At most one overlay is visible at a time. Profile overlays are declared up
//! front and opened by id; the two content overlays (`project`, `service`) get
//! their body from a payload supplied when they open.

use std::collections::BTreeSet;
use std::rc::Rc;

use log::error;
use yew::prelude::*;

use crate::config::{Project, Service};

pub const PROJECT_OVERLAY: &str = "project";
pub const SERVICE_OVERLAY: &str = "service";

/// Element id of an overlay, `{id}-modal`.
pub fn overlay_dom_id(id: &str) -> String {
    format!("{}-modal", id)
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContent {
    pub overlay: &'static str,
    pub title: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub description: String,
    pub details: Option<String>,
}

impl OverlayContent {
    pub fn project(project: &Project) -> Self {
        Self {
            overlay: PROJECT_OVERLAY,
            title: project.title.clone(),
            image: Some(project.image.clone()),
            icon: None,
            description: project.description.clone(),
            details: project.details.clone(),
        }
    }

    pub fn service(service: &Service) -> Self {
        Self {
            overlay: SERVICE_OVERLAY,
            title: service.title.clone(),
            image: None,
            icon: Some(format!("{} service-icon", service.icon)),
            description: service.text.clone(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Visible {
    Profile(String),
    Content(OverlayContent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    Open(String),
    OpenContent(OverlayContent),
    CloseAll,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalState {
    known: BTreeSet<String>,
    controlled: BTreeSet<String>,
    visible: Option<Visible>,
    expanded: Option<String>,
    scroll_locked: bool,
}

impl ModalState {
    /// `controlled` lists the overlays that have a trigger control pointing at them
    /// through `aria-controls`.
    pub fn new<I, C>(known: I, controlled: C) -> Self
    where
        I: IntoIterator<Item = String>,
        C: IntoIterator<Item = String>,
    {
        Self {
            known: known.into_iter().collect(),
            controlled: controlled.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Returns the next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: ModalAction) -> Option<Self> {
        let next = match action {
            ModalAction::Open(id) => {
                if !self.known.contains(&id) {
                    error!("Overlay not found: {}", id);
                    return None;
                }
                let expanded = self.controlled.contains(&id).then(|| id.clone());
                Self {
                    visible: Some(Visible::Profile(id)),
                    expanded,
                    scroll_locked: true,
                    ..self.closed()
                }
            }
            ModalAction::OpenContent(content) => Self {
                visible: Some(Visible::Content(content)),
                scroll_locked: true,
                ..self.closed()
            },
            ModalAction::CloseAll => self.closed(),
        };

        if next == *self {
            None
        } else {
            Some(next)
        }
    }

    fn closed(&self) -> Self {
        Self {
            known: self.known.clone(),
            controlled: self.controlled.clone(),
            visible: None,
            expanded: None,
            scroll_locked: false,
        }
    }

    /// Works for profile ids as well as the content overlay keys.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible_id() == Some(id)
    }

    /// Value of the overlay element's `aria-hidden` attribute.
    pub fn aria_hidden(&self, id: &str) -> &'static str {
        if self.is_visible(id) {
            "false"
        } else {
            "true"
        }
    }

    pub fn visible_id(&self) -> Option<&str> {
        match &self.visible {
            Some(Visible::Profile(id)) => Some(id.as_str()),
            Some(Visible::Content(content)) => Some(content.overlay),
            None => None,
        }
    }

    pub fn content(&self) -> Option<&OverlayContent> {
        match &self.visible {
            Some(Visible::Content(content)) => Some(content),
            _ => None,
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Profile overlay whose close button should receive focus.
    pub fn focus_target(&self) -> Option<String> {
        match &self.visible {
            Some(Visible::Profile(id)) => Some(id.clone()),
            _ => None,
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}
