use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

use crate::modal::{PROJECT_OVERLAY, SERVICE_OVERLAY};

const EMAILJS_API: &str = "https://api.emailjs.com/api/v1.0";

#[cfg(debug_assertions)]
pub fn get_emailjs_api() -> &'static str {
    option_env!("EMAILJS_API").unwrap_or(EMAILJS_API)  // Local builds can point at a mock server
}

#[cfg(not(debug_assertions))]
pub fn get_emailjs_api() -> &'static str {
    EMAILJS_API
}

pub const EMAILJS_PUBLIC_KEY: &str = "9gcyy6iP8sB6lYb2f";
pub const EMAILJS_SERVICE_ID: &str = "service_yyh7pwq";
pub const EMAILJS_TEMPLATE_ID: &str = "template_UNICO";

/// Delay before focus moves to an overlay's close button, lets the browser paint first.
pub const FOCUS_DELAY_MS: u32 = 100;
pub const STATUS_CLEAR_MS: u32 = 6_000;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 5_000;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{kind} entry has an empty {field}")]
    Empty { kind: &'static str, field: &'static str },
    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: &'static str, id: String },
    #[error("founder id '{0}' is reserved for a content overlay")]
    Reserved(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Founder {
    pub id: String,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub bio: Vec<String>,
}

/// A gallery entry; `details` is trusted markup authored alongside the site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub key: String,
    pub image: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub key: String,
    pub title: String,
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub founders: Vec<Founder>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for founder in &self.founders {
            non_empty("founder", "id", &founder.id)?;
            non_empty("founder", "name", &founder.name)?;
            if founder.id == PROJECT_OVERLAY || founder.id == SERVICE_OVERLAY {
                return Err(ConfigError::Reserved(founder.id.clone()));
            }
            if !seen.insert(founder.id.as_str()) {
                return Err(ConfigError::Duplicate { kind: "founder", id: founder.id.clone() });
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            non_empty("project", "key", &project.key)?;
            non_empty("project", "title", &project.title)?;
            if !seen.insert(project.key.as_str()) {
                return Err(ConfigError::Duplicate { kind: "project", id: project.key.clone() });
            }
        }

        let mut seen = HashSet::new();
        for service in &self.services {
            non_empty("service", "key", &service.key)?;
            non_empty("service", "title", &service.title)?;
            if !seen.insert(service.key.as_str()) {
                return Err(ConfigError::Duplicate { kind: "service", id: service.key.clone() });
            }
        }
        Ok(())
    }

    pub fn founder_ids(&self) -> Vec<String> {
        self.founders.iter().map(|f| f.id.clone()).collect()
    }

    pub fn project(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.key == key)
    }

    pub fn service(&self, key: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.key == key)
    }
}

fn non_empty(kind: &'static str, field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { kind, field })
    } else {
        Ok(())
    }
}
