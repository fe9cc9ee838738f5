//! Wizard session aggregate and the store that owns it

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::generator;

mod step;
mod store;

pub use step::WizardStep;
pub use store::SessionStore;

/// Errors raised by session mutations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no business context with id '{0}'")]
    UnknownContext(String),
}

/// Credentials collected on the authentication step
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub subdomain: String,
    pub email: String,
    #[serde(serialize_with = "redact")]
    pub api_token: String,
}

impl AuthConfig {
    pub fn new(
        subdomain: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            subdomain: subdomain.into(),
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Host name of the connected account
    pub fn host(&self) -> String {
        format!("{}.zendesk.com", self.subdomain)
    }
}

// Keeps the token out of logs and panic messages
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("subdomain", &self.subdomain)
            .field("email", &self.email)
            .field("api_token", &"<redacted>")
            .finish()
    }
}

fn redact<S: Serializer>(token: &str, serializer: S) -> Result<S::Ok, S::Error> {
    if token.is_empty() {
        serializer.serialize_str("")
    } else {
        serializer.serialize_str("<redacted>")
    }
}

/// Where a business context came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextSource {
    /// Derived from a company website
    Website,
    /// Entered by hand
    Manual,
}

/// A named business scenario used to flavor the simulated imports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub id: String,
    pub name: String,
    pub source: ContextSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Context {
    /// Normalized domain of the context's website, if it has one
    pub fn domain(&self) -> Option<String> {
        self.website.as_deref().map(generator::normalize_domain)
    }

    pub fn logo_url(&self) -> Option<String> {
        self.website.as_deref().map(generator::logo_url)
    }

    /// One-line summary shown under the context name
    pub fn summary_line(&self) -> String {
        match (&self.description, &self.website) {
            (Some(description), _) if !description.is_empty() => description.clone(),
            (_, Some(website)) => format!("Website: {website}"),
            _ => String::new(),
        }
    }
}

/// Per-category import progress percentages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportProgress {
    pub macros: u8,
    pub fields: u8,
    pub views: u8,
    pub articles: u8,
}

/// Everything the wizard has collected so far
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_step: WizardStep,
    pub auth_config: Option<AuthConfig>,
    pub ai_contexts: Vec<Context>,
    pub selected_context_id: Option<String>,
    /// Category label -> chosen schedule id
    pub selected_schedules: BTreeMap<String, String>,
    pub cleanup_schedule: Option<String>,
    /// Configuration id -> enabled
    pub random_configs: BTreeMap<String, bool>,
    pub import_progress: ImportProgress,
}

impl Session {
    /// Snapshot every session starts from: two seeded contexts, the first selected
    pub fn initial() -> Self {
        let seeded = [("sample-1", "grubhub.com", 1), ("sample-2", "uber.com", 2)];
        let ai_contexts = seeded
            .iter()
            .filter_map(|(id, domain, day)| {
                generator::lookup_company(domain).map(|company| Context {
                    id: (*id).to_string(),
                    name: company.name.to_string(),
                    source: ContextSource::Website,
                    website: Some((*domain).to_string()),
                    description: Some(company.description.to_string()),
                    created_at: fixture_date(2025, 11, *day),
                })
            })
            .collect();

        Self {
            current_step: WizardStep::Welcome,
            auth_config: None,
            ai_contexts,
            selected_context_id: Some("sample-1".to_string()),
            selected_schedules: BTreeMap::new(),
            cleanup_schedule: None,
            random_configs: BTreeMap::new(),
            import_progress: ImportProgress::default(),
        }
    }

    pub fn context(&self, id: &str) -> Option<&Context> {
        self.ai_contexts.iter().find(|c| c.id == id)
    }

    pub fn selected_context(&self) -> Option<&Context> {
        self.selected_context_id
            .as_deref()
            .and_then(|id| self.context(id))
    }

    /// Number of categories with a chosen schedule
    pub fn active_schedule_count(&self) -> usize {
        self.selected_schedules.len()
    }

    /// Number of random configurations currently switched on
    pub fn enabled_config_count(&self) -> usize {
        self.random_configs.values().filter(|enabled| **enabled).count()
    }

    pub fn is_config_enabled(&self, config_id: &str) -> bool {
        self.random_configs.get(config_id).copied().unwrap_or(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initial()
    }
}

fn fixture_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
