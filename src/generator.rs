//! Business context generation from a company website
//!
//! Generation is simulated: the website is normalized to a bare domain and
//! matched against a fixed table of company profiles. Unknown domains get
//! a generic profile derived from the domain itself.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::session::{Context, ContextSource};

/// Base URL of the logo service
pub const LOGO_SERVICE_URL: &str = "https://logo.clearbit.com";

/// A known company and the context generated for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyProfile {
    pub domain: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const COMPANY_PROFILES: &[CompanyProfile] = &[
    CompanyProfile {
        domain: "grubhub.com",
        name: "Grubhub",
        description: "Online and mobile food ordering and delivery marketplace connecting diners with local restaurants, offering convenient meal delivery and pickup services.",
    },
    CompanyProfile {
        domain: "uber.com",
        name: "Uber",
        description: "Global technology platform providing ride-hailing, food delivery (Uber Eats), package delivery, freight transportation, and other mobility services.",
    },
    CompanyProfile {
        domain: "netflix.com",
        name: "Netflix",
        description: "Global streaming entertainment service offering TV shows, movies, documentaries, and original content across multiple devices and platforms.",
    },
    CompanyProfile {
        domain: "tesla.com",
        name: "Tesla",
        description: "Electric vehicle and clean energy company designing and manufacturing electric cars, battery energy storage, and solar products.",
    },
    CompanyProfile {
        domain: "draftkings.com",
        name: "DraftKings",
        description: "Digital sports entertainment and gaming company providing daily fantasy sports contests, sports betting, and online casino gaming.",
    },
    CompanyProfile {
        domain: "squarespace.com",
        name: "Squarespace",
        description: "Website building and hosting platform enabling users to create professional websites, online stores, and portfolios with drag-and-drop tools.",
    },
    CompanyProfile {
        domain: "etsy.com",
        name: "Etsy",
        description: "Global marketplace for unique and creative goods, connecting independent sellers with buyers seeking handmade, vintage, and craft items.",
    },
    CompanyProfile {
        domain: "levi.com",
        name: "Levi's",
        description: "Iconic American clothing company specializing in denim jeans and casual wear, known for quality craftsmanship and classic style since 1853.",
    },
];

/// Reduce free-text website input to a bare domain.
///
/// Lower-cases, strips an `http://`/`https://` scheme and a leading `www.`,
/// and drops everything from the first `/`.
pub fn normalize_domain(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let without_scheme = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
        .unwrap_or(&lowered);
    let without_www = without_scheme
        .strip_prefix("www.")
        .unwrap_or(without_scheme);
    without_www
        .split('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

pub fn lookup_company(domain: &str) -> Option<&'static CompanyProfile> {
    COMPANY_PROFILES.iter().find(|p| p.domain == domain)
}

/// Display name for a domain with no known profile: first character
/// upper-cased, final extension removed (`example.io` -> `Example`).
pub fn generic_name(domain: &str) -> String {
    let mut chars = domain.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let stem = match rest.rfind('.') {
        Some(dot) if dot + 1 < rest.len() => &rest[..dot],
        _ => rest,
    };
    first.to_uppercase().chain(stem.chars()).collect()
}

pub fn generic_description(domain: &str) -> String {
    format!("Business context generated from {domain}")
}

/// Logo image URL for a website, keyed by its normalized domain
pub fn logo_url(website: &str) -> String {
    format!("{LOGO_SERVICE_URL}/{}", normalize_domain(website))
}

/// Name and description generated for a normalized domain
pub fn describe_domain(domain: &str) -> (String, String) {
    match lookup_company(domain) {
        Some(profile) => (profile.name.to_string(), profile.description.to_string()),
        None => (generic_name(domain), generic_description(domain)),
    }
}

/// Builds business contexts from websites after a simulated delay
#[derive(Debug, Clone)]
pub struct ContextGenerator {
    delay: Duration,
}

impl ContextGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Build the context for `website` immediately.
    ///
    /// The id is the creation time in milliseconds, bumped until it does not
    /// collide with any id in `existing`.
    pub fn build_context(
        &self,
        website: &str,
        existing: &[Context],
        now: DateTime<Utc>,
    ) -> Context {
        let domain = normalize_domain(website);
        let (name, description) = describe_domain(&domain);

        let mut stamp = now.timestamp_millis();
        while existing.iter().any(|c| c.id == stamp.to_string()) {
            stamp += 1;
        }

        debug!(%domain, %name, known = lookup_company(&domain).is_some(), "context built");
        Context {
            id: stamp.to_string(),
            name,
            source: ContextSource::Website,
            website: Some(website.to_string()),
            description: Some(description),
            created_at: now,
        }
    }

    /// Wait out the simulated delay, then build the context. Returns `None`
    /// if `cancel` fires first.
    pub async fn generate(
        &self,
        website: &str,
        existing: &[Context],
        cancel: &CancellationToken,
    ) -> Option<Context> {
        info!(website, delay_ms = self.delay.as_millis() as u64, "generating context");
        tokio::select! {
            () = cancel.cancelled() => {
                debug!(website, "context generation cancelled");
                None
            }
            () = tokio::time::sleep(self.delay) => {
                Some(self.build_context(website, existing, Utc::now()))
            }
        }
    }
}
