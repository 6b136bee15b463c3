//! Portfolio model for the generated professional sites.
//!
//! # Responsibility
//! - Define the stored `Portfolio` record and its nested sections.
//! - Unpack `CreatePortfolioRequest` into a validated `NewPortfolio`.
//!
//! # Invariants
//! - List sections (`skills`, `services`, `portfolio`, `testimonials`) are
//!   always serialized, even when empty.
//! - A blog section with neither title nor summary is stored as absent.
//! - A missing or empty `templateId` falls back to `DEFAULT_TEMPLATE_ID`.

use super::template::DEFAULT_TEMPLATE_ID;
use super::validation::{PresenceCheck, ValidationError};
use super::{new_record_id, now, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const REQUIRED_FIELDS: &[&str] = &["name", "title", "email"];

/// Social profile links keyed by platform name (`linkedin`, `github`, ...).
///
/// Any platform key is kept as sent; an explicit `null` link stays `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Socials(BTreeMap<String, Option<String>>);

impl Socials {
    /// Link for `platform`, if one is set.
    pub fn link(&self, platform: &str) -> Option<&str> {
        self.0.get(platform).and_then(|url| url.as_deref())
    }

    pub fn platforms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Socials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(platform, url)| (platform.into(), Some(url.into())))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub quote: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

impl Blog {
    fn is_blank(&self) -> bool {
        self.title.is_empty() && self.summary.is_empty()
    }
}

/// Stored portfolio record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: RecordId,
    /// Rendering template selector, e.g. `template-1`.
    pub template_id: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Socials,
    pub skills: Vec<String>,
    pub services: Vec<Service>,
    /// Serialized as `portfolio` to match the external schema.
    #[serde(rename = "portfolio")]
    pub portfolio_items: Vec<PortfolioItem>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<Blog>,
    pub contact_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// Builds a stored record from validated input, stamping a fresh id and
    /// the current time.
    pub fn create(input: NewPortfolio) -> Self {
        Self::with_id(new_record_id(), now(), input)
    }

    /// Builds a record with a caller-provided id and timestamp.
    pub fn with_id(id: impl Into<RecordId>, at: DateTime<Utc>, input: NewPortfolio) -> Self {
        Self {
            id: id.into(),
            template_id: input.template_id,
            name: input.name,
            title: input.title,
            tagline: input.tagline,
            profile_image: input.profile_image,
            bio: input.bio,
            email: input.email,
            phone: input.phone,
            location: input.location,
            socials: input.socials,
            skills: input.skills,
            services: input.services,
            portfolio_items: input.portfolio_items,
            testimonials: input.testimonials,
            blog: input.blog,
            contact_message: input.contact_message,
            created_at: at,
            updated_at: at,
        }
    }
}

impl Record for Portfolio {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Validated portfolio fields, ready to be stamped into a `Portfolio`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPortfolio {
    pub template_id: String,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Socials,
    pub skills: Vec<String>,
    pub services: Vec<Service>,
    pub portfolio_items: Vec<PortfolioItem>,
    pub testimonials: Vec<Testimonial>,
    pub blog: Option<Blog>,
    pub contact_message: String,
}

/// `POST /api/portfolios` body.
///
/// Only `name`, `title` and `email` are checked; every other field falls back
/// to its empty value when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePortfolioRequest {
    pub template_id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub socials: Option<Socials>,
    pub skills: Option<Vec<String>>,
    pub services: Option<Vec<Service>>,
    #[serde(rename = "portfolio")]
    pub portfolio_items: Option<Vec<PortfolioItem>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub blog: Option<Blog>,
    pub contact_message: Option<String>,
}

impl CreatePortfolioRequest {
    /// Checks `name`, `title` and `email` for presence.
    ///
    /// # Errors
    /// - `ValidationError::MissingFields` when any of them is absent or empty.
    pub fn validate(self) -> Result<NewPortfolio, ValidationError> {
        let mut check = PresenceCheck::new(REQUIRED_FIELDS);
        let name = check.text("name", self.name);
        let title = check.text("title", self.title);
        let email = check.text("email", self.email);
        check.finish()?;

        Ok(NewPortfolio {
            template_id: self
                .template_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string()),
            name,
            title,
            tagline: self.tagline.unwrap_or_default(),
            profile_image: self.profile_image.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            email,
            phone: self.phone.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            socials: self.socials.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            services: self.services.unwrap_or_default(),
            portfolio_items: self.portfolio_items.unwrap_or_default(),
            testimonials: self.testimonials.unwrap_or_default(),
            blog: self.blog.filter(|blog| !blog.is_blank()),
            contact_message: self.contact_message.unwrap_or_default(),
        })
    }
}

/// Response body for `GET /api/portfolios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioListResponse {
    pub portfolios: Vec<Portfolio>,
}

/// Response body for `POST /api/portfolios`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePortfolioResponse {
    pub portfolio: Portfolio,
    pub message: String,
}
