//! Shared types handed to the presentation layer.
//!
//! Everything here is already normalized: titles are resolved, absent links
//! are gone, and optional images are `None` rather than empty strings. The
//! presentation side never re-checks presence. All types serialize to JSON
//! for `--json` output and for any external renderer.

use serde::{Deserialize, Serialize};

/// One entry in the gallery listing. No body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    /// Front matter `title`, or the slug when absent.
    pub title: String,
    /// Front matter `description`, or `""` when absent.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A fully loaded project for its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Banner image present; otherwise the page shows a gradient.
    pub has_banner: bool,
    pub has_logo: bool,
    /// Only links that are set, in display order.
    pub social_links: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorProfile>,
    /// Raw rich-text body, rendered downstream.
    pub body: String,
}

impl Project {
    /// The listing form of this project.
    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            banner: self.banner.clone(),
            logo: self.logo.clone(),
        }
    }
}

/// About-the-author block on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Upper-cased first letter of the name, shown when there is no avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<String>,
    pub links: Vec<SocialLink>,
}

/// The link targets a project or author can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Discord,
    Github,
    Website,
    Twitter,
}

impl LinkKind {
    /// Human-facing label, also used as the accessible name of the icon link.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Discord => "Discord",
            LinkKind::Github => "GitHub",
            LinkKind::Website => "Website",
            LinkKind::Twitter => "Twitter",
        }
    }
}

/// A present external link: what it is and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(kind: LinkKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            url: url.into(),
        }
    }
}

/// One pre-computable detail page address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteParams {
    pub lang: String,
    pub slug: String,
}

impl RouteParams {
    pub fn new(lang: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            slug: slug.into(),
        }
    }

    /// Site path of the project detail page.
    pub fn path(&self) -> String {
        format!("/{}/projects/{}", self.lang, self.slug)
    }
}
