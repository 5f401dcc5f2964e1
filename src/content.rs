//! Project content loading.
//!
//! A collection is a flat directory of front matter files, one per project:
//!
//! ```text
//! content/projects/
//! ├── example.mdx          # Template for contributors; hidden from listing
//! ├── skyblock-tools.mdx   # → slug "skyblock-tools"
//! └── vanilla-plus.mdx     # → slug "vanilla-plus"
//! ```
//!
//! Three read paths sit on top of a [`ContentStore`]:
//!
//! | Operation | Used by | On failure |
//! |-----------|---------|------------|
//! | [`list_entries`] | gallery page | directory problem → empty list; bad file → skipped |
//! | [`load_entry`] / [`get_entry`] | detail page | typed error / `None` |
//! | [`static_params`] | route precomputation | same as listing; never fails |
//!
//! Listing never fails because the gallery page must render even if content
//! is broken. Every degraded case is logged with `tracing::warn!`.
//!
//! ## Ordering and duplicates
//!
//! File names are sorted before processing, so output order does not depend
//! on the store. If two names produce the same slug, the first in sorted
//! order wins and the rest are skipped with a warning.
//!
//! ## Field defaults
//!
//! Front matter is parsed into [`ProjectFrontmatter`] where every field is
//! optional, then normalized once:
//! - `title` → slug when absent or blank; otherwise kept verbatim
//! - `description` → `""` when absent
//! - blank image or link values are treated as absent

use crate::config::ProjectsConfig;
use crate::frontmatter::{self, FrontmatterError};
use crate::naming;
use crate::storage::ContentStore;
use crate::types::{AuthorProfile, LinkKind, Project, ProjectSummary, RouteParams, SocialLink};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid front matter in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

/// Where a collection lives and which files belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub dir: PathBuf,
    /// Content extension without the dot, e.g. `mdx`.
    pub extension: String,
    /// Slugs hidden from listing and route enumeration.
    pub exclude: Vec<String>,
}

impl Collection {
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.to_string(),
            exclude: Vec::new(),
        }
    }

    pub fn excluding(mut self, slug: &str) -> Self {
        self.exclude.push(slug.to_string());
        self
    }

    /// The project collection under a content root, as configured.
    pub fn from_config(content_root: &Path, config: &ProjectsConfig) -> Self {
        Self {
            dir: content_root.join(&config.dir),
            extension: config.extension.clone(),
            exclude: config.exclude.clone(),
        }
    }

    fn is_excluded(&self, slug: &str) -> bool {
        self.exclude.iter().any(|s| s == slug)
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

/// Project front matter as authored. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectFrontmatter {
    #[serde(deserialize_with = "scalar_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub banner: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub logo: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub discord: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub github: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub website: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub twitter: Option<String>,
    pub author: Option<AuthorFrontmatter>,
}

/// The optional `author:` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorFrontmatter {
    #[serde(deserialize_with = "scalar_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub avatar: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub bio: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub github: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "scalar_string")]
    pub website: Option<String>,
}

/// Accept any YAML scalar as text; `title: 2024` is the string `"2024"`.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;
    use serde_yaml::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a text value, found {}",
            describe(&other)
        ))),
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Sequence(_) => "a list",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
        _ => "a scalar",
    }
}

/// The value as written, or `None` when it is empty or only whitespace.
fn present(value: Option<&str>) -> Option<String> {
    value
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

/// Keep only links that are set, preserving the given order.
fn present_links(candidates: &[(LinkKind, Option<&str>)]) -> Vec<SocialLink> {
    candidates
        .iter()
        .filter_map(|(kind, url)| present(*url).map(|url| SocialLink::new(*kind, url)))
        .collect()
}

impl ProjectFrontmatter {
    fn summary(&self, slug: &str) -> ProjectSummary {
        ProjectSummary {
            slug: slug.to_string(),
            title: present(self.title.as_deref()).unwrap_or_else(|| slug.to_string()),
            description: self.description.clone().unwrap_or_default(),
            banner: present(self.banner.as_deref()),
            logo: present(self.logo.as_deref()),
        }
    }

    fn into_project(self, slug: &str, body: String) -> Project {
        let summary = self.summary(slug);
        let social_links = present_links(&[
            (LinkKind::Discord, self.discord.as_deref()),
            (LinkKind::Github, self.github.as_deref()),
            (LinkKind::Website, self.website.as_deref()),
            (LinkKind::Twitter, self.twitter.as_deref()),
        ]);
        Project {
            has_banner: summary.banner.is_some(),
            has_logo: summary.logo.is_some(),
            slug: summary.slug,
            title: summary.title,
            description: summary.description,
            banner: summary.banner,
            logo: summary.logo,
            social_links,
            author: self.author.map(AuthorFrontmatter::into_profile),
            body,
        }
    }
}

impl AuthorFrontmatter {
    fn into_profile(self) -> AuthorProfile {
        let name = present(self.name.as_deref()).unwrap_or_default();
        let initial: Option<String> = name
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect());
        AuthorProfile {
            links: present_links(&[
                (LinkKind::Github, self.github.as_deref()),
                (LinkKind::Twitter, self.twitter.as_deref()),
                (LinkKind::Website, self.website.as_deref()),
            ]),
            avatar: present(self.avatar.as_deref()),
            bio: present(self.bio.as_deref()),
            initial,
            name,
        }
    }
}

/// Sorted, de-duplicated `(slug, filename)` pairs of non-excluded content files.
fn content_files<S: ContentStore>(
    store: &S,
    collection: &Collection,
) -> io::Result<Vec<(String, String)>> {
    let mut names = store.list(&collection.dir)?;
    names.sort();

    let mut seen = BTreeSet::new();
    let mut files = Vec::new();
    for name in names {
        let Some(slug) = naming::slug_from_filename(&name, &collection.extension) else {
            continue;
        };
        if collection.is_excluded(&slug) {
            debug!(slug = %slug, "skipping excluded entry");
            continue;
        }
        if !seen.insert(slug.clone()) {
            warn!(slug = %slug, file = %name, "duplicate slug, keeping the first file");
            continue;
        }
        files.push((slug, name));
    }
    Ok(files)
}

fn read_and_parse<S: ContentStore>(
    store: &S,
    collection: &Collection,
    filename: &str,
) -> Result<(ProjectFrontmatter, String), ContentError> {
    let path = collection.path_of(filename);
    let source = store
        .read(&collection.dir, filename)
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound(filename.to_string()),
            _ => ContentError::Unreadable {
                path: path.clone(),
                source,
            },
        })?;
    frontmatter::parse(&source).map_err(|source| ContentError::Parse { path, source })
}

/// Gallery listing: one summary per content file, bodies discarded.
///
/// Never fails. A missing or unreadable directory yields an empty list; an
/// individual file that cannot be read or parsed is left out.
pub fn list_entries<S: ContentStore>(store: &S, collection: &Collection) -> Vec<ProjectSummary> {
    let files = match content_files(store, collection) {
        Ok(files) => files,
        Err(e) => {
            warn!(
                dir = %collection.dir.display(),
                error = %e,
                "cannot list content directory, showing no entries"
            );
            return Vec::new();
        }
    };

    files
        .par_iter()
        .filter_map(|(slug, filename)| match read_and_parse(store, collection, filename) {
            Ok((frontmatter, _body)) => {
                debug!(slug = %slug, "loaded project summary");
                Some(frontmatter.summary(slug))
            }
            Err(e) => {
                warn!(slug = %slug, error = %e, "skipping project");
                None
            }
        })
        .collect()
}

/// Load one project with its body, reporting why it could not be loaded.
pub fn load_entry<S: ContentStore>(
    store: &S,
    collection: &Collection,
    slug: &str,
) -> Result<Project, ContentError> {
    if !naming::is_valid_slug(slug) {
        return Err(ContentError::NotFound(slug.to_string()));
    }
    let filename = naming::filename_for_slug(slug, &collection.extension);
    let (frontmatter, body) = read_and_parse(store, collection, &filename).map_err(|e| match e {
        ContentError::NotFound(_) => ContentError::NotFound(slug.to_string()),
        other => other,
    })?;
    Ok(frontmatter.into_project(slug, body))
}

/// Load one project for its detail page.
///
/// Every failure is the same outcome for the caller: the page does not exist.
/// The underlying cause is logged.
pub fn get_entry<S: ContentStore>(store: &S, collection: &Collection, slug: &str) -> Option<Project> {
    match load_entry(store, collection, slug) {
        Ok(project) => Some(project),
        Err(ContentError::NotFound(_)) => {
            debug!(slug, "project not found");
            None
        }
        Err(e) => {
            warn!(slug, error = %e, "project could not be loaded");
            None
        }
    }
}

/// Strictly load every non-excluded entry, bodies included.
///
/// Unlike [`list_entries`] nothing is skipped: each file is reported with its
/// load result, and an unlistable directory is an error.
pub fn check_entries<S: ContentStore>(
    store: &S,
    collection: &Collection,
) -> io::Result<Vec<(String, Result<Project, ContentError>)>> {
    let files = content_files(store, collection)?;
    Ok(files
        .into_par_iter()
        .map(|(slug, _)| {
            let result = load_entry(store, collection, &slug);
            (slug, result)
        })
        .collect())
}

/// Every `(locale, slug)` detail page address, locales outermost.
///
/// Slugs come from [`list_entries`], so excluded and broken entries are not
/// enumerated. Never fails; no entries or no locales yield an empty list.
pub fn static_params<S: ContentStore>(
    store: &S,
    collection: &Collection,
    locales: &[String],
) -> Vec<RouteParams> {
    let slugs: Vec<String> = list_entries(store, collection)
        .into_iter()
        .map(|summary| summary.slug)
        .collect();

    locales
        .iter()
        .flat_map(|lang| slugs.iter().map(move |slug| RouteParams::new(lang.clone(), slug.clone())))
        .collect()
}
