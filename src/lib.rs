//! # Showcase
//!
//! The content core of a game-modding community site. It loads the project
//! showcase from front matter files and merges layered configuration. Pages,
//! routing, images and translations live in the site itself; they call into
//! this crate and receive plain, already-normalized data.
//!
//! # Read Paths
//!
//! ```text
//! content/projects/*.mdx ──► list_entries   ──► Vec<ProjectSummary>   (gallery)
//!                        ──► get_entry      ──► Option<Project>        (detail page)
//!                        ──► static_params  ──► Vec<RouteParams>       (prebuilt routes)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Listing, detail and route enumeration over a project collection |
//! | [`frontmatter`] | Splits `---` fenced YAML headers from bodies |
//! | [`storage`] | The `ContentStore` seam: filesystem and in-memory stores |
//! | [`naming`] | Filename ↔ slug rules |
//! | [`types`] | Normalized display types handed to the site |
//! | [`merge`] | Structural merge of TOML/JSON trees |
//! | [`config`] | `config.toml` loading on top of stock defaults |
//! | [`i18n`] | Supported locales and the project locale subset |
//! | [`output`] | CLI text formatting |
//!
//! # Design Decisions
//!
//! ## The Gallery Never Fails
//!
//! A broken content file must not take the gallery down. Listing degrades: an
//! unreadable directory gives an empty list and a bad file is left out, with
//! a `tracing` warning either way. The detail page is different: a project
//! that cannot be loaded does not exist as far as the caller is concerned.
//! [`content::load_entry`] keeps the typed reason for tools like `check`.
//!
//! ## Normalize Once
//!
//! Front matter is loosely written by contributors. It is parsed into a
//! struct of optional fields and normalized immediately: titles fall back to
//! the slug, descriptions to `""`, and empty links disappear. Nothing
//! downstream checks for presence again.
//!
//! ## Arrays Replace, Tables Merge
//!
//! Config layers merge tables key by key, but an array in a later layer
//! replaces the earlier array outright. Merging twice gives the same result
//! as merging once.

pub mod config;
pub mod content;
pub mod frontmatter;
pub mod i18n;
pub mod merge;
pub mod naming;
pub mod output;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
