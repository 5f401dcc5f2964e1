//! Shared test utilities.
//!
//! Provides fixture setup and lookup helpers that work with the loaded
//! project types (`ProjectSummary`, `Project`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let collection = fixture_collection(tmp.path());
//! let list = list_entries(&FsStore, &collection);
//!
//! let summary = find_summary(&list, "skyblock-tools");
//! assert_eq!(summary.title, "Skyblock Tools");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config;
use crate::content::Collection;
use crate::types::{ProjectSummary, SocialLink};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The project collection of a fixture copy, using its `config.toml`.
pub fn fixture_collection(root: &Path) -> Collection {
    let site_config = config::load_config(root).unwrap();
    Collection::from_config(root, &site_config.projects)
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a summary by slug. Panics if not found.
pub fn find_summary<'a>(list: &'a [ProjectSummary], slug: &str) -> &'a ProjectSummary {
    list.iter().find(|p| p.slug == slug).unwrap_or_else(|| {
        let slugs = summary_slugs(list);
        panic!("project '{slug}' not found. Available: {slugs:?}")
    })
}

/// All slugs in listing order.
pub fn summary_slugs(list: &[ProjectSummary]) -> Vec<&str> {
    list.iter().map(|p| p.slug.as_str()).collect()
}

/// `(label, url)` pairs, for compact link assertions.
pub fn link_pairs(links: &[SocialLink]) -> Vec<(&str, &str)> {
    links
        .iter()
        .map(|l| (l.label.as_str(), l.url.as_str()))
        .collect()
}
