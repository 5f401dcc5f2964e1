//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The stock defaults
//! are serialized to a TOML tree, the user's file is merged on top with
//! [`crate::merge`], and the result is deserialized and validated. A user file
//! only needs the keys it changes.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml          # Optional, overrides stock defaults
//! └── projects/
//!     ├── example.mdx
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [projects]
//! dir = "projects"           # Collection directory, relative to the content root
//! extension = "mdx"          # Content file extension, without the dot
//! exclude = ["example"]      # Slugs hidden from the gallery and route list
//!
//! [i18n]
//! default_language = "en"
//! languages = ["af-ZA", "ar-SA", ...]   # Every locale the site is served in
//! project_languages = ["en"]            # Locales that have project pages
//! og_image_blacklist = ["ar-SA"]        # No Open Graph images for these
//! ```
//!
//! Arrays replace their default entirely. Setting `exclude = []` shows the
//! template entry in the gallery.

use crate::i18n::I18nConfig;
use crate::merge::merge;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Project showcase collection.
    pub projects: ProjectsConfig,
    /// Supported locales.
    pub i18n: I18nConfig,
}

/// Where project files live and which are hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    /// Directory holding one file per project, relative to the content root.
    pub dir: String,
    /// Content file extension without the leading dot.
    pub extension: String,
    /// Slugs left out of the gallery and route enumeration. Still reachable
    /// by direct address.
    pub exclude: Vec<String>,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            dir: "projects".to_string(),
            extension: "mdx".to_string(),
            exclude: vec!["example".to_string()],
        }
    }
}

impl SiteConfig {
    /// Validate that the config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.projects.dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "projects.dir must not be empty".into(),
            ));
        }
        if self.projects.extension.is_empty() {
            return Err(ConfigError::Validation(
                "projects.extension must not be empty".into(),
            ));
        }
        if self.projects.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "projects.extension must not start with '.'".into(),
            ));
        }
        let i18n = &self.i18n;
        if i18n.languages.is_empty() {
            return Err(ConfigError::Validation(
                "i18n.languages must not be empty".into(),
            ));
        }
        if !i18n.is_supported(&i18n.default_language) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_language '{}' is not in i18n.languages",
                i18n.default_language
            )));
        }
        if let Some(lang) = i18n
            .project_languages
            .iter()
            .find(|l| !i18n.is_supported(l))
        {
            return Err(ConfigError::Validation(format!(
                "i18n.project_languages entry '{lang}' is not in i18n.languages"
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
#
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file as config.toml in the content root. Tables merge key by
# key with the defaults; arrays replace the default array entirely.

# ---------------------------------------------------------------------------
# Project showcase
# ---------------------------------------------------------------------------
[projects]
# Directory with one content file per project, relative to the content root.
dir = "projects"
# Content file extension, without the leading dot.
extension = "mdx"
# Slugs hidden from the gallery and from route enumeration. The template
# entry stays reachable by its direct address.
exclude = ["example"]

# ---------------------------------------------------------------------------
# Locales
# ---------------------------------------------------------------------------
[i18n]
# Used when a request names no supported locale.
default_language = "en"
# Every locale the site is served in.
languages = [
    "af-ZA", "ar-SA", "de-DE", "en", "es-ES",
    "fr-FR", "hi-IN", "id-ID", "it-IT", "ja-JP",
    "lv-LV", "lt-LT", "nl-NL", "pt-BR", "pt-PT",
    "pl-PL", "ro-RO", "tr-TR", "uk-UA", "vi-VN",
]
# Locales that have project pages. Must be a subset of `languages`.
project_languages = ["en"]
# Locales for which Open Graph images are not generated.
og_image_blacklist = ["ar-SA"]
"##
}
