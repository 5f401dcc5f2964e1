//! Supported locales.
//!
//! The site is translated into many locales, but project pages only exist in
//! a subset (`project_languages`). Route enumeration for projects uses that
//! subset; everything else uses the full `languages` list.

use serde::{Deserialize, Serialize};

/// Locale settings, the `[i18n]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale used when a request names no supported locale.
    pub default_language: String,
    /// Every locale the site is served in, in display order.
    pub languages: Vec<String>,
    /// Locales that have project pages.
    pub project_languages: Vec<String>,
    /// Locales for which Open Graph images are not generated.
    pub og_image_blacklist: Vec<String>,
}

const STOCK_LANGUAGES: &[&str] = &[
    "af-ZA", "ar-SA", "de-DE", "en", "es-ES", "fr-FR", "hi-IN", "id-ID", "it-IT", "ja-JP",
    "lv-LV", "lt-LT", "nl-NL", "pt-BR", "pt-PT", "pl-PL", "ro-RO", "tr-TR", "uk-UA", "vi-VN",
];

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            languages: STOCK_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            project_languages: vec!["en".to_string()],
            og_image_blacklist: vec!["ar-SA".to_string()],
        }
    }
}

impl I18nConfig {
    pub fn is_supported(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l == code)
    }

    /// Locales project pages are generated for, in configured order.
    pub fn project_locales(&self) -> &[String] {
        &self.project_languages
    }

    /// Whether Open Graph images should be generated for `code`.
    pub fn og_image_enabled(&self, code: &str) -> bool {
        !self.og_image_blacklist.iter().any(|l| l == code)
    }

    /// `code` if supported, otherwise the default locale.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        if self.is_supported(code) {
            code
        } else {
            &self.default_language
        }
    }
}
