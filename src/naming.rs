//! Slug derivation for content files.
//!
//! A slug is the content filename with its extension removed. It is the
//! entry's stable external address (`/en/projects/<slug>`), so only names that
//! are a single plain path component are accepted:
//!
//! - `skyblock-tools.mdx` → `skyblock-tools`
//! - `skyblock-tools.md` with extension `mdx` → not a content file
//! - `.mdx` → not a content file (empty slug)
//! - `archive.tar.mdx` → `archive.tar`

/// Derive a slug from a filename, if it carries the content extension.
///
/// The extension match is case-sensitive and given without the leading dot.
pub fn slug_from_filename(filename: &str, extension: &str) -> Option<String> {
    let stem = filename.strip_suffix(extension)?.strip_suffix('.')?;
    is_valid_slug(stem).then(|| stem.to_string())
}

/// The filename a slug resolves to.
pub fn filename_for_slug(slug: &str, extension: &str) -> String {
    format!("{slug}.{extension}")
}

/// Whether `slug` can address a file directly inside the collection directory.
///
/// Rejects empty names, hidden names, path separators and parent references.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
}
