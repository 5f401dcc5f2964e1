//! Structural merge for layered, configuration-like records.
//!
//! A merge takes a `base` tree and an `overlay` tree of the same general shape
//! and produces a new tree:
//!
//! - Where both sides hold a table/object, the two are merged key-by-key.
//! - Everything else in the overlay (scalars, arrays, `null`, or a value whose
//!   type differs from the base) replaces the base value wholesale.
//! - Keys present only in the base are kept as they are.
//!
//! Arrays are never merged element-wise. An overlay array is the final array,
//! which keeps repeated merges idempotent.
//!
//! ```text
//! base:    { images = { sizes = [800, 1400], quality = 90 }, name = "a" }
//! overlay: { images = { sizes = [640] } }
//! result:  { images = { sizes = [640], quality = 90 }, name = "a" }
//! ```
//!
//! Both arguments are taken by value. Callers that still need an input after
//! merging clone it first, so neither input is ever observed mutated.
//!
//! [`merge_files`] applies the same merge to documents on disk.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeFileError {
    #[error("Cannot read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("JSON error in {}: {}", .0.display(), .1)]
    Json(PathBuf, #[source] serde_json::Error),
    #[error("TOML parse error in {}: {}", .0.display(), .1)]
    Toml(PathBuf, #[source] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlOutput(#[from] toml::ser::Error),
    #[error("JSON serialize error: {0}")]
    JsonOutput(#[from] serde_json::Error),
}

/// A value tree that supports structural merging.
pub trait Merge: Sized {
    /// Merge `overlay` on top of `self`, returning the combined tree.
    fn merge(self, overlay: Self) -> Self;
}

impl Merge for toml::Value {
    fn merge(self, overlay: Self) -> Self {
        match (self, overlay) {
            (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
                for (key, overlay_val) in overlay_table {
                    let merged = match base_table.remove(&key) {
                        Some(base_val) => base_val.merge(overlay_val),
                        None => overlay_val,
                    };
                    base_table.insert(key, merged);
                }
                toml::Value::Table(base_table)
            }
            (_, overlay) => overlay,
        }
    }
}

impl Merge for serde_json::Value {
    fn merge(self, overlay: Self) -> Self {
        match (self, overlay) {
            (serde_json::Value::Object(mut base_map), serde_json::Value::Object(overlay_map)) => {
                for (key, overlay_val) in overlay_map {
                    let merged = match base_map.remove(&key) {
                        Some(base_val) => base_val.merge(overlay_val),
                        None => overlay_val,
                    };
                    base_map.insert(key, merged);
                }
                serde_json::Value::Object(base_map)
            }
            (_, overlay) => overlay,
        }
    }
}

/// Merge `overlay` on top of `base`.
pub fn merge<T: Merge>(base: T, overlay: T) -> T {
    base.merge(overlay)
}

/// Fold every layer onto `base`, left to right. The right-most layer wins at
/// each leaf.
pub fn merge_all<T: Merge>(base: T, layers: impl IntoIterator<Item = T>) -> T {
    layers.into_iter().fold(base, T::merge)
}

/// Merge documents on disk left to right and render the result.
///
/// The base file's extension picks the format: `.json` is JSON, anything else
/// is TOML. All overlays are read in the same format.
pub fn merge_files(base: &Path, overlays: &[PathBuf]) -> Result<String, MergeFileError> {
    let is_json = base
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if is_json {
        let layers = overlays
            .iter()
            .map(|p| read_json(p))
            .collect::<Result<Vec<_>, _>>()?;
        let merged = merge_all(read_json(base)?, layers);
        Ok(format!("{}\n", serde_json::to_string_pretty(&merged)?))
    } else {
        let layers = overlays
            .iter()
            .map(|p| read_toml(p))
            .collect::<Result<Vec<_>, _>>()?;
        let merged = merge_all(read_toml(base)?, layers);
        Ok(toml::to_string_pretty(&merged)?)
    }
}

fn read_text(path: &Path) -> Result<String, MergeFileError> {
    fs::read_to_string(path).map_err(|e| MergeFileError::Io(path.to_path_buf(), e))
}

fn read_json(path: &Path) -> Result<serde_json::Value, MergeFileError> {
    serde_json::from_str(&read_text(path)?).map_err(|e| MergeFileError::Json(path.to_path_buf(), e))
}

fn read_toml(path: &Path) -> Result<toml::Value, MergeFileError> {
    toml::from_str(&read_text(path)?).map_err(|e| MergeFileError::Toml(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn toml_value(src: &str) -> toml::Value {
        toml::from_str(src).unwrap()
    }

    // =========================================================================
    // JSON trees
    // =========================================================================

    #[test]
    fn empty_overlay_is_identity() {
        let a = json!({"a": 1, "nested": {"b": [1, 2], "c": null}});
        assert_eq!(merge(a.clone(), json!({})), a);
    }

    #[test]
    fn empty_base_yields_overlay() {
        let b = json!({"a": {"b": true}, "list": ["x"]});
        assert_eq!(merge(json!({}), b.clone()), b);
    }

    #[test]
    fn scalar_override() {
        let merged = merge(json!({"quality": 90}), json!({"quality": 70}));
        assert_eq!(merged, json!({"quality": 70}));
    }

    #[test]
    fn base_only_keys_preserved() {
        let merged = merge(json!({"a": 1, "b": 2}), json!({"a": 10}));
        assert_eq!(merged, json!({"a": 10, "b": 2}));
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let base = json!({"colors": {"light": {"bg": "#fff", "text": "#000"}}});
        let overlay = json!({"colors": {"light": {"bg": "#fafafa"}}});
        let merged = merge(base, overlay);
        assert_eq!(
            merged,
            json!({"colors": {"light": {"bg": "#fafafa", "text": "#000"}}})
        );
    }

    #[test]
    fn primitive_replaces_nested_record() {
        let merged = merge(json!({"author": {"name": "x", "bio": "y"}}), json!({"author": "z"}));
        assert_eq!(merged, json!({"author": "z"}));
    }

    #[test]
    fn record_replaces_primitive() {
        let merged = merge(json!({"author": "z"}), json!({"author": {"name": "x"}}));
        assert_eq!(merged, json!({"author": {"name": "x"}}));
    }

    #[test]
    fn arrays_replaced_wholesale() {
        let merged = merge(
            json!({"sizes": [800, 1400, 2080], "keep": true}),
            json!({"sizes": [640]}),
        );
        assert_eq!(merged["sizes"], json!([640]));
        assert_eq!(merged["keep"], json!(true));
    }

    #[test]
    fn array_of_objects_not_merged_elementwise() {
        let merged = merge(
            json!({"links": [{"label": "a", "url": "1"}]}),
            json!({"links": [{"label": "b"}]}),
        );
        assert_eq!(merged["links"], json!([{"label": "b"}]));
    }

    #[test]
    fn null_override_replaces() {
        let merged = merge(json!({"banner": {"src": "x"}}), json!({"banner": null}));
        assert_eq!(merged, json!({"banner": null}));
    }

    #[test]
    fn non_object_top_level_overlay_wins() {
        assert_eq!(merge(json!({"a": 1}), json!([1, 2])), json!([1, 2]));
        assert_eq!(merge(json!(3), json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn disjoint_overrides_are_associative() {
        let a = json!({"x": {"p": 1}, "y": 2});
        let b = json!({"x": {"q": 3}});
        let c = json!({"x": {"r": 4}, "z": 5});
        let left = merge(merge(a.clone(), b.clone()), c.clone());
        let right = merge(a, merge(b, c));
        assert_eq!(left, right);
    }

    #[test]
    fn overlapping_keys_rightmost_wins() {
        let merged = merge_all(
            json!({"x": {"p": 1}}),
            [json!({"x": {"p": 2}}), json!({"x": {"p": 3}})],
        );
        assert_eq!(merged, json!({"x": {"p": 3}}));
    }

    #[test]
    fn merge_all_with_no_layers_returns_base() {
        let base = json!({"a": 1});
        assert_eq!(merge_all(base.clone(), Vec::new()), base);
    }

    // =========================================================================
    // TOML trees
    // =========================================================================

    #[test]
    fn toml_table_merge_preserves_siblings() {
        let base = toml_value(
            r#"
[projects]
dir = "projects"
extension = "mdx"
"#,
        );
        let overlay = toml_value(
            r#"
[projects]
extension = "md"
"#,
        );
        let merged = merge(base, overlay);
        let projects = merged.get("projects").unwrap();
        assert_eq!(projects.get("extension").unwrap().as_str(), Some("md"));
        assert_eq!(projects.get("dir").unwrap().as_str(), Some("projects"));
    }

    #[test]
    fn toml_three_layers() {
        let stock = toml_value(
            r#"
[i18n]
default_language = "en"
languages = ["en", "de-DE", "fr-FR"]
"#,
        );
        let root = toml_value(
            r#"
[i18n]
languages = ["en", "de-DE"]
"#,
        );
        let local = toml_value(
            r#"
[i18n]
default_language = "de-DE"
"#,
        );

        let merged = merge_all(stock, [root, local]);
        let i18n = merged.get("i18n").unwrap();
        assert_eq!(i18n.get("default_language").unwrap().as_str(), Some("de-DE"));
        // array from the middle layer replaced the stock one wholesale
        assert_eq!(i18n.get("languages").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn toml_table_replaced_by_scalar() {
        let merged = merge(
            toml_value("[exclude]\nname = \"example\""),
            toml_value("exclude = \"none\""),
        );
        assert_eq!(merged.get("exclude").unwrap().as_str(), Some("none"));
    }

    // =========================================================================
    // Files on disk
    // =========================================================================

    #[test]
    fn merge_toml_files() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        let site = tmp.path().join("site.toml");
        fs::write(&base, "[projects]\ndir = \"projects\"\nextension = \"mdx\"\n").unwrap();
        fs::write(&site, "[projects]\nextension = \"md\"\n").unwrap();

        let out = merge_files(&base, &[site]).unwrap();
        let merged: toml::Value = toml::from_str(&out).unwrap();
        let projects = merged.get("projects").unwrap();
        assert_eq!(projects.get("dir").unwrap().as_str(), Some("projects"));
        assert_eq!(projects.get("extension").unwrap().as_str(), Some("md"));
    }

    #[test]
    fn merge_json_files() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.json");
        let a = tmp.path().join("a.json");
        let b = tmp.path().join("b.json");
        fs::write(&base, r#"{"theme": {"accent": "purple", "radius": 8}, "tags": [1, 2]}"#).unwrap();
        fs::write(&a, r#"{"theme": {"accent": "blue"}}"#).unwrap();
        fs::write(&b, r#"{"tags": [3]}"#).unwrap();

        let out = merge_files(&base, &[a, b]).unwrap();
        let merged: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            merged,
            json!({"theme": {"accent": "blue", "radius": 8}, "tags": [3]})
        );
    }

    #[test]
    fn merge_files_reports_bad_overlay() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.json");
        let bad = tmp.path().join("bad.json");
        fs::write(&base, "{}").unwrap();
        fs::write(&bad, "{ not json").unwrap();

        let err = merge_files(&base, &[bad]).unwrap_err();
        assert!(matches!(err, MergeFileError::Json(path, _) if path.ends_with("bad.json")));
    }

    #[test]
    fn merge_files_missing_base() {
        let tmp = TempDir::new().unwrap();
        let err = merge_files(&tmp.path().join("nope.toml"), &[]).unwrap_err();
        assert!(matches!(err, MergeFileError::Io(..)));
    }
}
