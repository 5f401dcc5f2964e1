//! Front matter splitting and parsing.
//!
//! Content files start with a YAML header fenced by `---` lines, followed by
//! the body:
//!
//! ```text
//! ---
//! title: Skyblock Tools
//! description: Quality-of-life tools for skyblock worlds
//! github: https://github.com/example/skyblock-tools
//! ---
//!
//! ## Features
//! ...
//! ```
//!
//! Rules:
//! - The opening fence must be the very first line (a leading BOM is ignored).
//!   Without it, the file has no header and the whole text is the body.
//! - The header ends at the next line that is exactly `---` (trailing
//!   whitespace and `\r` tolerated). An opening fence with no closing fence is
//!   an error.
//! - An empty header, or one that is YAML `null`, parses as the default record.
//!   A header that is valid YAML but not a mapping is an error.
//! - The body is everything after the closing fence line.

use serde::de::DeserializeOwned;
use thiserror::Error;

const FENCE: &str = "---";

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("front matter opened with '---' but never closed")]
    Unterminated,
    #[error("front matter must be a mapping of keys to values")]
    NotAMapping,
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split raw text into `(header, body)`.
///
/// Returns `Ok(None)` when the text has no front matter at all.
pub fn split(source: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if !is_fence(first) {
        return Ok(None);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if is_fence(line) {
            let header = &source[header_start..offset];
            let body = &source[offset + line.len()..];
            return Ok(Some((header, body)));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}

/// Parse the header into `T` and return it with the body.
///
/// Files without front matter yield `T::default()` and the full text.
pub fn parse<T>(source: &str) -> Result<(T, String), FrontmatterError>
where
    T: DeserializeOwned + Default,
{
    let Some((header, body)) = split(source)? else {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        return Ok((T::default(), source.to_string()));
    };

    if header.trim().is_empty() {
        return Ok((T::default(), body.to_string()));
    }

    let value: serde_yaml::Value = serde_yaml::from_str(header)?;
    let record = match value {
        serde_yaml::Value::Null => T::default(),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value)?,
        _ => return Err(FrontmatterError::NotAMapping),
    };
    Ok((record, body.to_string()))
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Header {
        title: Option<String>,
        tags: Option<Vec<String>>,
    }

    #[test]
    fn splits_header_and_body() {
        let (header, body) = split("---\ntitle: Foo\n---\nBody text\n").unwrap().unwrap();
        assert_eq!(header, "title: Foo\n");
        assert_eq!(body, "Body text\n");
    }

    #[test]
    fn no_front_matter_is_none() {
        assert!(split("# Just markdown\n").unwrap().is_none());
        assert!(split("").unwrap().is_none());
    }

    #[test]
    fn fence_must_be_first_line() {
        assert!(split("\n---\ntitle: Foo\n---\n").unwrap().is_none());
    }

    #[test]
    fn crlf_line_endings() {
        let (header, body) = split("---\r\ntitle: Foo\r\n---\r\nBody\r\n")
            .unwrap()
            .unwrap();
        assert_eq!(header, "title: Foo\r\n");
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn leading_bom_ignored() {
        let (header, _) = split("\u{feff}---\ntitle: Foo\n---\n").unwrap().unwrap();
        assert_eq!(header, "title: Foo\n");
    }

    #[test]
    fn closing_fence_at_end_of_file() {
        let (header, body) = split("---\ntitle: Foo\n---").unwrap().unwrap();
        assert_eq!(header, "title: Foo\n");
        assert_eq!(body, "");
    }

    #[test]
    fn unterminated_is_error() {
        let result = split("---\ntitle: Foo\nno closing fence\n");
        assert!(matches!(result, Err(FrontmatterError::Unterminated)));
    }

    #[test]
    fn parse_typed_header() {
        let (header, body): (Header, String) =
            parse("---\ntitle: Foo\ntags: [a, b]\n---\nhello").unwrap();
        assert_eq!(header.title.as_deref(), Some("Foo"));
        assert_eq!(header.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(body, "hello");
    }

    #[test]
    fn parse_without_header_uses_default() {
        let (header, body): (Header, String) = parse("plain body").unwrap();
        assert_eq!(header, Header::default());
        assert_eq!(body, "plain body");
    }

    #[test]
    fn parse_empty_header_uses_default() {
        let (header, body): (Header, String) = parse("---\n---\nbody").unwrap();
        assert_eq!(header, Header::default());
        assert_eq!(body, "body");
    }

    #[test]
    fn parse_null_header_uses_default() {
        let (header, _): (Header, String) = parse("---\n~\n---\n").unwrap();
        assert_eq!(header, Header::default());
    }

    #[test]
    fn parse_sequence_header_is_error() {
        let result: Result<(Header, String), _> = parse("---\n- a\n- b\n---\n");
        assert!(matches!(result, Err(FrontmatterError::NotAMapping)));
    }

    #[test]
    fn parse_invalid_yaml_is_error() {
        let result: Result<(Header, String), _> = parse("---\ntitle: [unclosed\n---\n");
        assert!(matches!(result, Err(FrontmatterError::Yaml(_))));
    }
}
