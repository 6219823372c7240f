//! Layer URL handling.
//!
//! Derives the clone target directory from a layer URL and rewrites URLs to
//! carry an auth token as percent-encoded userinfo.

use crate::error::{Result, StrataError};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters percent-encoded when a token is embedded as userinfo.
///
/// Covers everything that would terminate or restructure the userinfo
/// component: whitespace, the `@` separator, path and query delimiters,
/// and brackets.
const USERINFO_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'|');

/// Derive the directory name a layer is cloned into.
///
/// Takes the final path segment of the URL, ignoring trailing slashes, with
/// a trailing `.git` suffix stripped.
pub fn resolve_target_dir(url: &str) -> Result<String> {
    let trimmed = url.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or("");
    let target = segment.strip_suffix(".git").unwrap_or(segment);

    if target.is_empty() {
        return Err(StrataError::InvalidUrlFormat {
            url: url.to_string(),
            reason: "cannot derive a target directory name".to_string(),
        });
    }

    Ok(target.to_string())
}

/// Rewrite a layer URL to embed an auth token as userinfo.
///
/// With a token, the URL must contain exactly one `://` separator; the token
/// is percent-encoded and inserted as `scheme://TOKEN@rest`. Without a token
/// the URL is returned unchanged.
pub fn format_authenticated_url(url: &str, token: Option<&str>) -> Result<String> {
    let Some(token) = token else {
        return Ok(url.to_string());
    };

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(StrataError::InvalidUrlFormat {
            url: url.to_string(),
            reason: "expected a scheme separator ('://')".to_string(),
        });
    };

    if rest.contains("://") {
        return Err(StrataError::InvalidUrlFormat {
            url: url.to_string(),
            reason: "more than one scheme separator ('://')".to_string(),
        });
    }

    let encoded = utf8_percent_encode(token, USERINFO_ESCAPE);
    Ok(format!("{}://{}@{}", scheme, encoded, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_dir_strips_git_suffix() {
        let target = resolve_target_dir("https://example.com/org/repo.git").unwrap();
        assert_eq!(target, "repo");
    }

    #[test]
    fn target_dir_without_git_suffix() {
        let target = resolve_target_dir("https://example.com/org/repo").unwrap();
        assert_eq!(target, "repo");
    }

    #[test]
    fn target_dir_ignores_trailing_slashes() {
        let target = resolve_target_dir("https://example.com/org/repo.git///").unwrap();
        assert_eq!(target, "repo");
    }

    #[test]
    fn target_dir_from_local_path() {
        let target = resolve_target_dir("/srv/git/layer-base").unwrap();
        assert_eq!(target, "layer-base");
    }

    #[test]
    fn empty_derivation_is_invalid() {
        let err = resolve_target_dir("///").unwrap_err();
        assert!(matches!(err, StrataError::InvalidUrlFormat { .. }));

        let err = resolve_target_dir("https://example.com/org/.git").unwrap_err();
        assert!(matches!(err, StrataError::InvalidUrlFormat { .. }));
    }

    #[test]
    fn token_is_inserted_as_userinfo() {
        let url = format_authenticated_url("https://example.com/x", Some("T")).unwrap();
        assert_eq!(url, "https://T@example.com/x");
    }

    #[test]
    fn token_reserved_characters_are_percent_encoded() {
        let url = format_authenticated_url("https://example.com/x", Some("to k@n:1/2")).unwrap();
        assert_eq!(url, "https://to%20k%40n%3A1%2F2@example.com/x");
    }

    #[test]
    fn no_token_returns_url_unchanged() {
        let url = format_authenticated_url("https://example.com/x", None).unwrap();
        assert_eq!(url, "https://example.com/x");
    }

    #[test]
    fn missing_separator_is_invalid() {
        let err = format_authenticated_url("not-a-valid-url", Some("T")).unwrap_err();
        assert!(matches!(err, StrataError::InvalidUrlFormat { .. }));
        assert!(err.to_string().contains("not-a-valid-url"));
    }

    #[test]
    fn repeated_separator_is_invalid() {
        let err = format_authenticated_url("https://example.com/x://y", Some("T")).unwrap_err();
        assert!(matches!(err, StrataError::InvalidUrlFormat { .. }));
    }
}
