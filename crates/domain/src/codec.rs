//! URL decomposition and reconstruction.
//!
//! A URL is treated as a base (everything up to and including the path),
//! an ordered list of query parameters and an optional fragment. Parsing
//! and serialization follow WHATWG URL rules through the `url` crate, and
//! the query string uses `application/x-www-form-urlencoded`, so keys and
//! values round-trip the way a browser's `URLSearchParams` would write them.

use url::{Position, Url};

use crate::error::{DomainError, DomainResult};
use crate::params::{QueryParam, QueryParams};

/// A parsed URL together with its decoded query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    url: Url,
    params: QueryParams,
}

impl ParsedUrl {
    /// Returns the base: scheme, authority and path, without query or fragment.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.url[..Position::AfterPath]
    }

    /// Returns the decoded query parameters in URL order.
    #[must_use]
    pub const fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Returns the fragment without the leading `#`, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.url.fragment()
    }

    /// Returns the URL scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Returns the normalised serialization of the URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// Returns the URL rebuilt from its own parameters.
    ///
    /// This is the form the baseline is compared in, so that a session that
    /// has not been edited never reports changes caused only by encoding
    /// differences (`%20` versus `+`, for instance).
    #[must_use]
    pub fn normalized(&self) -> String {
        build_url(&self.params, self)
    }
}

/// Parses `raw` into a [`ParsedUrl`].
///
/// A URL without a query string yields an empty parameter list.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] if `raw` is not an absolute URL.
pub fn load_url(raw: &str) -> DomainResult<ParsedUrl> {
    let url = Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}")))?;
    let params = url
        .query_pairs()
        .map(|(k, v)| QueryParam::new(k, v))
        .collect();
    Ok(ParsedUrl { url, params })
}

/// Parses `raw`, also rejecting blank input and, when `require_http` is
/// set, schemes other than `http` and `https`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidUrl`] for blank or unparsable input and
/// [`DomainError::UnsupportedScheme`] for a rejected scheme.
pub fn load_url_checked(raw: &str, require_http: bool) -> DomainResult<ParsedUrl> {
    if raw.trim().is_empty() {
        return Err(DomainError::InvalidUrl("empty URL".to_string()));
    }
    let parsed = load_url(raw)?;
    if require_http && !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::UnsupportedScheme(parsed.scheme().to_string()));
    }
    Ok(parsed)
}

/// Rebuilds a URL from `base` and `rows`.
///
/// Rows are written in the given order. Each key is trimmed and rows whose
/// trimmed key is empty are dropped; values are written untrimmed. Repeated
/// keys are kept. When no row survives the URL has no `?` at all. The
/// base's fragment is preserved.
#[must_use]
pub fn build_url(rows: &QueryParams, base: &ParsedUrl) -> String {
    let pairs: Vec<(&str, &str)> = rows
        .iter()
        .map(|p| (p.key.trim(), p.value.as_str()))
        .filter(|(k, _)| !k.is_empty())
        .collect();

    let mut url = base.url.clone();
    url.set_query(None);
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url.into()
}

/// Returns true when the built URL differs from the baseline.
///
/// Plain string comparison: reordering parameters counts as a change.
#[must_use]
pub fn has_pending_changes(built: &str, baseline: &str) -> bool {
    built != baseline
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_load_url_parses_params_in_order() {
        let parsed = load_url("https://e.com/p?a=1&b=2&a=3#top").unwrap();
        assert_eq!(parsed.base(), "https://e.com/p");
        assert_eq!(parsed.params(), &params(&[("a", "1"), ("b", "2"), ("a", "3")]));
        assert_eq!(parsed.fragment(), Some("top"));
    }

    #[test]
    fn test_load_url_without_query_is_empty() {
        let parsed = load_url("https://e.com/p").unwrap();
        assert!(parsed.params().is_empty());
    }

    #[test]
    fn test_load_url_decodes_form_encoding() {
        let parsed = load_url("https://e.com/?q=a+b&r=c%20d&e=%C3%A9").unwrap();
        assert_eq!(
            parsed.params(),
            &params(&[("q", "a b"), ("r", "c d"), ("e", "é")])
        );
    }

    #[test]
    fn test_load_url_rejects_garbage() {
        assert!(matches!(
            load_url("not-a-url"),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_load_url_checked() {
        assert!(matches!(
            load_url_checked("   ", true),
            Err(DomainError::InvalidUrl(_))
        ));
        assert_eq!(
            load_url_checked("chrome://extensions", true).unwrap_err(),
            DomainError::UnsupportedScheme("chrome".to_string())
        );
        assert!(load_url_checked("chrome://extensions", false).is_ok());
        assert!(load_url_checked("http://e.com/?a=1", true).is_ok());
    }

    #[test]
    fn test_build_url_drops_empty_keys() {
        let base = load_url("https://e.com/p").unwrap();
        let built = build_url(&params(&[("", "x"), ("a", "b")]), &base);
        assert_eq!(built, "https://e.com/p?a=b");
    }

    #[test]
    fn test_build_url_trims_keys_but_not_values() {
        let base = load_url("https://e.com/p").unwrap();
        let built = build_url(&params(&[("  k  ", " v "), ("   ", "gone")]), &base);
        assert_eq!(built, "https://e.com/p?k=+v+");
    }

    #[test]
    fn test_build_url_replaces_query_and_keeps_fragment() {
        let base = load_url("https://e.com/p?old=1#frag").unwrap();
        let built = build_url(&params(&[("b", "2"), ("a", "1"), ("b", "3")]), &base);
        assert_eq!(built, "https://e.com/p?b=2&a=1&b=3#frag");
    }

    #[test]
    fn test_build_url_without_rows_has_no_question_mark() {
        let base = load_url("https://e.com/p?a=1").unwrap();
        assert_eq!(build_url(&QueryParams::new(), &base), "https://e.com/p");
    }

    #[test]
    fn test_build_then_load_round_trips() {
        let base = load_url("https://e.com/search").unwrap();
        let original = params(&[
            ("q", "hello world"),
            ("tag", "a&b"),
            ("tag", "c=d"),
            ("empty", ""),
            ("sym", "100%"),
        ]);
        let built = build_url(&original, &base);
        let reloaded = load_url(&built).unwrap();
        assert_eq!(reloaded.params(), &original);
    }

    #[test]
    fn test_normalized_and_pending_changes() {
        let parsed = load_url("https://e.com/p?q=a%20b").unwrap();
        let baseline = parsed.normalized();
        assert_eq!(baseline, "https://e.com/p?q=a+b");
        assert!(!has_pending_changes(&build_url(parsed.params(), &parsed), &baseline));

        let reordered = load_url("https://e.com/p?a=1&b=2").unwrap();
        let swapped = build_url(&params(&[("b", "2"), ("a", "1")]), &reordered);
        assert!(has_pending_changes(&swapped, &reordered.normalized()));
    }
}
