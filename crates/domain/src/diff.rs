//! Change highlighting against the baseline.
//!
//! Comparison is by occurrence: the Nth occurrence of a key in the current
//! list is matched with the Nth occurrence of the same key in the original
//! list. A key-to-value map would lose repeated keys and misreport every
//! parameter after an insertion.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::codec::load_url;
use crate::error::DomainResult;
use crate::params::QueryParams;

/// One parameter of the current list, annotated against the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDiff {
    /// Parameter key.
    pub key: String,
    /// Parameter value.
    pub value: String,
    /// The baseline has no occurrence of this key at this index.
    pub key_changed: bool,
    /// The occurrence exists in the baseline with a different value.
    pub value_changed: bool,
}

impl ParamDiff {
    /// Returns true if either part is highlighted.
    #[must_use]
    pub const fn is_changed(&self) -> bool {
        self.key_changed || self.value_changed
    }
}

/// Annotates every parameter of `current` against `original`.
#[must_use]
pub fn diff_for_display(current: &QueryParams, original: &QueryParams) -> Vec<ParamDiff> {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    current
        .iter()
        .map(|param| {
            let counter = seen.entry(param.key.as_str()).or_insert(0);
            let occurrence = *counter;
            *counter += 1;

            let baseline = original.get_all(&param.key);
            let key_changed = baseline.len() <= occurrence;
            let value_changed = !key_changed && baseline[occurrence] != param.value;

            ParamDiff {
                key: param.key.clone(),
                value: param.value.clone(),
                key_changed,
                value_changed,
            }
        })
        .collect()
}

/// A run of preview text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewSegment {
    /// Text to display.
    pub text: String,
    /// Whether the text differs from the baseline.
    pub highlighted: bool,
}

impl PreviewSegment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }

    fn marked(text: impl Into<String>, highlighted: bool) -> Self {
        Self {
            text: text.into(),
            highlighted,
        }
    }
}

/// Splits `built_url` into display segments, highlighting changed keys and
/// values.
///
/// The URL is re-parsed, so the preview shows exactly what would be
/// applied: trimmed keys, no empty-key rows. Keys and values are shown
/// decoded.
///
/// # Errors
///
/// Returns an error if `built_url` does not parse.
pub fn render_preview(built_url: &str, original: &QueryParams) -> DomainResult<Vec<PreviewSegment>> {
    let parsed = load_url(built_url)?;
    if parsed.params().is_empty() {
        return Ok(vec![PreviewSegment::plain(built_url)]);
    }

    let mut segments = vec![PreviewSegment::plain(format!("{}?", parsed.base()))];
    let diffs = diff_for_display(parsed.params(), original);
    let last = diffs.len().saturating_sub(1);

    for (index, diff) in diffs.into_iter().enumerate() {
        segments.push(PreviewSegment::marked(diff.key, diff.key_changed));
        segments.push(PreviewSegment::plain("="));
        segments.push(PreviewSegment::marked(diff.value, diff.value_changed));
        if index < last {
            segments.push(PreviewSegment::plain("&"));
        }
    }

    if let Some(fragment) = parsed.fragment().filter(|f| !f.is_empty()) {
        segments.push(PreviewSegment::plain(format!("#{fragment}")));
    }

    Ok(segments)
}

/// Joins preview segments back into plain text.
#[must_use]
pub fn preview_text(segments: &[PreviewSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
