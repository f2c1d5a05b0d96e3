//! Embed marker scanning.
//!
//! A marker is `{{`, one or more characters other than `}`, then `}}`. The
//! first `}` ends the reference, so markers never nest; `{{}}` is not a
//! marker. References may span lines and are trimmed before use.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Pattern matching a single embed marker, capturing the raw reference.
pub const EMBED_PATTERN: &str = r"\{\{([^}]+)\}\}";

fn embed_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMBED_PATTERN).expect("embed pattern is a valid regex"))
}

/// One `{{reference}}` occurrence in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMarker {
    /// Byte range of the whole marker, delimiters included
    pub span: Range<usize>,
    /// Reference text with surrounding whitespace removed
    pub reference: String,
}

/// Find all embed markers in `content`, left to right, non-overlapping.
pub fn scan_markers(content: &str) -> Vec<EmbedMarker> {
    embed_regex()
        .captures_iter(content)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let reference = captures.get(1)?;
            Some(EmbedMarker {
                span: whole.range(),
                reference: reference.as_str().trim().to_string(),
            })
        })
        .collect()
}
