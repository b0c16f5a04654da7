//! Query compilation and text matching.
//!
//! The search box contents are compiled once per state change into a
//! [`QueryMatcher`] and applied to every candidate row. Regex mode is
//! best-effort: a pattern that fails to compile silently degrades to a
//! literal scan of the raw query text, so a half-typed `(` or `[` never
//! replaces the list with an error.

use std::ops::Range;

use regex::RegexBuilder;

use crate::model::Item;

/// Compiled form of the search box contents.
#[derive(Debug, Clone)]
pub enum QueryMatcher {
    /// Blank or whitespace-only query. Matches everything, highlights nothing.
    Empty,
    /// Plain substring scan, optionally case-folded.
    Literal { needle: String, fold_case: bool },
    /// Compiled regular expression. Case-insensitivity is baked in at
    /// build time, so matching needs no extra flag here.
    Regex(regex::Regex),
}

impl QueryMatcher {
    /// Compile a raw query. Surrounding whitespace is ignored.
    #[must_use]
    pub fn new(query: &str, use_regex: bool, case_sensitive: bool) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self::Empty;
        }
        if use_regex {
            if let Ok(re) = RegexBuilder::new(query)
                .case_insensitive(!case_sensitive)
                .build()
            {
                return Self::Regex(re);
            }
            // Malformed pattern: fall through to the literal scan.
        }
        Self::Literal {
            needle: query.to_owned(),
            fold_case: !case_sensitive,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Does `text` contain at least one match?
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Empty => true,
            Self::Literal { needle, fold_case } => {
                find_literal(text, needle, *fold_case, 0).is_some()
            }
            Self::Regex(re) => re.is_match(text),
        }
    }

    /// Does any visible text field of `item` match? The tag list is
    /// scanned as one space-joined string, so a query can also span
    /// adjacent tags.
    #[must_use]
    pub fn matches_item(&self, item: &Item) -> bool {
        if self.is_empty() {
            return true;
        }
        self.is_match(&item.command)
            || self.is_match(&item.description)
            || self.is_match(&item.example)
            || self.is_match(&item.tags_joined())
    }

    /// Non-overlapping match ranges in left-to-right order, as byte
    /// offsets into `text`. Zero-width regex matches are dropped rather
    /// than rendered as empty spans.
    #[must_use]
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        match self {
            Self::Empty => Vec::new(),
            Self::Literal { needle, fold_case } => {
                let mut spans = Vec::new();
                let mut from = 0;
                while let Some(range) = find_literal(text, needle, *fold_case, from) {
                    from = range.end;
                    spans.push(range);
                }
                spans
            }
            Self::Regex(re) => re
                .find_iter(text)
                .map(|m| m.range())
                .filter(|range| !range.is_empty())
                .collect(),
        }
    }
}

/// First occurrence of `needle` in `haystack` at or after byte `from`.
///
/// The returned range always lies on character boundaries of the
/// original `haystack`, which keeps it safe to slice for display.
fn find_literal(
    haystack: &str,
    needle: &str,
    fold_case: bool,
    from: usize,
) -> Option<Range<usize>> {
    if needle.is_empty() || from >= haystack.len() {
        return None;
    }
    if !fold_case {
        return haystack[from..]
            .find(needle)
            .map(|at| from + at..from + at + needle.len());
    }
    let needle_folded: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let tail = &haystack[from..];
    for (at, _) in tail.char_indices() {
        if let Some(len) = folded_match_len(&tail[at..], &needle_folded) {
            return Some(from + at..from + at + len);
        }
    }
    None
}

/// Byte length of a case-folded match of `needle_folded` at the start of
/// `tail`, if there is one. Folding a character can expand it (for
/// example a dotted capital I), so matches are measured against the
/// folded stream but always claim whole characters of the original text.
fn folded_match_len(tail: &str, needle_folded: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (off, ch) in tail.char_indices() {
        if pos == needle_folded.len() {
            return Some(off);
        }
        for folded in ch.to_lowercase() {
            if pos < needle_folded.len() {
                if folded != needle_folded[pos] {
                    return None;
                }
                pos += 1;
            }
        }
    }
    (pos == needle_folded.len()).then_some(tail.len())
}
