#![no_main]
use ccref::filter::{visible_items, FilterState, QueryMatcher};
use ccref::model::Dataset;
use libfuzzer_sys::fuzz_target;

/// Fuzz the query matcher and the full filter pipeline.
///
/// The first byte selects the regex and case flags; the rest is the
/// query. This covers the literal scan, regex compilation, and the
/// fail-soft fallback for patterns that do not compile, all over the
/// built-in dataset.
fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    if let Ok(query) = std::str::from_utf8(rest) {
        let use_regex = flags & 1 != 0;
        let case_sensitive = flags & 2 != 0;

        let matcher = QueryMatcher::new(query, use_regex, case_sensitive);
        let _ = matcher.is_match("claude --continue");
        let _ = matcher.find_spans("Press dd to delete line");

        let state = FilterState {
            category: None,
            kind: None,
            query: query.to_string(),
            use_regex,
            case_sensitive,
        };
        let _ = visible_items(Dataset::builtin(), &state);
    }
});
