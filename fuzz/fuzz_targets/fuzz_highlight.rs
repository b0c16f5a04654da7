#![no_main]
use ccref::filter::{highlight_spans, QueryMatcher};
use libfuzzer_sys::fuzz_target;
use ratatui::style::{Modifier, Style};

/// Fuzz match highlighting.
///
/// The input is split at the first newline into a query and a subject
/// string. Span construction must never panic and must reproduce the
/// subject exactly when the spans are concatenated.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let Some((query, text)) = s.split_once('\n') else {
            return;
        };

        let matcher = QueryMatcher::new(query, true, false);
        let spans = highlight_spans(
            text,
            &matcher,
            Style::default(),
            Style::default().add_modifier(Modifier::BOLD),
        );

        let rebuilt: String = spans.iter().map(|span| span.content.as_ref()).collect();
        assert_eq!(rebuilt, text);
    }
});
