//! Match highlighting for rendered text.

use ratatui::style::Style;
use ratatui::text::Span;

use super::query::QueryMatcher;

/// Split `text` into styled spans, painting every query match with
/// `emphasis` and everything else with `base`.
///
/// The concatenated span contents always equal `text` exactly; a query
/// with no matches in `text` (or no query at all) yields one plain
/// span. Ranges come from the same matcher that decided row
/// visibility, so whatever made a row match is what lights up.
#[must_use]
pub fn highlight_spans<'a>(
    text: &'a str,
    matcher: &QueryMatcher,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'a>> {
    let ranges = matcher.find_spans(text);
    if ranges.is_empty() {
        return vec![Span::styled(text, base)];
    }
    let mut spans = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            spans.push(Span::styled(&text[cursor..range.start], base));
        }
        spans.push(Span::styled(&text[range.start..range.end], emphasis));
        cursor = range.end;
    }
    if cursor < text.len() {
        spans.push(Span::styled(&text[cursor..], base));
    }
    spans
}
