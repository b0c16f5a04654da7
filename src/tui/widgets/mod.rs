//! Reusable widgets for the reference browser TUI.

use crate::model::ItemKind;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

// ============================================================================
// Kind Facet Chips
// ============================================================================

/// Chips shown on the facet row: `All` plus one chip per item kind.
///
/// The same table drives rendering and mouse hit-testing so the two can
/// never disagree about chip positions.
pub fn facet_chips() -> Vec<(Option<ItemKind>, &'static str)> {
    let mut chips = vec![(None, "All")];
    chips.extend(ItemKind::ALL.iter().map(|&kind| (Some(kind), kind.display_name())));
    chips
}

/// Render the facet row as a sequence of chips, lighting up the active one.
pub fn facet_chip_spans(active: Option<ItemKind>) -> Vec<Span<'static>> {
    let scheme = colors();
    let mut spans = Vec::new();

    for (i, (kind, label)) in facet_chips().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if kind == active {
            let bg = match kind {
                Some(k) => scheme.kind_color(k),
                None => scheme.accent,
            };
            Style::default().fg(scheme.badge_fg_dark).bg(bg).bold()
        } else {
            Style::default().fg(scheme.text_muted)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    spans
}

/// Resolve a click at column `x` of the facet row to the chip under it.
///
/// Returns `None` for the gaps between chips and for columns past the
/// last chip. `Some(None)` is the `All` chip.
pub fn facet_chip_at(x: u16) -> Option<Option<ItemKind>> {
    let mut start = 0u16;
    for (kind, label) in facet_chips() {
        let width = UnicodeWidthStr::width(label) as u16 + 2;
        if x >= start && x < start + width {
            return Some(kind);
        }
        start += width + 1;
    }
    None
}

// ============================================================================
// Panels
// ============================================================================

/// Render a detail panel with a title and content lines.
pub fn render_detail_panel(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    border_color: Color,
) {
    let panel = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(panel, area);
}

/// Render an empty state placeholder.
pub fn render_empty_state(
    frame: &mut ratatui::Frame,
    area: Rect,
    message: &str,
    hint: Option<&str>,
) {
    let scheme = colors();
    let mut lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(scheme.text_muted)),
    ];

    if let Some(h) = hint {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            h.to_string(),
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render a popup overlay.
pub fn render_popup(
    frame: &mut ratatui::Frame,
    area: Rect,
    title: &str,
    content: Vec<Line<'static>>,
    percent_x: u16,
    percent_y: u16,
    border_color: Color,
) {
    let popup_area = centered_rect(percent_x, percent_y, area);
    frame.render_widget(Clear, popup_area);

    let popup = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(border_color).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(popup, popup_area);
}

/// Helper function to create a centered rectangle.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Truncate a string with ellipsis, using Unicode display width for accuracy.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let display_width = UnicodeWidthStr::width(s);
    if display_width <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let mut width = 0;
        let truncated: String = s
            .chars()
            .take_while(|ch| {
                let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
                if width + w > max_width - 3 {
                    return false;
                }
                width += w;
                true
            })
            .collect();
        format!("{}...", truncated)
    } else {
        let mut width = 0;
        s.chars()
            .take_while(|ch| {
                let w = UnicodeWidthChar::width(*ch).unwrap_or(0);
                if width + w > max_width {
                    return false;
                }
                width += w;
                true
            })
            .collect()
    }
}

// ============================================================================
// Minimum Size Check
// ============================================================================

/// Minimum terminal size requirements.
pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 24;

/// Check if terminal meets minimum size requirements.
pub fn check_terminal_size(width: u16, height: u16) -> Result<(), (u16, u16)> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        Err((MIN_WIDTH, MIN_HEIGHT))
    } else {
        Ok(())
    }
}

/// Render a "terminal too small" message.
pub fn render_size_warning(
    frame: &mut ratatui::Frame,
    area: Rect,
    required_width: u16,
    required_height: u16,
) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(colors().warning).bold(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(colors().text),
            ),
        ]),
        Line::from(vec![
            Span::raw("Required: "),
            Span::styled(
                format!("{}x{}", required_width, required_height),
                Style::default().fg(colors().accent),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Please resize your terminal",
            Style::default().fg(colors().text_muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors().warning)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_chips_cover_every_kind() {
        let chips = facet_chips();
        assert_eq!(chips.len(), 1 + ItemKind::ALL.len());
        assert_eq!(chips[0], (None, "All"));
        assert_eq!(chips[1], (Some(ItemKind::Slash), "Slash"));
    }

    #[test]
    fn test_facet_hit_test_matches_chip_layout() {
        // " All " occupies columns 0..5, then a gap at 5.
        assert_eq!(facet_chip_at(0), Some(None));
        assert_eq!(facet_chip_at(4), Some(None));
        assert_eq!(facet_chip_at(5), None);
        // " Slash " starts at column 6.
        assert_eq!(facet_chip_at(6), Some(Some(ItemKind::Slash)));
        assert_eq!(facet_chip_at(12), Some(Some(ItemKind::Slash)));
        assert_eq!(facet_chip_at(13), None);
    }

    #[test]
    fn test_facet_hit_test_past_the_last_chip() {
        assert_eq!(facet_chip_at(200), None);
    }

    #[test]
    fn test_truncate_str_respects_display_width() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a longer string", 10), "a longe...");
        assert_eq!(truncate_str("abcdef", 3), "abc");
    }
}
