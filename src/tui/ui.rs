//! Main UI rendering and the terminal run loop.

use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::theme::{colors, kind_badge, render_footer_hints, toggle_badge, FooterHints, Styles};
use super::widgets::{
    check_terminal_size, facet_chip_spans, render_detail_panel, render_empty_state, render_popup,
    render_size_warning, truncate_str, MIN_HEIGHT, MIN_WIDTH,
};
use crate::filter::highlight_spans;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io::{self, stdout};
use unicode_width::UnicodeWidthStr;

/// Search box placeholder, shown while the query is empty.
const SEARCH_PLACEHOLDER: &str = "Search commands, shortcuts, descriptions... (Ctrl+F)";

/// Run the TUI application
pub fn run_tui(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Event handler
    let events = EventHandler::default();

    // Main loop
    loop {
        // Render
        terminal.draw(|frame| render(frame, app))?;

        // Handle events
        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            // Resize and tick just fall through to the next draw
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Main render function
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, search, facet row, body, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Kind facet chips
            Constraint::Min(9),    // Sidebar + content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_search_box(frame, chunks[1], app);
    render_facet_row(frame, chunks[2], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(super::constants::SIDEBAR_WIDTH),
            Constraint::Min(40),
        ])
        .split(chunks[3]);

    render_sidebar(frame, body[0], app);

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(super::constants::HEADING_HEIGHT),
            Constraint::Min(5),
            Constraint::Length(super::constants::DETAIL_HEIGHT),
        ])
        .split(body[1]);

    render_heading(frame, content[0], app);
    render_list(frame, content[1], app);
    render_detail(frame, content[2], app);

    render_status_bar(frame, chunks[4], app);
    render_footer(frame, chunks[5], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("ccref", Styles::header_title()),
            Span::styled(" │ ", Style::default().fg(colors().muted)),
            Span::styled("Claude Code Reference", Styles::text()),
        ]),
        Line::from(Span::styled(
            "All commands, shortcuts & keyboard bindings",
            Styles::text_muted().italic(),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search_box(frame: &mut Frame, area: Rect, app: &App) {
    let border = if app.input_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let toggles = Line::from(vec![
        toggle_badge("re", app.filter.use_regex),
        Span::raw(" "),
        toggle_badge("Aa", app.filter.case_sensitive),
        Span::raw(" "),
    ])
    .right_aligned();

    let block = Block::default()
        .title(" Search ")
        .title_top(toggles)
        .borders(Borders::ALL)
        .border_style(border);

    let mut spans = vec![Span::styled("/ ", Style::default().fg(colors().primary))];
    if app.filter.query.is_empty() && !app.input_focused {
        spans.push(Span::styled(
            SEARCH_PLACEHOLDER,
            Styles::text_muted().italic(),
        ));
    } else {
        spans.push(Span::styled(app.filter.query.clone(), Styles::text()));
        if app.input_focused {
            spans.push(Span::styled("│", Style::default().fg(colors().accent)));
        }
    }

    let search = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(search, area);
}

fn render_facet_row(frame: &mut Frame, area: Rect, app: &App) {
    let chips = Paragraph::new(Line::from(facet_chip_spans(app.filter.kind)));
    frame.render_widget(chips, area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &mut App) {
    let inner_height = area.height.saturating_sub(2);
    let inner_width = area.width.saturating_sub(2) as usize;
    app.sidebar_viewport = inner_height;
    app.sidebar.ensure_visible(inner_height as usize);

    let block = Block::default()
        .title(" Categories ")
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} items ", app.dataset.total_items()),
                Styles::text_muted(),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let mut lines = Vec::with_capacity(inner_height as usize);
    for row in app.sidebar.offset..app.sidebar.total {
        if lines.len() == inner_height as usize {
            break;
        }

        let (label, count) = if row == 0 {
            ("All Commands".to_string(), app.dataset.total_items())
        } else {
            let category = &app.dataset.categories[row - 1];
            (
                format!("{} {}", category.icon, category.name),
                category.items.len(),
            )
        };

        let style = if row == app.sidebar.selected {
            Styles::selected()
        } else if row == 0 {
            Styles::text()
        } else {
            Styles::text_muted()
        };

        lines.push(sidebar_line(&label, count, inner_width, style));
    }

    let sidebar = Paragraph::new(lines).block(block);
    frame.render_widget(sidebar, area);
}

/// One sidebar row: padded label on the left, item count on the right.
fn sidebar_line(label: &str, count: usize, width: usize, style: Style) -> Line<'static> {
    let count_text = count.to_string();
    let label = truncate_str(label, width.saturating_sub(count_text.len() + 3));
    let gap = width.saturating_sub(UnicodeWidthStr::width(label.as_str()) + count_text.len() + 2);

    Line::styled(
        format!(" {}{}{} ", label, " ".repeat(gap), count_text),
        style,
    )
}

fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let (title, description) = match app.filter.category {
        Some(idx) => {
            let category = &app.dataset.categories[idx];
            (
                format!("{} {}", category.icon, category.name),
                category.description.clone(),
            )
        }
        None => (
            "All Commands".to_string(),
            "Browse all Claude Code commands and shortcuts".to_string(),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(title, Styles::section_title())),
        Line::from(Span::styled(description, Styles::text_muted())),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &mut App) {
    app.list_viewport = area.height;
    app.items.ensure_visible(area.height as usize);

    if app.visible.is_empty() {
        render_empty_state(
            frame,
            area,
            "No matching commands found.",
            Some("Try a different search term or category."),
        );
        return;
    }

    let matcher = app.matcher();
    let width = area.width as usize;
    let mut lines = Vec::with_capacity(area.height as usize);

    for (i, row) in app
        .visible
        .iter()
        .enumerate()
        .skip(app.items.offset)
        .take(area.height as usize)
    {
        let item = row.item;
        let is_selected = i == app.items.selected;

        let mut command_style = Style::default().fg(colors().kind_color(item.kind)).bold();
        let mut emphasis = Styles::match_emphasis();
        if is_selected {
            command_style = command_style.bg(colors().selection);
            emphasis = emphasis.bold();
        }

        let mut spans = vec![if is_selected {
            Span::styled("▶ ", Style::default().fg(colors().accent))
        } else {
            Span::raw("  ")
        }];
        spans.extend(highlight_spans(&item.command, &matcher, command_style, emphasis));

        // Fit as much of the description as the row has room for.
        let used = 2 + UnicodeWidthStr::width(item.command.as_str());
        let remaining = width.saturating_sub(used + 2);
        if remaining >= 8 {
            let description = truncate_str(&item.description, remaining);
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                description,
                if is_selected {
                    Styles::selected()
                } else {
                    Styles::text_muted()
                },
            ));
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(row) = app.selected_item() else {
        render_detail_panel(
            frame,
            area,
            "Details",
            vec![Line::from(Span::styled(
                "Nothing selected",
                Styles::text_muted(),
            ))],
            colors().border,
        );
        return;
    };

    let item = row.item;
    let matcher = app.matcher();
    let emphasis = Styles::match_emphasis();

    let mut command_line = highlight_spans(&item.command, &matcher, Styles::value(), emphasis);
    command_line.push(Span::raw("  "));
    command_line.push(kind_badge(item.kind));

    let mut lines = vec![
        Line::from(command_line),
        Line::from(vec![
            Span::styled("Category: ", Styles::label()),
            Span::styled(
                format!("{} {}", row.category_icon, row.category_name),
                Styles::text_muted(),
            ),
        ]),
        Line::from(highlight_spans(
            &item.description,
            &matcher,
            Styles::text(),
            emphasis,
        )),
    ];

    if !item.example.is_empty() {
        let mut example = vec![Span::styled("e.g. ", Styles::label())];
        example.extend(highlight_spans(
            &item.example,
            &matcher,
            Styles::text_muted().italic(),
            emphasis,
        ));
        lines.push(Line::from(example));
    }

    if !item.tags.is_empty() {
        let mut tags = vec![Span::styled("Tags: ", Styles::label())];
        for (i, tag) in item.tags.iter().enumerate() {
            if i > 0 {
                tags.push(Span::raw(" "));
            }
            tags.extend(highlight_spans(
                tag,
                &matcher,
                Style::default().fg(colors().accent),
                emphasis,
            ));
        }
        lines.push(Line::from(tags));
    }

    render_detail_panel(frame, area, "Details", lines, colors().kind_color(item.kind));
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(Line::from(Span::styled(
        format!(" {}", app.status_line()),
        Styles::text(),
    )))
    .style(Styles::status_bar());

    frame.render_widget(status, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise show context hints
    if let Some(ref msg) = app.status_message {
        // Sticky messages are failures (clipboard unavailable and the like)
        let (glyph, style) = if app.status_sticky {
            ("⚠ ", Styles::error())
        } else {
            ("ℹ ", Styles::success())
        };
        let status_line = Line::from(vec![
            Span::styled(glyph, style),
            Span::styled(msg.clone(), style.bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = if app.input_focused {
        FooterHints::search_focused()
    } else {
        FooterHints::browse()
    };

    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Styles::text_muted());

    frame.render_widget(footer, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let key_style = Style::default().fg(colors().accent);
    let text_style = Styles::text();
    let section_style = Style::default().fg(colors().primary).bold();

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", key), key_style),
            Span::styled(desc, text_style),
        ])
    };

    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        Line::from(Span::styled("Search", section_style)),
        entry("/ or Ctrl+F", "Focus the search box"),
        entry("Esc", "Clear the query, then leave the box"),
        entry("r", "Toggle regex matching"),
        entry("c", "Toggle case sensitivity"),
        Line::from(""),
        Line::from(Span::styled("Filters", section_style)),
        entry("f / F", "Cycle kind filter forward / back"),
        entry("←→ or [ ]", "Previous / next category"),
        entry("mouse", "Click chips and categories directly"),
        Line::from(""),
        Line::from(Span::styled("Navigation", section_style)),
        entry("↑↓ or j/k", "Move selection"),
        entry("PgUp/PgDn", "Page up / down"),
        entry("Home/End, g/G", "Jump to start / end"),
        entry("Tab", "Jump between search box and list"),
        Line::from(""),
        Line::from(Span::styled("Actions", section_style)),
        entry("y / Enter", "Copy selected command to clipboard"),
        entry("T", "Toggle theme (dark/light/high-contrast)"),
        entry("?", "Toggle this help"),
        entry("q / Ctrl+Q", "Quit"),
        Line::from(""),
        Line::styled(
            "Press Esc to close",
            Style::default().fg(colors().text_muted),
        ),
    ];

    render_popup(frame, area, "Help", help_text, 65, 80, colors().accent);
}
