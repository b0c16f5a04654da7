//! Event handling for the TUI.
//!
//! Polls crossterm for key, mouse, and resize events and dispatches
//! them onto [`App`]. Key handling checks overlays first, then the
//! search box, then the global bindings.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;

use super::constants::{BODY_TOP, FACET_ROW, HEADER_HEIGHT, LIST_TOP, SIDEBAR_WIDTH};
use super::theme::toggle_theme;
use super::widgets::facet_chip_at;
use super::App;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (periodic redraw)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Clear any status message on key press
    app.clear_status_message();

    // Control chords work from anywhere, search box included.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => app.quit(),
            KeyCode::Char('f') => {
                app.close_overlays();
                app.input_focused = true;
            }
            _ => {}
        }
        return;
    }

    // Help overlay swallows everything except its own dismissal.
    if app.has_overlay() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_overlays(),
            _ => {}
        }
        return;
    }

    // Search box editing.
    if app.input_focused {
        match key.code {
            KeyCode::Esc => {
                // First press clears, second press leaves the box.
                if app.filter.has_query() {
                    app.clear_query();
                } else {
                    app.input_focused = false;
                }
            }
            KeyCode::Enter | KeyCode::Tab => app.input_focused = false,
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Up => app.select_up(),
            KeyCode::Down => app.select_down(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::PageDown => app.page_down(),
            KeyCode::Char(c) => app.push_query_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.clear_query(),
        KeyCode::Char('/') | KeyCode::Tab => app.input_focused = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Left | KeyCode::Char('[') => app.previous_category(),
        KeyCode::Right | KeyCode::Char(']') => app.next_category(),
        KeyCode::Char('f') => app.cycle_facet(false),
        KeyCode::Char('F') => app.cycle_facet(true),
        KeyCode::Char('r') => app.toggle_regex(),
        KeyCode::Char('c') => app.toggle_case(),
        KeyCode::Char('y') | KeyCode::Enter => app.copy_selected(),
        KeyCode::Char('T') => {
            let name = toggle_theme();
            app.set_status_message(format!("Theme: {}", name));
        }
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

/// Handle mouse events and update app state
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    // Clear status message on any mouse action
    app.clear_status_message();

    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_up(),
        MouseEventKind::ScrollDown => app.select_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let x = mouse.column;
            let y = mouse.row;

            // Close overlays on click
            if app.has_overlay() {
                app.close_overlays();
                return;
            }

            // Search box rows
            if (HEADER_HEIGHT..FACET_ROW).contains(&y) {
                app.input_focused = true;
                return;
            }

            // Facet chip row
            if y == FACET_ROW {
                if let Some(kind) = facet_chip_at(x) {
                    app.set_facet(kind);
                }
                return;
            }

            if y < BODY_TOP {
                return;
            }

            if x < SIDEBAR_WIDTH {
                // Sidebar rows start one row inside the border.
                if y > BODY_TOP {
                    let clicked = (y - BODY_TOP - 1) as usize;
                    if clicked < app.sidebar_viewport as usize {
                        let row = app.sidebar.offset + clicked;
                        if row < app.sidebar.total {
                            app.select_sidebar_row(row);
                        }
                    }
                }
            } else if y >= LIST_TOP {
                let clicked = (y - LIST_TOP) as usize;
                if clicked < app.list_viewport as usize {
                    let index = app.items.offset + clicked;
                    if index < app.visible.len() {
                        app.items.selected = index;
                        app.input_focused = false;
                    }
                }
            }
        }
        MouseEventKind::Down(MouseButton::Right) => {
            // Right-click closes overlays
            if app.has_overlay() {
                app.close_overlays();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_ctrl_q_quits_even_while_typing() {
        let mut app = App::new();
        app.input_focused = true;
        handle_key_event(&mut app, ctrl('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_f_focuses_the_search_box() {
        let mut app = App::new();
        app.show_help = true;
        handle_key_event(&mut app, ctrl('f'));
        assert!(app.input_focused);
        assert!(!app.show_help);
    }

    #[test]
    fn test_typing_edits_the_query_when_focused() {
        let mut app = App::new();
        app.input_focused = true;
        handle_key_event(&mut app, key(KeyCode::Char('v')));
        handle_key_event(&mut app, key(KeyCode::Char('i')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.filter.query, "vim");

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.filter.query, "vi");
    }

    #[test]
    fn test_escape_clears_then_leaves_the_box() {
        let mut app = App::new();
        app.input_focused = true;
        handle_key_event(&mut app, key(KeyCode::Char('x')));

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.filter.query, "");
        assert!(app.input_focused);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.input_focused);
    }

    #[test]
    fn test_escape_clears_a_pending_query_from_the_list() {
        let mut app = App::new();
        app.input_focused = true;
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.input_focused);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.filter.query, "");
        assert_eq!(app.visible.len(), app.dataset.total_items());
    }

    #[test]
    fn test_slash_focuses_and_q_quits_unfocused() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('/')));
        assert!(app.input_focused);

        // 'q' is now query text, not quit.
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.filter.query, "q");

        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Esc));
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_facet_and_category_keys() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter.kind, Some(ItemKind::Slash));
        handle_key_event(&mut app, key(KeyCode::Char('F')));
        assert_eq!(app.filter.kind, None);

        handle_key_event(&mut app, key(KeyCode::Right));
        assert_eq!(app.filter.category, Some(0));
        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.filter.category, None);
    }

    #[test]
    fn test_help_overlay_swallows_navigation() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);

        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.items.selected, 0);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_status_message_clears_on_the_next_keypress() {
        let mut app = App::new();
        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert!(app.status_message.is_some());

        handle_key_event(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_wheel_moves_the_selection() {
        let mut app = App::new();
        let wheel_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, wheel_down);
        assert_eq!(app.items.selected, 1);
    }

    #[test]
    fn test_click_selects_a_sidebar_row() {
        let mut app = App::new();
        app.sidebar_viewport = 14;

        // Two rows below the sidebar border: row index 1, first category.
        handle_mouse_event(&mut app, click(2, BODY_TOP + 2));
        assert_eq!(app.filter.category, Some(0));
        assert_eq!(app.sidebar.selected, 1);
    }

    #[test]
    fn test_click_on_a_facet_chip_toggles_it() {
        let mut app = App::new();
        // Column 6 is the first column of the Slash chip.
        handle_mouse_event(&mut app, click(6, FACET_ROW));
        assert_eq!(app.filter.kind, Some(ItemKind::Slash));

        handle_mouse_event(&mut app, click(6, FACET_ROW));
        assert_eq!(app.filter.kind, None);
    }

    #[test]
    fn test_click_selects_a_visible_list_row() {
        let mut app = App::new();
        app.list_viewport = 10;
        handle_mouse_event(&mut app, click(SIDEBAR_WIDTH + 4, LIST_TOP + 3));
        assert_eq!(app.items.selected, 3);
    }
}
