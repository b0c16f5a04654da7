//! Application state for the TUI.

use crate::filter::{visible_items, FilterState, QueryMatcher};
use crate::model::{Dataset, FlatItem, ItemKind};
use crate::tui::clipboard::copy_to_clipboard;
use crate::tui::state::ListCursor;

/// Main application state for the reference browser.
///
/// Owns the filter controls, the rows they currently produce, and the
/// cursors over the sidebar and result list. Every filter mutation goes
/// through [`App::refresh`] so `visible` never goes stale.
pub struct App {
    pub(crate) dataset: &'static Dataset,
    pub(crate) filter: FilterState,
    pub(crate) visible: Vec<FlatItem<'static>>,

    /// Cursor over the sidebar rows (`All Commands` plus one per category).
    pub(crate) sidebar: ListCursor,
    /// Cursor over the filtered result list.
    pub(crate) items: ListCursor,

    pub(crate) input_focused: bool,
    pub(crate) show_help: bool,
    pub(crate) should_quit: bool,

    /// Transient status message shown in the footer instead of the hints.
    pub(crate) status_message: Option<String>,
    /// When set, the status message survives one extra keypress.
    pub(crate) status_sticky: bool,

    // Viewport heights from the last draw, for mouse hit-testing.
    pub(crate) sidebar_viewport: u16,
    pub(crate) list_viewport: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let dataset = Dataset::builtin();
        let filter = FilterState::default();
        let visible = visible_items(dataset, &filter);
        let items = ListCursor::new(visible.len());
        let sidebar = ListCursor::new(1 + dataset.categories.len());

        Self {
            dataset,
            filter,
            visible,
            sidebar,
            items,
            input_focused: false,
            show_help: false,
            should_quit: false,
            status_message: None,
            status_sticky: false,
            sidebar_viewport: 0,
            list_viewport: 0,
        }
    }

    /// Recompute the visible rows after a filter change.
    ///
    /// The result cursor jumps back to the top, matching how the list
    /// rebuilds whenever the query, facet, or category changes.
    pub(crate) fn refresh(&mut self) {
        self.visible = visible_items(self.dataset, &self.filter);
        self.items.set_total(self.visible.len());
        self.items.select_first();
        self.items.offset = 0;
    }

    pub(crate) fn selected_item(&self) -> Option<&FlatItem<'static>> {
        self.visible.get(self.items.selected)
    }

    pub(crate) fn matcher(&self) -> QueryMatcher {
        self.filter.matcher()
    }

    // ------------------------------------------------------------------
    // Category scope
    // ------------------------------------------------------------------

    /// Select a sidebar row. Row 0 is `All Commands`, row N is category N-1.
    pub(crate) fn select_sidebar_row(&mut self, row: usize) {
        if row >= self.sidebar.total {
            return;
        }
        self.sidebar.selected = row;
        let category = if row == 0 { None } else { Some(row - 1) };
        self.filter.select_category(category);
        self.refresh();
    }

    pub(crate) fn next_category(&mut self) {
        let row = (self.sidebar.selected + 1) % self.sidebar.total;
        self.select_sidebar_row(row);
    }

    pub(crate) fn previous_category(&mut self) {
        let row = if self.sidebar.selected == 0 {
            self.sidebar.total - 1
        } else {
            self.sidebar.selected - 1
        };
        self.select_sidebar_row(row);
    }

    // ------------------------------------------------------------------
    // Kind facet
    // ------------------------------------------------------------------

    /// Toggle a facet chip: activating a kind, or back to `All` when it
    /// was already active. `None` always resets to `All`.
    pub(crate) fn set_facet(&mut self, kind: Option<ItemKind>) {
        match kind {
            Some(k) => self.filter.toggle_kind(k),
            None => self.filter.kind = None,
        }
        self.refresh();
    }

    /// Step the facet through `All -> Slash -> ... -> Custom -> All`.
    pub(crate) fn cycle_facet(&mut self, backwards: bool) {
        let position = self
            .filter
            .kind
            .and_then(|kind| ItemKind::ALL.iter().position(|&k| k == kind));

        let next = if backwards {
            match position {
                None => ItemKind::ALL.last().copied(),
                Some(0) => None,
                Some(p) => Some(ItemKind::ALL[p - 1]),
            }
        } else {
            match position {
                None => ItemKind::ALL.first().copied(),
                Some(p) if p + 1 < ItemKind::ALL.len() => Some(ItemKind::ALL[p + 1]),
                Some(_) => None,
            }
        };

        self.filter.kind = next;
        self.refresh();
    }

    // ------------------------------------------------------------------
    // Query editing
    // ------------------------------------------------------------------

    pub(crate) fn push_query_char(&mut self, c: char) {
        self.filter.query.push(c);
        self.refresh();
    }

    pub(crate) fn pop_query_char(&mut self) {
        self.filter.query.pop();
        self.refresh();
    }

    pub(crate) fn clear_query(&mut self) {
        if self.filter.has_query() {
            self.filter.clear_query();
            self.refresh();
        }
    }

    pub(crate) fn toggle_regex(&mut self) {
        self.filter.use_regex = !self.filter.use_regex;
        self.refresh();
        let state = if self.filter.use_regex { "on" } else { "off" };
        self.set_status_message(format!("Regex matching {}", state));
    }

    pub(crate) fn toggle_case(&mut self) {
        self.filter.case_sensitive = !self.filter.case_sensitive;
        self.refresh();
        let state = if self.filter.case_sensitive {
            "sensitive"
        } else {
            "insensitive"
        };
        self.set_status_message(format!("Case {}", state));
    }

    // ------------------------------------------------------------------
    // Result list navigation
    // ------------------------------------------------------------------

    pub(crate) fn select_down(&mut self) {
        self.items.select_next();
    }

    pub(crate) fn select_up(&mut self) {
        self.items.select_previous();
    }

    pub(crate) fn page_down(&mut self) {
        self.items.page_down();
    }

    pub(crate) fn page_up(&mut self) {
        self.items.page_up();
    }

    pub(crate) fn select_first(&mut self) {
        self.items.select_first();
    }

    pub(crate) fn select_last(&mut self) {
        self.items.select_last();
    }

    // ------------------------------------------------------------------
    // Clipboard
    // ------------------------------------------------------------------

    /// Copy the selected command to the system clipboard.
    pub(crate) fn copy_selected(&mut self) {
        let Some(row) = self.selected_item() else {
            return;
        };
        let command = row.item.command.clone();

        if copy_to_clipboard(&command) {
            self.set_status_message(format!("Copied: {}", command));
        } else {
            self.set_sticky_status("Clipboard unavailable".to_string());
        }
    }

    // ------------------------------------------------------------------
    // Overlays and status
    // ------------------------------------------------------------------

    pub(crate) const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub(crate) const fn has_overlay(&self) -> bool {
        self.show_help
    }

    pub(crate) const fn close_overlays(&mut self) {
        self.show_help = false;
    }

    pub(crate) fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_sticky = false;
    }

    /// Set a status message that survives the next keypress.
    pub(crate) fn set_sticky_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_sticky = true;
    }

    /// Clear the transient status message.
    ///
    /// Sticky messages get one reprieve so the user sees them even when
    /// the triggering key is followed immediately by another.
    pub(crate) fn clear_status_message(&mut self) {
        if self.status_sticky {
            self.status_sticky = false;
        } else {
            self.status_message = None;
        }
    }

    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Status line summarizing the current result set and scope.
    pub(crate) fn status_line(&self) -> String {
        let category = match self.filter.category {
            Some(idx) => self
                .dataset
                .categories
                .get(idx)
                .map_or("All", |c| c.name.as_str()),
            None => "All",
        };

        let mut status = format!("Showing {} items", self.visible.len());
        let query = self.filter.query.trim();
        if !query.is_empty() {
            status.push_str(&format!(" matching '{}'", query));
        }
        status.push_str(&format!(" | Category: {}", category));
        status.push_str(" | Ctrl+F: Search | Ctrl+Q: Quit");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_shows_everything() {
        let app = App::new();
        assert_eq!(app.visible.len(), app.dataset.total_items());
        assert_eq!(app.sidebar.total, 1 + app.dataset.categories.len());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_status_line_default() {
        let app = App::new();
        assert_eq!(
            app.status_line(),
            format!(
                "Showing {} items | Category: All | Ctrl+F: Search | Ctrl+Q: Quit",
                app.dataset.total_items()
            )
        );
    }

    #[test]
    fn test_status_line_mentions_query_and_category() {
        let mut app = App::new();
        app.select_sidebar_row(1);
        for c in "clear".chars() {
            app.push_query_char(c);
        }

        let status = app.status_line();
        assert!(status.contains("matching 'clear'"));
        assert!(status.contains(&format!(
            "| Category: {}",
            app.dataset.categories[0].name
        )));
        assert!(status.ends_with("| Ctrl+F: Search | Ctrl+Q: Quit"));
    }

    #[test]
    fn test_category_change_clears_the_query() {
        let mut app = App::new();
        app.push_query_char('x');
        assert!(app.filter.has_query());

        app.select_sidebar_row(3);
        assert!(!app.filter.has_query());
        assert_eq!(app.filter.category, Some(2));
        assert_eq!(app.items.selected, 0);
    }

    #[test]
    fn test_sidebar_row_zero_is_all_commands() {
        let mut app = App::new();
        app.select_sidebar_row(2);
        assert_eq!(app.filter.category, Some(1));

        app.select_sidebar_row(0);
        assert_eq!(app.filter.category, None);
        assert_eq!(app.visible.len(), app.dataset.total_items());
    }

    #[test]
    fn test_category_stepping_wraps_through_all() {
        let mut app = App::new();
        app.previous_category();
        assert_eq!(
            app.filter.category,
            Some(app.dataset.categories.len() - 1)
        );

        app.next_category();
        assert_eq!(app.filter.category, None);
        assert_eq!(app.sidebar.selected, 0);
    }

    #[test]
    fn test_cycle_facet_wraps_both_ways() {
        let mut app = App::new();
        assert_eq!(app.filter.kind, None);

        app.cycle_facet(false);
        assert_eq!(app.filter.kind, Some(ItemKind::Slash));

        app.cycle_facet(true);
        assert_eq!(app.filter.kind, None);

        app.cycle_facet(true);
        assert_eq!(app.filter.kind, Some(ItemKind::Custom));

        app.cycle_facet(false);
        assert_eq!(app.filter.kind, None);
    }

    #[test]
    fn test_set_facet_toggles_the_active_chip_off() {
        let mut app = App::new();
        app.set_facet(Some(ItemKind::Vim));
        assert_eq!(app.filter.kind, Some(ItemKind::Vim));

        app.set_facet(Some(ItemKind::Vim));
        assert_eq!(app.filter.kind, None);

        app.set_facet(Some(ItemKind::Hook));
        app.set_facet(None);
        assert_eq!(app.filter.kind, None);
    }

    #[test]
    fn test_query_editing_refreshes_rows() {
        let mut app = App::new();
        for c in "vim".chars() {
            app.push_query_char(c);
        }
        assert!(app.visible.len() < app.dataset.total_items());
        assert_eq!(app.items.total, app.visible.len());

        app.pop_query_char();
        app.pop_query_char();
        app.pop_query_char();
        assert_eq!(app.visible.len(), app.dataset.total_items());
    }

    #[test]
    fn test_sticky_status_survives_one_clear() {
        let mut app = App::new();
        app.set_sticky_status("held".to_string());

        app.clear_status_message();
        assert_eq!(app.status_message.as_deref(), Some("held"));

        app.clear_status_message();
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_plain_status_clears_immediately() {
        let mut app = App::new();
        app.set_status_message("gone".to_string());
        app.clear_status_message();
        assert_eq!(app.status_message, None);
    }
}
