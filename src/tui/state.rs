//! Cursor state for scrollable lists.
//!
//! Both the category sidebar and the result list track their position
//! with a [`ListCursor`]. The cursor owns the scroll offset so a redraw
//! can window the underlying rows without any widget-side state.

/// Items moved by one page scroll
pub const PAGE_SIZE: usize = 10;

/// Selection plus scroll window over a list of `total` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub total: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn new(total: usize) -> Self {
        Self {
            selected: 0,
            total,
            offset: 0,
        }
    }

    /// Replace the row count, clamping the selection into range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.total > 0 && self.selected + 1 < self.total {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        if self.total > 0 {
            self.selected = (self.selected + PAGE_SIZE).min(self.total - 1);
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.total.saturating_sub(1);
    }

    /// Scroll the window so the selection is visible within `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
        // Pull the window back up if the list shrank under it.
        let max_offset = self.total.saturating_sub(height);
        if self.offset > max_offset {
            self.offset = max_offset;
        }
    }
}
