//! Named constants for TUI layout and mouse hit-testing.
//!
//! The main screen uses fixed-height chrome rows, so the event handlers
//! can translate click coordinates without re-running the layout.

/// Rows taken by the header block.
pub(crate) const HEADER_HEIGHT: u16 = 2;

/// Rows taken by the bordered search box.
pub(crate) const SEARCH_HEIGHT: u16 = 3;

/// Screen row of the kind facet chips.
pub(crate) const FACET_ROW: u16 = HEADER_HEIGHT + SEARCH_HEIGHT;

/// First screen row of the sidebar/content body.
pub(crate) const BODY_TOP: u16 = FACET_ROW + 1;

/// Columns taken by the category sidebar, border included.
pub(crate) const SIDEBAR_WIDTH: u16 = 28;

/// Rows taken by the content heading above the result list.
pub(crate) const HEADING_HEIGHT: u16 = 2;

/// First screen row of the result list.
pub(crate) const LIST_TOP: u16 = BODY_TOP + HEADING_HEIGHT;

/// Rows taken by the detail panel under the result list.
pub(crate) const DETAIL_HEIGHT: u16 = 7;
