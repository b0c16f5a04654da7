//! Interactive terminal UI using ratatui.
//!
//! The browser keeps the whole reference dataset in memory and re-runs
//! the filter on every query edit, so everything renders from a single
//! [`App`] snapshot per frame. Events flow crossterm -> [`events`] ->
//! [`App`] mutations -> next draw.

mod app;
pub(crate) mod clipboard;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod theme;
mod ui;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

// Shared state exports
pub use state::ListCursor;

pub use app::App;
pub use events::Event;
pub use ui::run_tui;
