//! **A terminal reference browser for Claude Code commands and shortcuts.**
//!
//! `ccref` bundles the complete Claude Code quick reference (slash commands,
//! keyboard shortcuts, CLI flags, vim bindings, hooks, thinking keywords, and
//! more) into a single binary. It ships a full-screen interactive browser
//! plus `search` and `list` subcommands that run the same filter engine
//! non-interactively for shell pipelines.
//!
//! The dataset is compiled in: no config files, no network, no startup
//! parsing. Everything is browsable the moment the process starts.
//!
//! ## Key Features
//!
//! - **Instant search**: case-folded substring matching across commands,
//!   descriptions, examples, and tags, with optional regular expressions.
//!   A malformed regex silently degrades to a literal search instead of
//!   erroring, so typing `(` mid-pattern never breaks the view.
//! - **Category sidebar**: 19 curated categories from Conversation
//!   Management to Custom Commands, each with an icon and description.
//! - **Type facets**: one-click chips narrowing the view to a single kind
//!   of entry (keyboard shortcut, CLI flag, hook, ...).
//! - **Match highlighting**: every hit is emphasized in the result list and
//!   the detail panel using the same matcher that filtered it.
//! - **Scriptable CLI**: `ccref search <QUERY>` prints an aligned table or
//!   JSON and exits non-zero when nothing matched, grep-style.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the static dataset. [`Dataset::builtin()`] returns the
//!   compiled-in categories and items; `flatten()` produces the ordered
//!   all-items view with category annotations.
//! - **[`filter`]**: the engine. [`visible_items`] applies category scope,
//!   kind facet, and query in a fixed order and preserves dataset order;
//!   [`highlight_spans`] turns match positions into styled spans.
//! - **[`tui`]**: the full-screen browser built on ratatui. [`App`] holds
//!   all interactive state and re-renders from scratch on every event.
//! - **[`cli`]**: testable handlers for the `browse`, `search`, and `list`
//!   subcommands, invoked by the binary.
//!
//! ## Getting Started: Querying the Dataset
//!
//! The filter engine is a pure function over the built-in dataset, so it can
//! be used directly as a library:
//!
//! ```
//! use ccref::filter::{visible_items, FilterState};
//! use ccref::model::Dataset;
//!
//! let filter = FilterState {
//!     query: "vim".to_string(),
//!     ..FilterState::default()
//! };
//!
//! for row in visible_items(Dataset::builtin(), &filter) {
//!     println!("{}  ({})", row.item.command, row.category_name);
//! }
//! ```
//!
//! ### Facets and Regular Expressions
//!
//! ```
//! use ccref::filter::{visible_items, FilterState};
//! use ccref::model::{Dataset, ItemKind};
//!
//! let filter = FilterState {
//!     kind: Some(ItemKind::Keyboard),
//!     query: r"ctrl\+[a-z]".to_string(),
//!     use_regex: true,
//!     ..FilterState::default()
//! };
//!
//! let rows = visible_items(Dataset::builtin(), &filter);
//! assert!(rows.iter().all(|r| r.item.kind == ItemKind::Keyboard));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `ccref` library crate. If you are looking
//! for the terminal tool, run `ccref` with no arguments to open the browser,
//! or see `ccref --help` for the non-interactive subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize<->u16 casts are pervasive in TUI layout math and
    // every value is bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long and read best in one piece
    clippy::too_many_lines,
    // Filter state and option structs legitimately use bools as toggle flags
    clippy::struct_excessive_bools
)]

pub mod cli;
pub mod error;
pub mod filter;
pub mod model;
pub mod tui;

// Re-export main types for convenience
pub use error::{ErrorContext, ReferenceError, Result};
pub use filter::{highlight_spans, visible_items, FilterState, QueryMatcher};
pub use model::{Category, Dataset, FlatItem, Item, ItemKind};
pub use tui::{run_tui, App, ListCursor, Theme};
