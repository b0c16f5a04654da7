//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod browse;
mod list;
mod output;
mod search;

pub use browse::{run_browse, BrowseOptions};
pub use list::{run_list, ListOptions};
pub use output::{should_use_color, OutputFormat};
pub use search::{run_search, SearchOptions};
