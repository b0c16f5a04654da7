//! Browse command handler.
//!
//! Opens the full-screen browser, optionally seeded with an initial
//! category, type facet, query, and theme from the command line.

use crate::error::ReferenceError;
use crate::model::{Dataset, ItemKind};
use crate::tui::{run_tui, set_theme, App, Theme};
use anyhow::{bail, Result};
use std::io::IsTerminal;

/// Options for the `browse` command.
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Open scoped to a category (case-insensitive name)
    pub category: Option<String>,
    /// Open with a type facet active
    pub kind: Option<String>,
    /// Open with a query pre-filled
    pub query: Option<String>,
    /// Interpret the initial query as a regular expression
    pub use_regex: bool,
    /// Match exact letter case
    pub case_sensitive: bool,
    /// Initial color theme
    pub theme: Option<String>,
}

/// Run the browse command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_browse(options: BrowseOptions) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("Interactive browsing needs a terminal. Use `ccref search <QUERY>` in pipelines.");
    }

    if let Some(name) = &options.theme {
        set_theme(Theme::from_name(name));
    }

    let mut app = App::new();
    seed_app(&mut app, &options)?;

    if options.category.is_some() || options.kind.is_some() || options.query.is_some() {
        tracing::info!(
            "Opening with {} of {} items visible",
            app.visible.len(),
            Dataset::builtin().total_items()
        );
    }

    run_tui(&mut app)?;
    Ok(())
}

/// Apply the initial-state flags to a fresh `App`.
///
/// The category is applied before the query because selecting a category
/// resets the search box, same as a sidebar click would.
fn seed_app(app: &mut App, options: &BrowseOptions) -> crate::error::Result<()> {
    let dataset = Dataset::builtin();

    if let Some(name) = &options.category {
        let index = dataset
            .category_index(name)
            .ok_or_else(|| ReferenceError::unknown_category(name))?;
        app.select_sidebar_row(index + 1);
    }

    if let Some(name) = &options.kind {
        let kind = ItemKind::from_name(name)
            .ok_or_else(|| ReferenceError::unknown_kind(name, ItemKind::valid_names()))?;
        app.set_facet(Some(kind));
    }

    if let Some(query) = &options.query {
        app.filter.query = query.clone();
    }
    app.filter.use_regex = options.use_regex;
    app.filter.case_sensitive = options.case_sensitive;
    app.refresh();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_app_scopes_and_queries() {
        let mut app = App::new();
        let options = BrowseOptions {
            category: Some("hooks".to_string()),
            kind: Some("hook".to_string()),
            query: Some("bash".to_string()),
            ..BrowseOptions::default()
        };

        seed_app(&mut app, &options).unwrap();

        let dataset = Dataset::builtin();
        let index = dataset.category_index("hooks").unwrap();
        assert_eq!(app.filter.category, Some(index));
        assert_eq!(app.filter.kind, Some(ItemKind::Hook));
        assert_eq!(app.filter.query, "bash");
        for row in &app.visible {
            assert_eq!(row.item.kind, ItemKind::Hook);
        }
    }

    #[test]
    fn test_seed_app_rejects_unknown_names() {
        let mut app = App::new();
        let options = BrowseOptions {
            category: Some("nope".to_string()),
            ..BrowseOptions::default()
        };
        assert!(seed_app(&mut app, &options).is_err());

        let mut app = App::new();
        let options = BrowseOptions {
            kind: Some("nope".to_string()),
            ..BrowseOptions::default()
        };
        assert!(seed_app(&mut app, &options).is_err());
    }

    #[test]
    fn test_seed_app_defaults_touch_nothing() {
        let mut app = App::new();
        seed_app(&mut app, &BrowseOptions::default()).unwrap();

        assert_eq!(app.filter.category, None);
        assert_eq!(app.filter.kind, None);
        assert!(app.filter.query.is_empty());
        assert_eq!(app.visible.len(), Dataset::builtin().total_items());
    }
}
