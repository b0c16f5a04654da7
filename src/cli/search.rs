//! Non-interactive search command handler.
//!
//! Runs the same filter pipeline as the browser and prints matches as an
//! aligned table or JSON, for shell pipelines and scripting.

use crate::cli::output::{auto_detect_format, write_output, OutputFormat, OutputTarget};
use crate::error::ReferenceError;
use crate::filter::{visible_items, FilterState};
use crate::model::{Dataset, ItemKind};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

// ============================================================================
// Options
// ============================================================================

/// Options for the `search` command.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Query text (or regex with `use_regex`)
    pub query: String,
    /// Interpret the query as a regular expression
    pub use_regex: bool,
    /// Match exact letter case
    pub case_sensitive: bool,
    /// Restrict to a single category by name
    pub category: Option<String>,
    /// Restrict to a single item type by name
    pub kind: Option<String>,
    /// Cap the number of printed matches
    pub limit: Option<usize>,
    /// Output format
    pub format: OutputFormat,
    /// Output file (stdout when None)
    pub output_file: Option<PathBuf>,
    /// Suppress the written-to-file notice
    pub quiet: bool,
}

// ============================================================================
// Result Types
// ============================================================================

/// A single matched reference item.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchMatch {
    pub command: String,
    pub kind: &'static str,
    pub category: String,
    pub description: String,
    pub example: String,
    pub tags: Vec<String>,
}

/// Full search result.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchReport {
    pub query: String,
    pub regex: bool,
    pub case_sensitive: bool,
    pub category: Option<String>,
    pub kind: Option<&'static str>,
    pub total_items: usize,
    pub matches: Vec<SearchMatch>,
}

impl SearchReport {
    /// One-line description of the active filters, for the table header.
    fn describe(&self) -> String {
        let mut parts = vec![format!("{:?}", self.query)];
        if self.regex {
            parts.push("regex".to_string());
        }
        if self.case_sensitive {
            parts.push("case-sensitive".to_string());
        }
        if let Some(category) = &self.category {
            parts.push(format!("category={category}"));
        }
        if let Some(kind) = self.kind {
            parts.push(format!("type={kind}"));
        }
        parts.join(", ")
    }
}

// ============================================================================
// Core Implementation
// ============================================================================

/// Run the search command.
///
/// Exits with code 1 when nothing matched, so scripts can branch on it.
#[allow(clippy::needless_pass_by_value)]
pub fn run_search(options: SearchOptions) -> Result<()> {
    let dataset = Dataset::builtin();
    let filter = resolve_filter(dataset, &options)?;
    let matches = collect_matches(dataset, &filter, options.limit);

    let report = SearchReport {
        query: options.query.clone(),
        regex: options.use_regex,
        case_sensitive: options.case_sensitive,
        category: options.category.clone(),
        kind: filter.kind.map(|k| k.label()),
        total_items: dataset.total_items(),
        matches,
    };

    let target = OutputTarget::from_option(options.output_file.clone());
    let format = auto_detect_format(options.format, &target);

    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        _ => format_table_output(&report),
    };

    write_output(&output, &target, options.quiet)?;

    // Exit code: 1 if no matches
    if report.matches.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolve category and type names into a `FilterState`.
fn resolve_filter(
    dataset: &Dataset,
    options: &SearchOptions,
) -> crate::error::Result<FilterState> {
    let category = match &options.category {
        Some(name) => Some(
            dataset
                .category_index(name)
                .ok_or_else(|| ReferenceError::unknown_category(name))?,
        ),
        None => None,
    };

    let kind = match &options.kind {
        Some(name) => Some(ItemKind::from_name(name).ok_or_else(|| {
            ReferenceError::unknown_kind(name, ItemKind::valid_names())
        })?),
        None => None,
    };

    Ok(FilterState {
        category,
        kind,
        query: options.query.clone(),
        use_regex: options.use_regex,
        case_sensitive: options.case_sensitive,
    })
}

/// Run the filter and build match records, in dataset order.
fn collect_matches(
    dataset: &Dataset,
    filter: &FilterState,
    limit: Option<usize>,
) -> Vec<SearchMatch> {
    let mut matches: Vec<SearchMatch> = visible_items(dataset, filter)
        .into_iter()
        .map(|row| SearchMatch {
            command: row.item.command.clone(),
            kind: row.item.kind.label(),
            category: row.category_name.to_string(),
            description: row.item.description.clone(),
            example: row.item.example.clone(),
            tags: row.item.tags.clone(),
        })
        .collect();

    if let Some(limit) = limit {
        matches.truncate(limit);
    }

    matches
}

// ============================================================================
// Output Formatting
// ============================================================================

/// Format results as a table for terminal output.
fn format_table_output(report: &SearchReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Search: {} ({} items total)\n\n",
        report.describe(),
        report.total_items
    ));

    if report.matches.is_empty() {
        out.push_str("0 items found\n");
        return out;
    }

    // Calculate column widths
    let cmd_w = report
        .matches
        .iter()
        .map(|m| m.command.chars().count())
        .max()
        .unwrap_or(7)
        .clamp(7, 34);
    let kind_w = report
        .matches
        .iter()
        .map(|m| m.kind.len())
        .max()
        .unwrap_or(4)
        .clamp(4, 8);
    let cat_w = report
        .matches
        .iter()
        .map(|m| m.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 24);

    // Header
    out.push_str(&format!(
        "{:<cmd_w$}  {:<kind_w$}  {:<cat_w$}  DESCRIPTION\n",
        "COMMAND", "TYPE", "CATEGORY",
    ));

    // Rows
    for m in &report.matches {
        let command = truncate(&m.command, cmd_w);
        let kind = truncate(m.kind, kind_w);
        let category = truncate(&m.category, cat_w);

        out.push_str(&format!(
            "{command:<cmd_w$}  {kind:<kind_w$}  {category:<cat_w$}  {}\n",
            m.description,
        ));
    }

    out.push_str(&format!(
        "\n{} of {} items matched\n",
        report.matches.len(),
        report.total_items
    ));

    out
}

/// Truncate a string to the given width, counting characters.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn options(query: &str) -> SearchOptions {
        SearchOptions {
            query: query.to_string(),
            ..SearchOptions::default()
        }
    }

    #[test]
    fn test_resolve_filter_rejects_unknown_category() {
        let dataset = Dataset::builtin();
        let mut opts = options("init");
        opts.category = Some("Nonsense".to_string());

        let err = resolve_filter(dataset, &opts).unwrap_err();
        assert!(err.to_string().contains("Unknown category"));
    }

    #[test]
    fn test_resolve_filter_rejects_unknown_kind() {
        let dataset = Dataset::builtin();
        let mut opts = options("");
        opts.kind = Some("widget".to_string());

        let err = resolve_filter(dataset, &opts).unwrap_err();
        assert!(err.to_string().contains("valid:"));
    }

    #[test]
    fn test_resolve_filter_accepts_mixed_case_names() {
        let dataset = Dataset::builtin();
        let mut opts = options("");
        opts.category = Some("conversation management".to_string());
        opts.kind = Some("SLASH".to_string());

        let filter = resolve_filter(dataset, &opts).unwrap();
        assert_eq!(filter.category, Some(0));
        assert_eq!(filter.kind, Some(ItemKind::Slash));
    }

    #[test]
    fn test_collect_matches_respects_limit() {
        let dataset = Dataset::builtin();
        let filter = FilterState::default();

        let all = collect_matches(dataset, &filter, None);
        let capped = collect_matches(dataset, &filter, Some(5));

        assert_eq!(all.len(), dataset.total_items());
        assert_eq!(capped.len(), 5);
        assert_eq!(capped[0].command, all[0].command);
    }

    #[test]
    fn test_collect_matches_keeps_dataset_order() {
        let dataset = Dataset::builtin();
        let filter = FilterState {
            query: "claude".to_string(),
            ..FilterState::default()
        };

        let matches = collect_matches(dataset, &filter, None);
        assert!(!matches.is_empty());

        let flat = dataset.flatten();
        let positions: Vec<usize> = matches
            .iter()
            .map(|m| {
                flat.iter()
                    .position(|row| row.item.command == m.command && row.category_name == m.category)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_table_output_mentions_matches_and_footer() {
        let report = SearchReport {
            query: "init".to_string(),
            regex: false,
            case_sensitive: false,
            category: None,
            kind: None,
            total_items: 112,
            matches: vec![SearchMatch {
                command: "/init".to_string(),
                kind: "slash",
                category: "Development Tools".to_string(),
                description: "Initialize project with CLAUDE.md guide".to_string(),
                example: "/init".to_string(),
                tags: vec!["init".to_string(), "project".to_string()],
            }],
        };

        let out = format_table_output(&report);
        assert!(out.contains("COMMAND"));
        assert!(out.contains("/init"));
        assert!(out.contains("1 of 112 items matched"));
    }

    #[test]
    fn test_table_output_for_no_matches() {
        let report = SearchReport {
            query: "zzz".to_string(),
            regex: false,
            case_sensitive: false,
            category: None,
            kind: None,
            total_items: 112,
            matches: Vec::new(),
        };

        let out = format_table_output(&report);
        assert!(out.contains("0 items found"));
    }

    #[test]
    fn test_describe_lists_active_filters() {
        let report = SearchReport {
            query: "foo".to_string(),
            regex: true,
            case_sensitive: true,
            category: Some("Hooks".to_string()),
            kind: Some("hook"),
            total_items: 112,
            matches: Vec::new(),
        };

        let described = report.describe();
        assert!(described.contains("\"foo\""));
        assert!(described.contains("regex"));
        assert!(described.contains("case-sensitive"));
        assert!(described.contains("category=Hooks"));
        assert!(described.contains("type=hook"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a-very-long-command-name", 10), "a-very-...");
        assert_eq!(truncate("ab", 2), "ab");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // Multi-byte input must not split inside a code point.
        assert_eq!(truncate("→→→→→→→→", 5), "→→...");
    }
}
