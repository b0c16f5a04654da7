//! Dataset overview command handler.
//!
//! Prints the category table (or the kind facet totals with `--kinds`)
//! as text or JSON.

use crate::cli::output::{auto_detect_format, write_output, OutputFormat, OutputTarget};
use crate::model::{Dataset, ItemKind};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Options for the `list` command.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// List the kind facets with per-kind totals instead of categories
    pub kinds: bool,
    /// Output format
    pub format: OutputFormat,
    /// Output file (stdout when None)
    pub output_file: Option<PathBuf>,
    /// Suppress the written-to-file notice
    pub quiet: bool,
}

/// One category overview row.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CategoryRow {
    pub name: String,
    pub icon: String,
    pub items: usize,
    pub description: String,
}

/// Category overview.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CategoryReport {
    pub total_items: usize,
    pub categories: Vec<CategoryRow>,
}

/// One kind facet row.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct KindRow {
    pub kind: &'static str,
    pub items: usize,
}

/// Kind facet overview.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct KindReport {
    pub total_items: usize,
    pub kinds: Vec<KindRow>,
}

/// Run the list command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_list(options: ListOptions) -> Result<()> {
    let dataset = Dataset::builtin();
    let target = OutputTarget::from_option(options.output_file.clone());
    let format = auto_detect_format(options.format, &target);

    let output = if options.kinds {
        let report = kind_report(dataset);
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            _ => format_kind_table(&report),
        }
    } else {
        let report = category_report(dataset);
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)?,
            _ => format_category_table(&report),
        }
    };

    write_output(&output, &target, options.quiet)?;
    Ok(())
}

/// Build the category overview in dataset order.
fn category_report(dataset: &Dataset) -> CategoryReport {
    let categories = dataset
        .categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            icon: c.icon.clone(),
            items: c.items.len(),
            description: c.description.clone(),
        })
        .collect();

    CategoryReport {
        total_items: dataset.total_items(),
        categories,
    }
}

/// Build the per-kind totals in facet order.
fn kind_report(dataset: &Dataset) -> KindReport {
    let flat = dataset.flatten();
    let kinds = ItemKind::ALL
        .iter()
        .map(|&kind| KindRow {
            kind: kind.label(),
            items: flat.iter().filter(|row| row.item.kind == kind).count(),
        })
        .collect();

    KindReport {
        total_items: dataset.total_items(),
        kinds,
    }
}

/// Format the category overview as a table.
fn format_category_table(report: &CategoryReport) -> String {
    let mut out = String::new();

    let labels: Vec<String> = report
        .categories
        .iter()
        .map(|c| format!("{} {}", c.icon, c.name))
        .collect();
    let label_w = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(10)
        .clamp(10, 36);

    out.push_str(&format!("{:<label_w$}  {:>5}  DESCRIPTION\n", "CATEGORY", "ITEMS"));
    for (row, label) in report.categories.iter().zip(&labels) {
        out.push_str(&format!(
            "{label:<label_w$}  {:>5}  {}\n",
            row.items, row.description,
        ));
    }

    out.push_str(&format!(
        "\n{} categories, {} items\n",
        report.categories.len(),
        report.total_items
    ));

    out
}

/// Format the per-kind totals as a table.
fn format_kind_table(report: &KindReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<8}  {:>5}\n", "TYPE", "ITEMS"));
    for row in &report.kinds {
        out.push_str(&format!("{:<8}  {:>5}\n", row.kind, row.items));
    }

    out.push_str(&format!("\n{} items\n", report.total_items));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_report_covers_every_category() {
        let dataset = Dataset::builtin();
        let report = category_report(dataset);

        assert_eq!(report.categories.len(), dataset.categories.len());
        let summed: usize = report.categories.iter().map(|c| c.items).sum();
        assert_eq!(summed, report.total_items);
    }

    #[test]
    fn test_kind_report_counts_add_up() {
        let dataset = Dataset::builtin();
        let report = kind_report(dataset);

        assert_eq!(report.kinds.len(), ItemKind::ALL.len());
        let summed: usize = report.kinds.iter().map(|k| k.items).sum();
        assert_eq!(summed, report.total_items);

        let labels: Vec<&str> = report.kinds.iter().map(|k| k.kind).collect();
        let expected: Vec<&str> = ItemKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_category_table_lists_names_and_footer() {
        let dataset = Dataset::builtin();
        let report = category_report(dataset);
        let out = format_category_table(&report);

        assert!(out.contains("CATEGORY"));
        for row in &report.categories {
            assert!(out.contains(&row.name));
        }
        assert!(out.contains(&format!(
            "{} categories, {} items",
            report.categories.len(),
            report.total_items
        )));
    }

    #[test]
    fn test_kind_table_has_every_facet() {
        let dataset = Dataset::builtin();
        let out = format_kind_table(&kind_report(dataset));

        for kind in ItemKind::ALL {
            assert!(out.contains(kind.label()));
        }
    }
}
