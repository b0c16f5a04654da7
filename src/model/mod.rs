//! Reference dataset model.
//!
//! This module defines the immutable data structures behind the browser:
//! categories, items, and the closed set of item kinds. The dataset is
//! built once from the literal table in [`builtin`] and shared for the
//! process lifetime; filtering produces transient lists of borrowed
//! [`FlatItem`] entries and never touches the source.

mod builtin;

use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// The closed set of facets an item can belong to.
///
/// Declaration order here drives the facet row and the `f`/`F` cycle
/// order in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Slash,
    Keyboard,
    Flag,
    Vim,
    Hook,
    Prefix,
    Mode,
    Feature,
    Custom,
}

impl ItemKind {
    /// All kinds in facet-row order.
    pub const ALL: [ItemKind; 9] = [
        ItemKind::Slash,
        ItemKind::Keyboard,
        ItemKind::Flag,
        ItemKind::Vim,
        ItemKind::Hook,
        ItemKind::Prefix,
        ItemKind::Mode,
        ItemKind::Feature,
        ItemKind::Custom,
    ];

    /// Lowercase name used on the wire and in CLI flags.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ItemKind::Slash => "slash",
            ItemKind::Keyboard => "keyboard",
            ItemKind::Flag => "flag",
            ItemKind::Vim => "vim",
            ItemKind::Hook => "hook",
            ItemKind::Prefix => "prefix",
            ItemKind::Mode => "mode",
            ItemKind::Feature => "feature",
            ItemKind::Custom => "custom",
        }
    }

    /// Uppercase badge text shown on item cards.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            ItemKind::Slash => "SLASH",
            ItemKind::Keyboard => "KEYBOARD",
            ItemKind::Flag => "FLAG",
            ItemKind::Vim => "VIM",
            ItemKind::Hook => "HOOK",
            ItemKind::Prefix => "PREFIX",
            ItemKind::Mode => "MODE",
            ItemKind::Feature => "FEATURE",
            ItemKind::Custom => "CUSTOM",
        }
    }

    /// Capitalized name for the facet row ("Slash", "Keyboard", ...).
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ItemKind::Slash => "Slash",
            ItemKind::Keyboard => "Keyboard",
            ItemKind::Flag => "Flag",
            ItemKind::Vim => "Vim",
            ItemKind::Hook => "Hook",
            ItemKind::Prefix => "Prefix",
            ItemKind::Mode => "Mode",
            ItemKind::Feature => "Feature",
            ItemKind::Custom => "Custom",
        }
    }

    /// Parse a kind from its lowercase name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.iter().copied().find(|k| k.label() == lower)
    }

    /// Comma-separated list of all valid kind names, for error messages.
    #[must_use]
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single reference entry: a command, shortcut, flag, or concept.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub command: String,
    pub kind: ItemKind,
    pub description: String,
    pub example: String,
    pub tags: Vec<String>,
}

impl Item {
    pub(crate) fn new(
        command: &str,
        kind: ItemKind,
        description: &str,
        example: &str,
        tags: &[&str],
    ) -> Self {
        Self {
            command: command.to_string(),
            kind,
            description: description.to_string(),
            example: example.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    /// Tags joined by single spaces, the form the query engine searches.
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.tags.join(" ")
    }
}

/// A named group of items. `name` is the stable identity key.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub name: String,
    /// Opaque glyph passed through to the sidebar.
    pub icon: String,
    pub description: String,
    pub items: Vec<Item>,
}

impl Category {
    pub(crate) fn new(name: &str, icon: &str, description: &str, items: Vec<Item>) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            items,
        }
    }
}

/// An item annotated with its owning category, as produced by the
/// flattener and consumed by the filter engine and renderers.
#[derive(Debug, Clone, Copy)]
pub struct FlatItem<'a> {
    pub item: &'a Item,
    pub category_name: &'a str,
    pub category_icon: &'a str,
}

/// The complete reference table. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

static BUILTIN: LazyLock<Dataset> = LazyLock::new(builtin::build);

impl Dataset {
    /// The process-wide builtin dataset.
    #[must_use]
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    /// All items across all categories, in category-then-declaration
    /// order, each annotated with its owning category.
    #[must_use]
    pub fn flatten(&self) -> Vec<FlatItem<'_>> {
        let mut items = Vec::with_capacity(self.total_items());
        for category in &self.categories {
            for item in &category.items {
                items.push(FlatItem {
                    item,
                    category_name: &category.name,
                    category_icon: &category.icon,
                });
            }
        }
        items
    }

    /// One category's items, annotated the same way as [`flatten`].
    ///
    /// [`flatten`]: Dataset::flatten
    #[must_use]
    pub fn category_items(&self, index: usize) -> Vec<FlatItem<'_>> {
        let Some(category) = self.categories.get(index) else {
            return Vec::new();
        };
        category
            .items
            .iter()
            .map(|item| FlatItem {
                item,
                category_name: &category.name,
                category_icon: &category.icon,
            })
            .collect()
    }

    /// Total item count across all categories.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Find a category index by name (case-insensitive).
    #[must_use]
    pub fn category_index(&self, name: &str) -> Option<usize> {
        let lower = name.to_lowercase();
        self.categories
            .iter()
            .position(|c| c.name.to_lowercase() == lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.categories.len(), 19);
        assert_eq!(dataset.total_items(), 112);
        assert_eq!(dataset.flatten().len(), 112);
    }

    #[test]
    fn test_hooks_category_is_homogeneous() {
        let dataset = Dataset::builtin();
        let idx = dataset.category_index("Hooks").expect("Hooks exists");
        let hooks = &dataset.categories[idx];
        assert_eq!(hooks.items.len(), 9);
        assert!(hooks.items.iter().all(|i| i.kind == ItemKind::Hook));
    }

    #[test]
    fn test_flatten_preserves_declaration_order() {
        let dataset = Dataset::builtin();
        let flat = dataset.flatten();

        // First item of the first category leads the flattened list.
        assert_eq!(flat[0].item.command, dataset.categories[0].items[0].command);
        assert_eq!(flat[0].category_name, dataset.categories[0].name);

        // Category boundaries are contiguous runs.
        let first_len = dataset.categories[0].items.len();
        assert_eq!(flat[first_len].category_name, dataset.categories[1].name);
    }

    #[test]
    fn test_flatten_annotates_every_item() {
        let dataset = Dataset::builtin();
        for entry in dataset.flatten() {
            assert!(!entry.category_name.is_empty());
            assert!(!entry.category_icon.is_empty());
        }
    }

    #[test]
    fn test_category_index_is_case_insensitive() {
        let dataset = Dataset::builtin();
        assert_eq!(
            dataset.category_index("hooks"),
            dataset.category_index("Hooks")
        );
        assert_eq!(
            dataset.category_index("VIM MODE - EDITING"),
            dataset.category_index("Vim Mode - Editing")
        );
        assert_eq!(dataset.category_index("Nonexistent"), None);
    }

    #[test]
    fn test_category_items_out_of_range_is_empty() {
        let dataset = Dataset::builtin();
        assert!(dataset.category_items(usize::MAX).is_empty());
    }

    #[test]
    fn test_kind_from_name() {
        assert_eq!(ItemKind::from_name("slash"), Some(ItemKind::Slash));
        assert_eq!(ItemKind::from_name("HOOK"), Some(ItemKind::Hook));
        assert_eq!(ItemKind::from_name("widget"), None);
    }

    #[test]
    fn test_kind_labels_match_all_order() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_name(kind.label()), Some(kind));
            assert_eq!(kind.badge(), kind.label().to_uppercase());
        }
    }

    #[test]
    fn test_every_kind_appears_in_dataset() {
        let dataset = Dataset::builtin();
        let flat = dataset.flatten();
        for kind in ItemKind::ALL {
            assert!(
                flat.iter().any(|e| e.item.kind == kind),
                "no item of kind {kind} in the builtin dataset"
            );
        }
    }

    #[test]
    fn test_dd_item_content() {
        let dataset = Dataset::builtin();
        let idx = dataset
            .category_index("Vim Mode - Editing")
            .expect("category exists");
        let dd = dataset.categories[idx]
            .items
            .iter()
            .find(|i| i.command == "dd")
            .expect("dd exists");
        assert_eq!(dd.kind, ItemKind::Vim);
        assert_eq!(dd.description, "Delete entire line");
        assert_eq!(dd.tags, vec!["delete", "line", "cut"]);
        assert_eq!(dd.tags_joined(), "delete line cut");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&ItemKind::Keyboard).expect("serializable");
        assert_eq!(json, "\"keyboard\"");
    }
}
