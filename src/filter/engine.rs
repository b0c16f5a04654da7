//! Derivation of the visible row list.
//!
//! The interface keeps exactly one [`FilterState`] and re-runs
//! [`visible_items`] after every change to it. There is no incremental
//! bookkeeping: the dataset is small enough that a full pass per
//! keystroke is cheaper than keeping caches honest.

use crate::model::{Dataset, FlatItem, ItemKind};

use super::query::QueryMatcher;

/// Snapshot of every control that narrows the item list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Index into the category list, or `None` for the flattened
    /// all-categories view.
    pub category: Option<usize>,
    /// Exact kind facet. `None` is the All chip.
    pub kind: Option<ItemKind>,
    /// Raw search box contents. Surrounding whitespace is ignored when
    /// matching.
    pub query: String,
    /// Interpret the query as a regular expression.
    pub use_regex: bool,
    /// Match exact letter case instead of folding.
    pub case_sensitive: bool,
}

impl FilterState {
    /// Compile the current query.
    #[must_use]
    pub fn matcher(&self) -> QueryMatcher {
        QueryMatcher::new(&self.query, self.use_regex, self.case_sensitive)
    }

    /// True when the search box holds a non-blank query.
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Select a kind facet, or revert to All when the facet is already
    /// active. At most one facet is selected at a time.
    pub fn toggle_kind(&mut self, kind: ItemKind) {
        self.kind = if self.kind == Some(kind) {
            None
        } else {
            Some(kind)
        };
    }

    /// Switch scope to one category, or to the flattened view for
    /// `None`. Changing scope discards the current query so the new
    /// category is shown in full.
    pub fn select_category(&mut self, category: Option<usize>) {
        self.category = category;
        self.query.clear();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }
}

/// Derive the ordered rows for one state snapshot.
///
/// Scope is applied first (one category, or the whole dataset flattened
/// in declaration order), then the kind facet, then the query. Every
/// pass preserves relative order, so the result is always a
/// subsequence of the unfiltered view.
#[must_use]
pub fn visible_items<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<FlatItem<'a>> {
    let mut rows = match state.category {
        Some(index) => dataset.category_items(index),
        None => dataset.flatten(),
    };
    if let Some(kind) = state.kind {
        rows.retain(|row| row.item.kind == kind);
    }
    let matcher = state.matcher();
    if !matcher.is_empty() {
        rows.retain(|row| matcher.matches_item(row.item));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands<'a>(rows: &[FlatItem<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.item.command.as_str()).collect()
    }

    #[test]
    fn default_state_shows_the_full_dataset() {
        let dataset = Dataset::builtin();
        let rows = visible_items(dataset, &FilterState::default());
        assert_eq!(rows.len(), dataset.total_items());
        assert_eq!(rows[0].item.command, "/clear");
    }

    #[test]
    fn blank_query_changes_nothing() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            query: "   ".to_owned(),
            ..FilterState::default()
        };
        assert_eq!(
            commands(&visible_items(dataset, &state)),
            commands(&visible_items(dataset, &FilterState::default()))
        );
    }

    #[test]
    fn category_scope_restricts_rows() {
        let dataset = Dataset::builtin();
        let hooks = dataset.category_index("Hooks").unwrap();
        let state = FilterState {
            category: Some(hooks),
            ..FilterState::default()
        };
        let rows = visible_items(dataset, &state);
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|row| row.category_name == "Hooks"));
        assert!(rows.iter().all(|row| row.item.kind == ItemKind::Hook));
    }

    #[test]
    fn kind_facet_is_exact() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            kind: Some(ItemKind::Vim),
            ..FilterState::default()
        };
        let rows = visible_items(dataset, &state);
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|row| row.item.kind == ItemKind::Vim));
        let by_hand = dataset
            .flatten()
            .into_iter()
            .filter(|row| row.item.kind == ItemKind::Vim)
            .count();
        assert_eq!(rows.len(), by_hand);
    }

    #[test]
    fn scope_and_facet_can_rule_everything_out() {
        let dataset = Dataset::builtin();
        let hooks = dataset.category_index("Hooks").unwrap();
        let state = FilterState {
            category: Some(hooks),
            kind: Some(ItemKind::Slash),
            ..FilterState::default()
        };
        assert!(visible_items(dataset, &state).is_empty());
    }

    #[test]
    fn query_scans_tags() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            query: "cut".to_owned(),
            ..FilterState::default()
        };
        let rows = commands(&visible_items(dataset, &state));
        assert!(rows.contains(&"dd"));
        assert!(rows.contains(&"dw / de / db"));
    }

    #[test]
    fn query_folds_case_unless_asked() {
        let dataset = Dataset::builtin();
        let folded = FilterState {
            query: "esc".to_owned(),
            ..FilterState::default()
        };
        let strict = FilterState {
            case_sensitive: true,
            ..folded.clone()
        };
        let folded_rows = commands(&visible_items(dataset, &folded));
        let strict_rows = commands(&visible_items(dataset, &strict));
        assert!(folded_rows.contains(&"Esc + Esc"));
        assert!(!strict_rows.contains(&"Esc + Esc"));
        assert!(strict_rows.iter().all(|row| folded_rows.contains(row)));
    }

    #[test]
    fn regex_query_matches_digits() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            query: r"\d+".to_owned(),
            use_regex: true,
            ..FilterState::default()
        };
        let rows = commands(&visible_items(dataset, &state));
        assert!(rows.contains(&"--max-turns"));
        assert!(!rows.contains(&"/clear"));
    }

    #[test]
    fn literal_mode_reads_regex_syntax_verbatim() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            query: r"\d+".to_owned(),
            ..FilterState::default()
        };
        assert!(visible_items(dataset, &state).is_empty());
    }

    #[test]
    fn malformed_regex_behaves_like_a_literal_query() {
        let dataset = Dataset::builtin();
        let broken = FilterState {
            query: "(zero".to_owned(),
            use_regex: true,
            ..FilterState::default()
        };
        let literal = FilterState {
            use_regex: false,
            ..broken.clone()
        };
        let broken_rows = commands(&visible_items(dataset, &broken));
        assert_eq!(broken_rows, commands(&visible_items(dataset, &literal)));
        assert!(broken_rows.contains(&"0 (zero)"));
    }

    #[test]
    fn rows_preserve_dataset_order() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            query: "session".to_owned(),
            ..FilterState::default()
        };
        let rows = commands(&visible_items(dataset, &state));
        assert!(!rows.is_empty());
        let by_hand: Vec<&str> = dataset
            .flatten()
            .into_iter()
            .filter(|row| state.matcher().matches_item(row.item))
            .map(|row| row.item.command.as_str())
            .collect();
        assert_eq!(rows, by_hand);
    }

    #[test]
    fn toggling_the_active_facet_reverts_to_all() {
        let mut state = FilterState::default();
        state.toggle_kind(ItemKind::Flag);
        assert_eq!(state.kind, Some(ItemKind::Flag));
        state.toggle_kind(ItemKind::Hook);
        assert_eq!(state.kind, Some(ItemKind::Hook));
        state.toggle_kind(ItemKind::Hook);
        assert_eq!(state.kind, None);
    }

    #[test]
    fn category_change_discards_the_query() {
        let mut state = FilterState {
            query: "dd".to_owned(),
            ..FilterState::default()
        };
        state.select_category(Some(3));
        assert_eq!(state.category, Some(3));
        assert!(state.query.is_empty());
        state.select_category(None);
        assert_eq!(state.category, None);
    }

    #[test]
    fn out_of_range_category_shows_nothing() {
        let dataset = Dataset::builtin();
        let state = FilterState {
            category: Some(usize::MAX),
            ..FilterState::default()
        };
        assert!(visible_items(dataset, &state).is_empty());
    }
}
