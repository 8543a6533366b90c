//! In-memory free-text filtering over loaded entity collections.
//!
//! Filtering is a pure, synchronous transform: lower-cased substring
//! containment across a fixed set of fields per entity type, OR'd together.
//! The query is always literal text, never a pattern.

/// Accessor for one searchable field of an entity. `None` is treated as an
/// empty string (never matches a non-empty query).
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// An entity type with a fixed list of searchable fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Option<&str>>;
}

/// Filter `items` down to those where any of `fields` contains the trimmed,
/// lower-cased `query` as a substring.
///
/// An empty or whitespace-only query matches everything. Output preserves
/// the original relative order and borrows from the input.
pub fn filter<'a, T>(items: &'a [T], query: &str, fields: &[FieldAccessor<T>]) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            fields
                .iter()
                .any(|field| field(item).unwrap_or_default().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Trait-driven form of [`filter`], using the entity's own field list.
pub fn filter_searchable<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|value| value.unwrap_or_default().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Per-screen search box state. Created empty when a screen mounts and
/// discarded with it; never persisted.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    query: String,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    /// True iff the trimmed query is non-empty.
    pub fn has_active_search(&self) -> bool {
        !self.query.trim().is_empty()
    }

    /// Derive the visible subset for the current query.
    pub fn apply<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_searchable(items, &self.query)
    }

    /// Number of items the current query leaves visible.
    pub fn result_count<T: Searchable>(&self, items: &[T]) -> usize {
        self.apply(items).len()
    }
}
