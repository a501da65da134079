use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// Filter / sort options
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Order,
    CreatedAt,
    UpdatedAt,
    Title,
    Name,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOptions {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortOptions {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub is_visible: Option<bool>,
    pub featured: Option<bool>,
    pub category: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl FilterOptions {
    /// Overlays the fields set in `other`; unset fields keep their value.
    pub fn merge(&mut self, other: FilterOptions) {
        if other.is_visible.is_some() {
            self.is_visible = other.is_visible;
        }
        if other.featured.is_some() {
            self.featured = other.featured;
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if other.status.is_some() {
            self.status = other.status;
        }
        if other.kind.is_some() {
            self.kind = other.kind;
        }
    }
}

/// Categorical fields a store can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Category,
    Status,
    Type,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(i64),
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
        (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

//
// ──────────────────────────────────────────────────────────
// Listable entities
// ──────────────────────────────────────────────────────────
//

/// Shared shape of every ordered, hideable portfolio record.
pub trait Listable: Clone {
    fn id(&self) -> &str;
    fn order(&self) -> i32;
    fn set_order(&mut self, order: i32);
    fn is_visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// `None` when the entity has no featured flag; the featured filter is then ignored.
    fn is_featured(&self) -> Option<bool> {
        None
    }

    fn supports_facet(_facet: Facet) -> bool {
        false
    }

    fn facet(&self, _facet: Facet) -> Option<&str> {
        None
    }

    /// Fields matched by the free-text search query.
    fn search_fields(&self) -> Vec<&str>;

    /// Unsupported fields fall back to `order`.
    fn sort_value(&self, field: SortField) -> SortValue {
        let _ = field;
        SortValue::Number(i64::from(self.order()))
    }
}

pub fn matches_filters<T: Listable>(item: &T, filters: &FilterOptions) -> bool {
    if let Some(visible) = filters.is_visible {
        if item.is_visible() != visible {
            return false;
        }
    }

    if let (Some(wanted), Some(featured)) = (filters.featured, item.is_featured()) {
        if featured != wanted {
            return false;
        }
    }

    let facets = [
        (Facet::Category, filters.category.as_deref()),
        (Facet::Status, filters.status.as_deref()),
        (Facet::Type, filters.kind.as_deref()),
    ];

    facets.into_iter().all(|(facet, wanted)| match wanted {
        Some(wanted) if !wanted.is_empty() && T::supports_facet(facet) => {
            item.facet(facet) == Some(wanted)
        }
        _ => true,
    })
}

pub fn matches_search<T: Listable>(item: &T, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    item.search_fields()
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}

/// Stable sort: equal keys keep their relative order in both directions.
pub fn sort_items<T: Listable>(items: &mut [T], sort: SortOptions) {
    items.sort_by(|a, b| {
        let ordering = compare_values(&a.sort_value(sort.field), &b.sort_value(sort.field));
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// Fresh filtered + sorted copy; never cached.
pub fn filter_and_sort<T: Listable>(
    items: &[T],
    filters: &FilterOptions,
    sort: SortOptions,
    query: &str,
) -> Vec<T> {
    let mut filtered: Vec<T> = items
        .iter()
        .filter(|item| matches_filters(*item, filters))
        .filter(|item| matches_search(*item, query))
        .cloned()
        .collect();

    sort_items(&mut filtered, sort);
    filtered
}

//
// ──────────────────────────────────────────────────────────
// Copy-on-write list operations
// ──────────────────────────────────────────────────────────
//

pub fn sorted_by_order<T: Listable>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| item.order());
    items
}

pub fn visible_items<T: Listable>(items: &[T]) -> Vec<T> {
    items.iter().filter(|i| i.is_visible()).cloned().collect()
}

pub fn find_by_id<'a, T: Listable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|i| i.id() == id)
}

/// Appends and re-sorts by `order`.
pub fn with_added<T: Listable>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    sorted_by_order(next)
}

/// `None` when no item carries `id`.
pub fn with_updated<T: Listable>(
    items: &[T],
    id: &str,
    patch: impl FnOnce(&mut T),
) -> Option<Vec<T>> {
    let index = items.iter().position(|i| i.id() == id)?;
    let mut next = items.to_vec();
    patch(&mut next[index]);
    Some(next)
}

pub fn without<T: Listable>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|i| i.id() != id).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: String,
    pub order: i32,
}

/// Assigns the given orders and returns the list sorted by them. Unknown ids are skipped.
pub fn with_reordered<T: Listable>(items: &[T], reorder: &[ReorderItem]) -> Vec<T> {
    let mut next = items.to_vec();
    for entry in reorder {
        if let Some(item) = next.iter_mut().find(|i| i.id() == entry.id) {
            item.set_order(entry.order);
        }
    }
    sorted_by_order(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: String,
        status: String,
        order: i32,
        visible: bool,
        featured: bool,
    }

    impl Listable for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn order(&self) -> i32 {
            self.order
        }
        fn set_order(&mut self, order: i32) {
            self.order = order;
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
        fn is_featured(&self) -> Option<bool> {
            Some(self.featured)
        }
        fn supports_facet(facet: Facet) -> bool {
            facet == Facet::Status
        }
        fn facet(&self, facet: Facet) -> Option<&str> {
            (facet == Facet::Status).then_some(self.status.as_str())
        }
        fn search_fields(&self) -> Vec<&str> {
            vec![&self.title]
        }
        fn sort_value(&self, field: SortField) -> SortValue {
            match field {
                SortField::Title => SortValue::Text(self.title.clone()),
                _ => SortValue::Number(i64::from(self.order)),
            }
        }
    }

    fn row(id: &str, title: &str, order: i32, visible: bool, featured: bool) -> Row {
        Row {
            id: id.to_string(),
            title: title.to_string(),
            status: "completed".to_string(),
            order,
            visible,
            featured,
        }
    }

    fn ids(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn filters_are_and_combined() {
        let rows = vec![
            row("a", "Alpha", 1, true, true),
            row("b", "Beta", 2, false, true),
            row("c", "Gamma", 3, true, false),
        ];
        let filters = FilterOptions {
            is_visible: Some(true),
            featured: Some(true),
            ..Default::default()
        };

        let out = filter_and_sort(&rows, &filters, SortOptions::default(), "");

        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn unsupported_facet_is_ignored() {
        let rows = vec![row("a", "Alpha", 1, true, true)];
        let filters = FilterOptions {
            kind: Some("internship".to_string()),
            ..Default::default()
        };

        assert_eq!(filter_and_sort(&rows, &filters, SortOptions::default(), "").len(), 1);
    }

    #[test]
    fn search_is_case_insensitive() {
        let rows = vec![row("a", "Rust Parser", 1, true, false), row("b", "Go", 2, true, false)];

        let out = filter_and_sort(&rows, &FilterOptions::default(), SortOptions::default(), "rUsT");

        assert_eq!(ids(&out), vec!["a"]);
    }

    #[test]
    fn descending_sort_keeps_ties_stable() {
        let rows = vec![
            row("a", "Same", 1, true, false),
            row("b", "Same", 2, true, false),
            row("c", "Other", 3, true, false),
        ];
        let sort = SortOptions::new(SortField::Title, SortOrder::Desc);

        let out = filter_and_sort(&rows, &FilterOptions::default(), sort, "");

        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn with_added_keeps_order() {
        let rows = vec![row("a", "A", 1, true, false), row("c", "C", 3, true, false)];

        let out = with_added(&rows, row("b", "B", 2, true, false));

        assert_eq!(ids(&out), vec!["a", "b", "c"]);
    }

    #[test]
    fn with_updated_absent_id_is_none() {
        let rows = vec![row("a", "A", 1, true, false)];

        assert!(with_updated(&rows, "zzz", |r| r.visible = false).is_none());
    }

    #[test]
    fn reorder_applies_new_positions() {
        let rows = vec![row("a", "A", 1, true, false), row("b", "B", 2, true, false)];
        let reorder = vec![
            ReorderItem { id: "a".to_string(), order: 2 },
            ReorderItem { id: "b".to_string(), order: 1 },
        ];

        let out = with_reordered(&rows, &reorder);

        assert_eq!(ids(&out), vec!["b", "a"]);
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut filters = FilterOptions {
            featured: Some(true),
            ..Default::default()
        };

        filters.merge(FilterOptions {
            status: Some("planned".to_string()),
            ..Default::default()
        });

        assert_eq!(filters.featured, Some(true));
        assert_eq!(filters.status.as_deref(), Some("planned"));
    }
}
