use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};

use crate::shared::error::ServiceError;
use crate::shared::patch::{merge_patch, EntityPatch};
use crate::shared::store::listing::{
    filter_and_sort, find_by_id, visible_items, with_added, with_updated, without, FilterOptions,
    Listable, SortOptions,
};
use crate::shared::store::StateCell;

/// Views a store keeps precomputed from its items, rebuilt on every item change.
pub trait DerivedViews<T>: Clone + Default {
    fn derive(items: &[T]) -> Self;
}

impl<T> DerivedViews<T> for () {
    fn derive(_items: &[T]) -> Self {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T, D = ()> {
    pub items: Vec<T>,
    pub derived: D,
    pub filters: FilterOptions,
    pub sort: SortOptions,
    pub search_query: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T, D: Default> Default for ListState<T, D> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            derived: D::default(),
            filters: FilterOptions::default(),
            sort: SortOptions::default(),
            search_query: String::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl<T: Clone, D: DerivedViews<T>> ListState<T, D> {
    /// Same state with `items` swapped in and the derived views rebuilt.
    pub fn with_items(&self, items: Vec<T>) -> Self {
        Self {
            derived: D::derive(&items),
            items,
            filters: self.filters.clone(),
            sort: self.sort,
            search_query: self.search_query.clone(),
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }
}

/// Copy-on-write container for one entity collection plus its filter,
/// sort and search settings.
pub struct ListStore<T, D = ()> {
    cell: StateCell<ListState<T, D>>,
}

impl<T, D> ListStore<T, D>
where
    T: Listable + Serialize + DeserializeOwned,
    D: DerivedViews<T>,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            cell: StateCell::new(name, ListState::default()),
        }
    }

    pub fn snapshot(&self) -> Arc<ListState<T, D>> {
        self.cell.get()
    }

    pub fn items(&self) -> Vec<T> {
        self.cell.get().items.clone()
    }

    pub fn derived(&self) -> D {
        self.cell.get().derived.clone()
    }

    /// Replaces the items with the result of `f`; `None` keeps the state.
    pub(crate) fn commit(
        &self,
        action: &'static str,
        f: impl FnOnce(&[T]) -> Option<Vec<T>>,
    ) -> bool {
        self.cell
            .update(action, |state| f(&state.items).map(|items| state.with_items(items)))
    }

    //
    // ──────────────────────────────────────────────────────────
    // Item actions
    // ──────────────────────────────────────────────────────────
    //

    pub fn set_items(&self, items: Vec<T>) {
        self.commit("setItems", |_| Some(items));
    }

    /// Inserts `item` and keeps the list sorted by `order`.
    pub fn add_item(&self, item: T) {
        self.commit("addItem", |items| Some(with_added(items, item)));
    }

    /// Returns `false` (and changes nothing) when no item has `id`.
    pub fn update_item(&self, id: &str, patch: impl FnOnce(&mut T)) -> bool {
        self.commit("updateItem", |items| with_updated(items, id, patch))
    }

    /// Merges a JSON patch over the item with `id`.
    pub fn apply_patch(&self, id: &str, patch: &EntityPatch) -> Result<bool, ServiceError> {
        let mut outcome = Ok(false);
        // Merge against the locked items so a concurrent action is never overwritten.
        self.commit("updateItem", |items| {
            let index = items.iter().position(|i| i.id() == id)?;
            match merge_patch(&items[index], patch) {
                Ok(next) => {
                    let mut updated = items.to_vec();
                    updated[index] = next;
                    outcome = Ok(true);
                    Some(updated)
                }
                Err(err) => {
                    outcome = Err(err);
                    None
                }
            }
        });
        outcome
    }

    pub fn remove_item(&self, id: &str) -> bool {
        self.commit("removeItem", |items| {
            find_by_id(items, id)?;
            Some(without(items, id))
        })
    }

    pub fn toggle_visibility(&self, id: &str) -> bool {
        self.commit("toggleVisibility", |items| {
            with_updated(items, id, |item| item.set_visible(!item.is_visible()))
        })
    }

    /// Takes the list in its new order, as produced by a drag-and-drop editor.
    pub fn reorder(&self, items: Vec<T>) {
        self.commit("reorder", |_| Some(items));
    }

    //
    // ──────────────────────────────────────────────────────────
    // Filter / sort / search
    // ──────────────────────────────────────────────────────────
    //

    /// Overlays `partial` on the current filters.
    pub fn set_filters(&self, partial: FilterOptions) {
        self.cell.update("setFilters", |state| {
            let mut next = state.clone();
            next.filters.merge(partial);
            Some(next)
        });
    }

    pub fn set_sort_options(&self, sort: SortOptions) {
        self.cell.update("setSortOptions", |state| {
            Some(ListState {
                sort,
                ..state.clone()
            })
        });
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let search_query = query.into();
        self.cell.update("setSearchQuery", |state| {
            Some(ListState {
                search_query,
                ..state.clone()
            })
        });
    }

    /// Drops filters and the search query; the sort order stays.
    pub fn clear_filters(&self) {
        self.cell.update("clearFilters", |state| {
            Some(ListState {
                filters: FilterOptions::default(),
                search_query: String::new(),
                ..state.clone()
            })
        });
    }

    //
    // ──────────────────────────────────────────────────────────
    // Getters
    // ──────────────────────────────────────────────────────────
    //

    /// Filtered and sorted copy, computed fresh on every call.
    pub fn filtered(&self) -> Vec<T> {
        let state = self.cell.get();
        filter_and_sort(&state.items, &state.filters, state.sort, &state.search_query)
    }

    pub fn visible(&self) -> Vec<T> {
        visible_items(&self.cell.get().items)
    }

    pub fn by_id(&self, id: &str) -> Option<T> {
        find_by_id(&self.cell.get().items, id).cloned()
    }

    pub fn filter_items(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.cell
            .get()
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect()
    }

    //
    // ──────────────────────────────────────────────────────────
    // Status
    // ──────────────────────────────────────────────────────────
    //

    pub fn set_loading(&self, is_loading: bool) {
        self.cell.update("setLoading", |state| {
            Some(ListState {
                is_loading,
                ..state.clone()
            })
        });
    }

    pub fn set_error(&self, error: Option<String>) {
        self.cell.update("setError", |state| {
            Some(ListState {
                error,
                ..state.clone()
            })
        });
    }

    pub fn clear_error(&self) {
        self.set_error(None);
    }

    pub fn reset(&self) {
        self.cell.replace("reset", ListState::default());
    }
}
