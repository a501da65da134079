pub mod list_store;
pub mod listing;
pub mod state_cell;

pub use list_store::{DerivedViews, ListState, ListStore};
pub use listing::{
    FilterOptions, Listable, ReorderItem, SortField, SortOptions, SortOrder, SortValue,
};
pub use state_cell::StateCell;
