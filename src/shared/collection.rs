use serde::{de::DeserializeOwned, Serialize};

use crate::shared::error::ServiceError;
use crate::shared::patch::{merge_patch, EntityPatch};
use crate::shared::store::listing::{sorted_by_order, visible_items, Listable};

/// Lookups shared by the fixture-backed services.
pub fn find_required<T: Listable>(
    items: &[T],
    id: &str,
    entity: &'static str,
) -> Result<T, ServiceError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .cloned()
        .ok_or_else(|| ServiceError::not_found(entity, id))
}

/// Visible items in display order.
pub fn published<T: Listable>(items: &[T]) -> Vec<T> {
    sorted_by_order(visible_items(items))
}

/// Copy of the item with `patch` merged over it.
pub fn patched<T>(
    items: &[T],
    id: &str,
    patch: &EntityPatch,
    entity: &'static str,
) -> Result<T, ServiceError>
where
    T: Listable + Serialize + DeserializeOwned,
{
    let current = find_required(items, id, entity)?;
    merge_patch(&current, patch)
}

/// Copy of the item with its visibility flipped.
pub fn visibility_toggled<T: Listable>(
    items: &[T],
    id: &str,
    entity: &'static str,
) -> Result<T, ServiceError> {
    let mut item = find_required(items, id, entity)?;
    item.set_visible(!item.is_visible());
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::navigation::application::domain::entities::NavigationItem;
    use serde_json::json;

    fn nav(id: &str, order: i32, visible: bool) -> NavigationItem {
        NavigationItem {
            id: id.to_string(),
            name: id.to_string(),
            slug: id.to_string(),
            icon: None,
            is_visible: visible,
            order,
            is_external: false,
            url: None,
        }
    }

    #[test]
    fn missing_id_is_not_found() {
        let err = find_required(&[nav("a", 1, true)], "zzz", "Navigation item").unwrap_err();

        assert_eq!(err, ServiceError::not_found("Navigation item", "zzz"));
    }

    #[test]
    fn published_drops_hidden_and_sorts() {
        let items = vec![nav("c", 3, true), nav("a", 1, true), nav("b", 2, false)];

        let ids: Vec<String> = published(&items).into_iter().map(|n| n.id).collect();

        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn patched_leaves_source_untouched() {
        let items = vec![nav("a", 1, true)];
        let patch = json!({ "name": "Home" }).as_object().cloned().unwrap();

        let updated = patched(&items, "a", &patch, "Navigation item").unwrap();

        assert_eq!(updated.name, "Home");
        assert_eq!(items[0].name, "a");
    }

    #[test]
    fn visibility_toggle_twice_restores() {
        let items = vec![nav("a", 1, true)];

        let once = visibility_toggled(&items, "a", "Navigation item").unwrap();
        let twice = visibility_toggled(&[once.clone()], "a", "Navigation item").unwrap();

        assert!(!once.is_visible);
        assert!(twice.is_visible);
    }
}
