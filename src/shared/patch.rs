use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::ServiceError;

/// Partial update sent by admin forms: top-level fields replace the
/// entity's fields, absent fields keep their current value.
pub type EntityPatch = Map<String, Value>;

/// Applies `patch` over `entity` (shallow merge, like an object spread).
pub fn merge_patch<T>(entity: &T, patch: &EntityPatch) -> Result<T, ServiceError>
where
    T: Serialize + DeserializeOwned,
{
    let mut value =
        serde_json::to_value(entity).map_err(|e| ServiceError::InvalidPatch(e.to_string()))?;

    let Value::Object(fields) = &mut value else {
        return Err(ServiceError::InvalidPatch(
            "entity is not a JSON object".to_string(),
        ));
    };

    for (key, field) in patch {
        // The id is owned by the collection, never by the patch.
        if key == "id" {
            continue;
        }
        fields.insert(key.clone(), field.clone());
    }

    serde_json::from_value(value).map_err(|e| ServiceError::InvalidPatch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Card {
        id: String,
        title: String,
        is_visible: bool,
    }

    fn card() -> Card {
        Card {
            id: "card-1".to_string(),
            title: "Original".to_string(),
            is_visible: true,
        }
    }

    fn patch(value: Value) -> EntityPatch {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn replaces_only_given_fields() {
        let updated = merge_patch(&card(), &patch(json!({ "title": "Renamed" }))).unwrap();

        assert_eq!(updated.title, "Renamed");
        assert!(updated.is_visible);
    }

    #[test]
    fn ignores_id_in_patch() {
        let updated = merge_patch(&card(), &patch(json!({ "id": "other" }))).unwrap();

        assert_eq!(updated.id, "card-1");
    }

    #[test]
    fn rejects_wrongly_typed_field() {
        let err = merge_patch(&card(), &patch(json!({ "isVisible": "yes" }))).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidPatch(_)));
    }
}
