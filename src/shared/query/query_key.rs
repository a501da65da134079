use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Identity of a cached query: entity segments plus, for lists, the
/// parameters serialized with sorted keys and unset fields dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new(segments: &[&str]) -> Self {
        Self(segments.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_segment(mut self, segment: &str) -> Self {
        self.0.push(segment.to_string());
        self
    }

    /// Appends a stable rendering of `params`. Params equal by value give equal keys.
    pub fn with_params<P: Serialize>(mut self, params: &P) -> Self {
        let value = serde_json::to_value(params).unwrap_or(Value::Null);
        let value = strip_nulls(value);
        if !value.is_null() {
            self.0.push(value.to_string());
        }
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

// serde_json's default map is ordered, so object keys come out sorted.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Params {
        page: Option<u32>,
        featured: Option<bool>,
    }

    #[test]
    fn unset_params_do_not_change_key() {
        let a = QueryKey::new(&["projects"]).with_params(&Params {
            page: Some(1),
            featured: None,
        });
        let b = QueryKey::new(&["projects"]).with_params(&serde_json::json!({ "page": 1 }));

        assert_eq!(a, b);
    }

    #[test]
    fn different_params_give_different_keys() {
        let a = QueryKey::new(&["projects"]).with_params(&Params {
            page: Some(1),
            featured: Some(true),
        });
        let b = QueryKey::new(&["projects"]).with_params(&Params {
            page: Some(1),
            featured: Some(false),
        });

        assert_ne!(a, b);
    }

    #[test]
    fn prefix_matching() {
        let list = QueryKey::new(&["projects", "list"]).with_params(&serde_json::json!({}));
        let detail = QueryKey::new(&["projects", "detail"]).with_segment("p-1");

        assert!(list.starts_with(&QueryKey::new(&["projects"])));
        assert!(detail.starts_with(&QueryKey::new(&["projects"])));
        assert!(!detail.starts_with(&QueryKey::new(&["projects", "list"])));
    }
}
