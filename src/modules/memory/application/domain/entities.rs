use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::PaginatedResponse;
use crate::shared::store::listing::{Facet, Listable, SortField, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Excited,
    Proud,
    Grateful,
    Nostalgic,
    Other,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Proud => "proud",
            Mood::Grateful => "grateful",
            Mood::Nostalgic => "nostalgic",
            Mood::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub images: Vec<MemoryImage>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
    pub is_visible: bool,
    pub is_featured: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Memory {
    /// Case-insensitive substring match against any tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase().contains(&wanted))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemoryDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub images: Vec<MemoryImage>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub mood: Option<Mood>,
    pub is_visible: bool,
    pub is_featured: bool,
    pub order: i32,
}

impl MemoryDraft {
    pub fn into_entity(self, id: String, now: DateTime<Utc>) -> Memory {
        Memory {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            images: self.images,
            tags: self.tags,
            location: self.location,
            mood: self.mood,
            is_visible: self.is_visible,
            is_featured: self.is_featured,
            order: self.order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MemoryListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub visible: Option<bool>,
    pub featured: Option<bool>,
    pub tag: Option<String>,
    #[param(value_type = Option<String>)]
    pub mood: Option<Mood>,
}

impl MemoryListParams {
    pub fn matches(&self, memory: &Memory) -> bool {
        self.visible.map_or(true, |v| memory.is_visible == v)
            && self.featured.map_or(true, |f| memory.is_featured == f)
            && self.tag.as_deref().map_or(true, |t| memory.has_tag(t))
            && self.mood.map_or(true, |m| memory.mood == Some(m))
    }

    pub fn apply(&self, memories: &[Memory]) -> PaginatedResponse<Memory> {
        let filtered = memories
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect();
        PaginatedResponse::paginate(filtered, self.page, self.limit)
    }
}

// Store filters put the mood in the `category` slot.
impl Listable for Memory {
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
        self.is_visible
    }
    fn set_visible(&mut self, visible: bool) {
        self.is_visible = visible;
    }
    fn is_featured(&self) -> Option<bool> {
        Some(self.is_featured)
    }
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Category
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Category => self.mood.as_ref().map(Mood::as_str),
            _ => None,
        }
    }
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Order => SortValue::Number(i64::from(self.order)),
            SortField::CreatedAt => SortValue::Number(self.created_at.timestamp_millis()),
            SortField::UpdatedAt => SortValue::Number(self.updated_at.timestamp_millis()),
            SortField::Title | SortField::Name => SortValue::Text(self.title.clone()),
            SortField::Date => SortValue::Number(i64::from(self.date.num_days_from_ce())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_data::memory;
    use super::*;

    #[test]
    fn tag_filter_is_case_insensitive_substring() {
        let items = vec![
            memory("m1", 1, true, &["Conference", "Travel"]),
            memory("m2", 2, false, &["family"]),
        ];

        let page = MemoryListParams {
            tag: Some("conf".to_string()),
            ..Default::default()
        }
        .apply(&items);

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "m1");
    }

    #[test]
    fn mood_filter_is_exact() {
        let mut proud = memory("m2", 2, false, &[]);
        proud.mood = Some(Mood::Proud);
        let items = vec![memory("m1", 1, false, &[]), proud];

        let page = MemoryListParams {
            mood: Some(Mood::Proud),
            ..Default::default()
        }
        .apply(&items);

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "m2");
    }

    #[test]
    fn mood_is_the_category_facet() {
        let m = memory("m1", 1, false, &[]);

        assert_eq!(m.facet(Facet::Category), Some("happy"));
        assert!(!Memory::supports_facet(Facet::Status));
    }
}
