use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::PaginatedResponse;
use crate::shared::store::listing::{Listable, SortField, SortValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub title: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    pub issue_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gpa: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificates: Option<Vec<Certificate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_courses: Option<Vec<String>>,
    pub start_date: NaiveDate,
    /// Absent while still studying.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current_study: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution_website: Option<String>,
    pub location: String,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Education {
    pub fn certificates(&self) -> &[Certificate] {
        self.certificates.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationDraft {
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub gpa: Option<f32>,
    #[serde(default)]
    pub max_gpa: Option<f32>,
    #[serde(default)]
    pub activities: Option<Vec<String>>,
    #[serde(default)]
    pub certificates: Option<Vec<Certificate>>,
    #[serde(default)]
    pub relevant_courses: Option<Vec<String>>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub is_current_study: bool,
    #[serde(default)]
    pub institution_logo: Option<String>,
    #[serde(default)]
    pub institution_website: Option<String>,
    pub location: String,
    pub is_visible: bool,
    pub order: i32,
}

impl EducationDraft {
    pub fn into_entity(self, id: String, now: DateTime<Utc>) -> Education {
        Education {
            id,
            institution: self.institution,
            degree: self.degree,
            field: self.field,
            description: self.description,
            grade: self.grade,
            gpa: self.gpa,
            max_gpa: self.max_gpa,
            activities: self.activities,
            certificates: self.certificates,
            relevant_courses: self.relevant_courses,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current_study: self.is_current_study,
            institution_logo: self.institution_logo,
            institution_website: self.institution_website,
            location: self.location,
            is_visible: self.is_visible,
            order: self.order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EducationListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub visible: Option<bool>,
}

impl EducationListParams {
    pub fn matches(&self, education: &Education) -> bool {
        self.visible.map_or(true, |v| education.is_visible == v)
    }

    pub fn apply(&self, items: &[Education]) -> PaginatedResponse<Education> {
        let filtered = items.iter().filter(|e| self.matches(e)).cloned().collect();
        PaginatedResponse::paginate(filtered, self.page, self.limit)
    }
}

impl Listable for Education {
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
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.institution.as_str(),
            self.degree.as_str(),
            self.field.as_str(),
        ];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Order => SortValue::Number(i64::from(self.order)),
            SortField::CreatedAt => SortValue::Number(self.created_at.timestamp_millis()),
            SortField::UpdatedAt => SortValue::Number(self.updated_at.timestamp_millis()),
            SortField::Title => SortValue::Text(self.degree.clone()),
            SortField::Name => SortValue::Text(self.institution.clone()),
            SortField::Date => SortValue::Number(i64::from(self.start_date.num_days_from_ce())),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_data::education;
    use super::*;

    #[test]
    fn hidden_items_filtered_when_visible_requested() {
        let mut hidden = education("e2", 2, false);
        hidden.is_visible = false;
        let items = vec![education("e1", 1, true), hidden];

        let page = EducationListParams {
            visible: Some(true),
            ..Default::default()
        }
        .apply(&items);

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "e1");
    }

    #[test]
    fn missing_certificates_read_as_empty() {
        assert!(education("e1", 1, true).certificates().is_empty());
    }
}
