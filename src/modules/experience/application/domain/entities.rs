use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::PaginatedResponse;
use crate::shared::store::listing::{Facet, Listable, SortField, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Freelance,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "full-time",
            EmploymentType::PartTime => "part-time",
            EmploymentType::Contract => "contract",
            EmploymentType::Internship => "internship",
            EmploymentType::Freelance => "freelance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Onsite,
    Remote,
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub description: String,
    pub responsibilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    pub technologies: Vec<String>,
    #[serde(rename = "type")]
    pub kind: EmploymentType,
    pub location: String,
    pub location_type: LocationType,
    pub start_date: NaiveDate,
    /// Absent while the job is ongoing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub is_current_job: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceDraft {
    pub company: String,
    pub position: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(rename = "type")]
    pub kind: EmploymentType,
    pub location: String,
    pub location_type: LocationType,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub is_current_job: bool,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    pub is_visible: bool,
    pub order: i32,
}

impl ExperienceDraft {
    pub fn into_entity(self, id: String, now: DateTime<Utc>) -> Experience {
        Experience {
            id,
            company: self.company,
            position: self.position,
            description: self.description,
            responsibilities: self.responsibilities,
            achievements: self.achievements,
            technologies: self.technologies,
            kind: self.kind,
            location: self.location,
            location_type: self.location_type,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current_job: self.is_current_job,
            company_logo: self.company_logo,
            company_website: self.company_website,
            is_visible: self.is_visible,
            order: self.order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExperienceListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub visible: Option<bool>,
    #[serde(rename = "type")]
    #[param(value_type = Option<String>)]
    pub kind: Option<EmploymentType>,
}

impl ExperienceListParams {
    pub fn matches(&self, experience: &Experience) -> bool {
        self.visible.map_or(true, |v| experience.is_visible == v)
            && self.kind.map_or(true, |k| experience.kind == k)
    }

    pub fn apply(&self, experiences: &[Experience]) -> PaginatedResponse<Experience> {
        let filtered = experiences
            .iter()
            .filter(|e| self.matches(e))
            .cloned()
            .collect();
        PaginatedResponse::paginate(filtered, self.page, self.limit)
    }
}

impl Listable for Experience {
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
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Type
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        (facet == Facet::Type).then(|| self.kind.as_str())
    }
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.company.as_str(),
            self.position.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Order => SortValue::Number(i64::from(self.order)),
            SortField::CreatedAt => SortValue::Number(self.created_at.timestamp_millis()),
            SortField::UpdatedAt => SortValue::Number(self.updated_at.timestamp_millis()),
            SortField::Title => SortValue::Text(self.position.clone()),
            SortField::Name => SortValue::Text(self.company.clone()),
            SortField::Date => SortValue::Number(i64::from(self.start_date.num_days_from_ce())),
        }
    }
}
