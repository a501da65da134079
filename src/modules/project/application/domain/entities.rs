use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::api::PaginatedResponse;
use crate::shared::store::listing::{Facet, Listable, SortField, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Planned => "planned",
            ProjectStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub is_primary: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub images: Vec<ProjectImage>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learnings: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn primary_image(&self) -> Option<&ProjectImage> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
    }

    pub fn uses_technology(&self, technology: &str) -> bool {
        let wanted = technology.to_lowercase();
        self.technologies
            .iter()
            .any(|t| t.to_lowercase().contains(&wanted))
    }
}

/// Admin form for a new project. Images are attached afterwards through uploads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    pub status: ProjectStatus,
    pub featured: bool,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub my_role: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub learnings: Option<String>,
}

impl CreateProjectForm {
    pub fn into_entity(self, id: String, order: i32, now: DateTime<Utc>) -> Project {
        Project {
            id,
            title: self.title,
            description: self.description,
            short_description: self.short_description,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            images: Vec::new(),
            status: self.status,
            featured: self.featured,
            start_date: self.start_date,
            end_date: self.end_date,
            team_size: self.team_size,
            my_role: self.my_role,
            challenges: self.challenges,
            learnings: self.learnings,
            is_visible: true,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// List parameters
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub featured: Option<bool>,
    pub visible: Option<bool>,
    #[param(value_type = Option<String>)]
    pub status: Option<ProjectStatus>,
}

impl ProjectListParams {
    pub fn matches(&self, project: &Project) -> bool {
        self.visible.map_or(true, |v| project.is_visible == v)
            && self.featured.map_or(true, |f| project.featured == f)
            && self.status.map_or(true, |s| project.status == s)
    }

    /// Filters `projects` (AND-combined) and slices the requested page.
    pub fn apply(&self, projects: &[Project]) -> PaginatedResponse<Project> {
        let filtered = projects
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();
        PaginatedResponse::paginate(filtered, self.page, self.limit)
    }
}

impl Listable for Project {
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
        Some(self.featured)
    }
    fn supports_facet(facet: Facet) -> bool {
        facet == Facet::Status
    }
    fn facet(&self, facet: Facet) -> Option<&str> {
        (facet == Facet::Status).then(|| self.status.as_str())
    }
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
    fn sort_value(&self, field: SortField) -> SortValue {
        match field {
            SortField::Order => SortValue::Number(i64::from(self.order)),
            SortField::CreatedAt => SortValue::Number(self.created_at.timestamp_millis()),
            SortField::UpdatedAt => SortValue::Number(self.updated_at.timestamp_millis()),
            SortField::Title | SortField::Name => SortValue::Text(self.title.clone()),
            SortField::Date => SortValue::Number(i64::from(self.start_date.num_days_from_ce())),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_data {
    use super::*;
    use chrono::TimeZone;

    pub fn project(id: &str, order: i32, featured: bool, status: ProjectStatus) -> Project {
        let created = Utc.with_ymd_and_hms(2024, 1, order.max(1) as u32, 0, 0, 0).unwrap();
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: format!("Description of {id}"),
            short_description: None,
            technologies: vec!["Rust".to_string(), "Actix".to_string()],
            github_url: None,
            live_url: None,
            images: Vec::new(),
            status,
            featured,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            team_size: Some(1),
            my_role: None,
            challenges: None,
            learnings: None,
            is_visible: true,
            order,
            created_at: created,
            updated_at: created,
        }
    }
}
