use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::store::listing::Listable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub is_external: bool,
    /// Target of an external link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl NavigationItem {
    /// In-page anchor for section links, the external url otherwise.
    pub fn href(&self) -> String {
        match (&self.url, self.is_external) {
            (Some(url), true) => url.clone(),
            _ => format!("#{}", self.slug),
        }
    }
}

impl Listable for NavigationItem {
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
        vec![self.name.as_str(), self.slug.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SocialLinksPosition {
    Sidebar,
    Footer,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSettings {
    pub id: String,
    pub theme: Theme,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub show_navigation: bool,
    pub show_sidebar: bool,
    pub enable_animations: bool,
    pub enable_particles: bool,
    pub social_links_position: SocialLinksPosition,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
    pub is_maintenance_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_js: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NavigationUpdate {
    pub items: Vec<NavigationItem>,
}
