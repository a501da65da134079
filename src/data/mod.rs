use serde::Deserialize;
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::ContactMessage;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::experience::application::domain::entities::Experience;
use crate::modules::memory::application::domain::entities::Memory;
use crate::modules::navigation::application::domain::entities::{NavigationItem, PortfolioSettings};
use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack, User};
use crate::modules::project::application::domain::entities::Project;

const PORTFOLIO_JSON: &str = include_str!("portfolio.json");

/// Seed data for the mock and static services.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioFixtures {
    pub user: User,
    pub social_links: Vec<SocialLink>,
    pub tech_stack: Vec<TechStack>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub memories: Vec<Memory>,
    pub settings: PortfolioSettings,
    pub navigation: Vec<NavigationItem>,
    pub messages: Vec<ContactMessage>,
}

impl PortfolioFixtures {
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(PORTFOLIO_JSON)
    }
}

/// Identifier for a record created by the mock services, e.g. `project-<uuid>`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
