use async_trait::async_trait;

use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageStatus,
};
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::education::application::domain::entities::{
    Education, EducationListParams,
};
use crate::modules::education::application::ports::outgoing::EducationQuery;
use crate::modules::experience::application::domain::entities::{
    Experience, ExperienceListParams,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::memory::application::domain::entities::{Memory, MemoryListParams};
use crate::modules::memory::application::ports::outgoing::MemoryQuery;
use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings,
};
use crate::modules::navigation::application::ports::outgoing::NavigationQuery;
use crate::modules::profile::application::domain::entities::{Skill, SocialLink, TechStack, User};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::modules::project::application::domain::entities::{Project, ProjectListParams};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::error::ServiceError;

/// Every call fails the way the live client does when the API is down.
pub struct OfflineUpstream;

fn offline<T>() -> Result<T, ServiceError> {
    Err(ServiceError::Network("connection refused".to_string()))
}

#[async_trait]
impl ProfileQuery for OfflineUpstream {
    async fn get_user(&self) -> Result<ApiResponse<User>, ServiceError> {
        offline()
    }
    async fn get_social_links(&self) -> Result<ApiResponse<Vec<SocialLink>>, ServiceError> {
        offline()
    }
    async fn get_tech_stack(&self) -> Result<ApiResponse<Vec<TechStack>>, ServiceError> {
        offline()
    }
    async fn get_skills(&self) -> Result<ApiResponse<Vec<Skill>>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl ProjectQuery for OfflineUpstream {
    async fn get_projects(
        &self,
        _params: ProjectListParams,
    ) -> Result<PaginatedResponse<Project>, ServiceError> {
        offline()
    }
    async fn get_project(&self, _id: &str) -> Result<ApiResponse<Project>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl ExperienceQuery for OfflineUpstream {
    async fn get_experiences(
        &self,
        _params: ExperienceListParams,
    ) -> Result<PaginatedResponse<Experience>, ServiceError> {
        offline()
    }
    async fn get_experience(&self, _id: &str) -> Result<ApiResponse<Experience>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl EducationQuery for OfflineUpstream {
    async fn get_education(
        &self,
        _params: EducationListParams,
    ) -> Result<PaginatedResponse<Education>, ServiceError> {
        offline()
    }
    async fn get_education_by_id(&self, _id: &str) -> Result<ApiResponse<Education>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl MemoryQuery for OfflineUpstream {
    async fn get_memories(
        &self,
        _params: MemoryListParams,
    ) -> Result<PaginatedResponse<Memory>, ServiceError> {
        offline()
    }
    async fn get_memory(&self, _id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl NavigationQuery for OfflineUpstream {
    async fn get_navigation(&self) -> Result<ApiResponse<Vec<NavigationItem>>, ServiceError> {
        offline()
    }
    async fn get_settings(&self) -> Result<ApiResponse<PortfolioSettings>, ServiceError> {
        offline()
    }
}

#[async_trait]
impl ContactRepository for OfflineUpstream {
    async fn send_message(
        &self,
        _form: ContactForm,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        offline()
    }
    async fn update_message_status(
        &self,
        _id: &str,
        _status: MessageStatus,
    ) -> Result<ApiResponse<ContactMessage>, ServiceError> {
        offline()
    }
    async fn delete_message(&self, _id: &str) -> Result<ApiResponse<()>, ServiceError> {
        offline()
    }
}
