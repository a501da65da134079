use crate::api::schemas::ErrorResponse;
use crate::shared::api::Pagination;
use utoipa::OpenApi;

use crate::modules::app::application::store::{Preferences, UiTheme};
use crate::modules::contact::application::domain::entities::{
    ContactForm, ContactMessage, MessageStatus,
};
use crate::modules::education::application::domain::entities::{Certificate, Education};
use crate::modules::experience::application::domain::entities::{
    EmploymentType, Experience, LocationType,
};
use crate::modules::memory::application::domain::entities::{Memory, MemoryImage, Mood};
use crate::modules::navigation::application::domain::entities::{
    NavigationItem, PortfolioSettings, SocialLinksPosition, Theme,
};
use crate::modules::profile::adapter::incoming::web::routes::{AboutSection, TechStackCard};
use crate::modules::profile::application::domain::entities::{
    Skill, SkillCategory, SocialLink, SocialPlatform, TechCategory, TechIcon, TechStack, User,
};
use crate::modules::project::application::domain::entities::{
    Project, ProjectImage, ProjectStatus,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read API over the portfolio's profile, projects, history and settings"
    ),
    paths(
        // Profile
        crate::modules::profile::adapter::incoming::web::routes::get_user_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_social_links_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_tech_stack_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::profile::adapter::incoming::web::routes::get_about_section_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,

        // Experience and education
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_experience_handler,
        crate::modules::education::adapter::incoming::web::routes::get_education_handler,
        crate::modules::education::adapter::incoming::web::routes::get_education_by_id_handler,

        // Memories
        crate::modules::memory::adapter::incoming::web::routes::get_memories_handler,
        crate::modules::memory::adapter::incoming::web::routes::get_memory_handler,

        // Navigation and settings
        crate::modules::navigation::adapter::incoming::web::routes::get_navigation_handler,
        crate::modules::navigation::adapter::incoming::web::routes::get_settings_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::send_message_handler,

        // UI preferences
        crate::modules::app::adapter::incoming::web::routes::get_preferences_handler,
        crate::modules::app::adapter::incoming::web::routes::update_preferences_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            Pagination,

            User,
            SocialLink,
            SocialPlatform,
            TechStack,
            TechCategory,
            TechIcon,
            TechStackCard,
            Skill,
            SkillCategory,
            AboutSection,

            Project,
            ProjectImage,
            ProjectStatus,
            Experience,
            EmploymentType,
            LocationType,
            Education,
            Certificate,
            Memory,
            MemoryImage,
            Mood,

            NavigationItem,
            PortfolioSettings,
            Theme,
            SocialLinksPosition,

            ContactForm,
            ContactMessage,
            MessageStatus,

            Preferences,
            UiTheme
        )
    ),
    tags(
        (name = "profile", description = "Owner profile, social links, tech stack and skills"),
        (name = "sections", description = "Pre-assembled page sections"),
        (name = "projects", description = "Project showcase"),
        (name = "experience", description = "Work history"),
        (name = "education", description = "Degrees and certificates"),
        (name = "memories", description = "Photo memories"),
        (name = "navigation", description = "Menu entries and site settings"),
        (name = "contact", description = "Contact form"),
        (name = "preferences", description = "Persisted UI preferences"),
    )
)]
pub struct ApiDoc;
