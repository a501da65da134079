pub mod api;
pub mod config;
pub mod data;
pub mod health;
pub mod modules;
pub mod service_config;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::data::PortfolioFixtures;
use crate::modules::app::application::store::AppStore;
use crate::modules::contact::application::ContactHooks;
use crate::modules::education::application::EducationHooks;
use crate::modules::experience::application::ExperienceHooks;
use crate::modules::media::application::ports::outgoing::MediaRepository;
use crate::modules::memory::application::MemoryHooks;
use crate::modules::navigation::application::NavigationHooks;
use crate::modules::profile::application::ProfileHooks;
use crate::modules::project::application::ProjectHooks;
use crate::service_config::{PortfolioServices, ServiceConfig};
use crate::shared::api::json_config::{custom_json_config, custom_query_config};
use crate::shared::http::ApiClient;
use crate::shared::storage::{FileLocalStorage, LocalStorage};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<ProfileHooks>,
    pub projects: Arc<ProjectHooks>,
    pub experiences: Arc<ExperienceHooks>,
    pub education: Arc<EducationHooks>,
    pub memories: Arc<MemoryHooks>,
    pub navigation: Arc<NavigationHooks>,
    pub contact: Arc<ContactHooks>,
    pub media: Arc<dyn MediaRepository + Send + Sync>,
    pub app_store: Arc<AppStore>,
    /// `mock`, `static` or `api`.
    pub service_mode: &'static str,
}

impl AppState {
    pub fn new(
        services: PortfolioServices,
        storage: Arc<dyn LocalStorage>,
        service_mode: &'static str,
    ) -> Self {
        let app_store = Arc::new(AppStore::new(storage));

        Self {
            profile: Arc::new(ProfileHooks::new(
                services.profile_query,
                services.profile_repository,
                Arc::clone(&app_store),
            )),
            projects: Arc::new(ProjectHooks::new(
                services.project_query,
                services.project_repository,
            )),
            experiences: Arc::new(ExperienceHooks::new(
                services.experience_query,
                services.experience_repository,
            )),
            education: Arc::new(EducationHooks::new(
                services.education_query,
                services.education_repository,
            )),
            memories: Arc::new(MemoryHooks::new(
                services.memory_query,
                services.memory_repository,
            )),
            navigation: Arc::new(NavigationHooks::new(
                services.navigation_query,
                services.navigation_repository,
            )),
            contact: Arc::new(ContactHooks::new(
                services.contact_query,
                services.contact_repository,
                Arc::clone(&app_store),
            )),
            media: services.media,
            app_store,
            service_mode,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    info!(
        environment = %config.environment,
        api_base_url = %config.api_base_url,
        "configuration loaded"
    );

    let fixtures = Arc::new(PortfolioFixtures::load().context("bundled fixtures are invalid")?);

    let storage: Arc<dyn LocalStorage> = Arc::new(
        FileLocalStorage::open(&config.local_storage_path).with_context(|| {
            format!(
                "cannot open local storage at {}",
                config.local_storage_path.display()
            )
        })?,
    );

    let client = ApiClient::new(&config.api_base_url, config.api_timeout, Arc::clone(&storage))
        .context("cannot build HTTP client")?;

    let services = ServiceConfig::from_config(&config, fixtures, client);
    let state = AppState::new(services, storage, config.service_mode());

    let server_url = config.server_url();
    info!("Listening on http://{server_url} (docs at /swagger-ui/)");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_user_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_social_links_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_tech_stack_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::modules::profile::adapter::incoming::web::routes::get_about_section_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_project_handler);
    // Experience
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(crate::modules::experience::adapter::incoming::web::routes::get_experience_handler);
    // Education
    cfg.service(crate::modules::education::adapter::incoming::web::routes::get_education_handler);
    cfg.service(
        crate::modules::education::adapter::incoming::web::routes::get_education_by_id_handler,
    );
    // Memories
    cfg.service(crate::modules::memory::adapter::incoming::web::routes::get_memories_handler);
    cfg.service(crate::modules::memory::adapter::incoming::web::routes::get_memory_handler);
    // Navigation and settings
    cfg.service(crate::modules::navigation::adapter::incoming::web::routes::get_navigation_handler);
    cfg.service(crate::modules::navigation::adapter::incoming::web::routes::get_settings_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::send_message_handler);
    // UI preferences
    cfg.service(crate::modules::app::adapter::incoming::web::routes::get_preferences_handler);
    cfg.service(crate::modules::app::adapter::incoming::web::routes::update_preferences_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
