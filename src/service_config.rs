use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::data::PortfolioFixtures;
use crate::modules::contact::adapter::outgoing::{ContactApiService, ContactMockService};
use crate::modules::contact::application::ports::outgoing::{ContactQuery, ContactRepository};
use crate::modules::education::adapter::outgoing::{
    EducationApiService, EducationMockService, EducationStaticService,
};
use crate::modules::education::application::ports::outgoing::{
    EducationQuery, EducationRepository,
};
use crate::modules::experience::adapter::outgoing::{
    ExperienceApiService, ExperienceMockService, ExperienceStaticService,
};
use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceRepository,
};
use crate::modules::media::adapter::outgoing::{MediaApiService, MediaMockService};
use crate::modules::media::application::ports::outgoing::MediaRepository;
use crate::modules::memory::adapter::outgoing::{
    MemoryApiService, MemoryMockService, MemoryStaticService,
};
use crate::modules::memory::application::ports::outgoing::{MemoryQuery, MemoryRepository};
use crate::modules::navigation::adapter::outgoing::{
    NavigationApiService, NavigationMockService, NavigationStaticService,
};
use crate::modules::navigation::application::ports::outgoing::{
    NavigationQuery, NavigationRepository,
};
use crate::modules::profile::adapter::outgoing::{
    ProfileApiService, ProfileMockService, ProfileStaticService,
};
use crate::modules::profile::application::ports::outgoing::{ProfileQuery, ProfileRepository};
use crate::modules::project::adapter::outgoing::{
    ProjectApiService, ProjectMockService, ProjectStaticService,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::shared::http::ApiClient;
use crate::shared::latency::Latency;

/// One reader and one writer per entity family, chosen once at startup.
#[derive(Clone)]
pub struct PortfolioServices {
    pub profile_query: Arc<dyn ProfileQuery + Send + Sync>,
    pub profile_repository: Arc<dyn ProfileRepository + Send + Sync>,
    pub project_query: Arc<dyn ProjectQuery + Send + Sync>,
    pub project_repository: Arc<dyn ProjectRepository + Send + Sync>,
    pub experience_query: Arc<dyn ExperienceQuery + Send + Sync>,
    pub experience_repository: Arc<dyn ExperienceRepository + Send + Sync>,
    pub education_query: Arc<dyn EducationQuery + Send + Sync>,
    pub education_repository: Arc<dyn EducationRepository + Send + Sync>,
    pub memory_query: Arc<dyn MemoryQuery + Send + Sync>,
    pub memory_repository: Arc<dyn MemoryRepository + Send + Sync>,
    pub navigation_query: Arc<dyn NavigationQuery + Send + Sync>,
    pub navigation_repository: Arc<dyn NavigationRepository + Send + Sync>,
    pub contact_query: Arc<dyn ContactQuery + Send + Sync>,
    pub contact_repository: Arc<dyn ContactRepository + Send + Sync>,
    pub media: Arc<dyn MediaRepository + Send + Sync>,
}

pub struct ServiceConfig;

impl ServiceConfig {
    /// Mock services when `use_mock_services` is on, otherwise [`ServiceConfig::select`].
    pub fn from_config(
        config: &AppConfig,
        fixtures: Arc<PortfolioFixtures>,
        client: ApiClient,
    ) -> PortfolioServices {
        let latency = Latency::from_flag(config.simulate_latency);

        let services = if config.use_mock_services {
            Self::mock(fixtures, latency)
        } else {
            Self::select(config.use_static_services, fixtures, latency, client)
        };

        info!(
            mode = config.service_mode(),
            latency = latency.is_enabled(),
            "entity services selected"
        );
        services
    }

    /// Static or live readers, live writers.
    ///
    /// The inbox has no static copy, so contact reads always go live.
    pub fn select(
        use_static: bool,
        fixtures: Arc<PortfolioFixtures>,
        latency: Latency,
        client: ApiClient,
    ) -> PortfolioServices {
        let profile = Arc::new(ProfileApiService::new(client.clone()));
        let projects = Arc::new(ProjectApiService::new(client.clone()));
        let experiences = Arc::new(ExperienceApiService::new(client.clone()));
        let education = Arc::new(EducationApiService::new(client.clone()));
        let memories = Arc::new(MemoryApiService::new(client.clone()));
        let navigation = Arc::new(NavigationApiService::new(client.clone()));
        let contact = Arc::new(ContactApiService::new(client.clone()));
        let media = Arc::new(MediaApiService::new(client));

        if !use_static {
            return PortfolioServices {
                profile_query: profile.clone(),
                profile_repository: profile,
                project_query: projects.clone(),
                project_repository: projects,
                experience_query: experiences.clone(),
                experience_repository: experiences,
                education_query: education.clone(),
                education_repository: education,
                memory_query: memories.clone(),
                memory_repository: memories,
                navigation_query: navigation.clone(),
                navigation_repository: navigation,
                contact_query: contact.clone(),
                contact_repository: contact,
                media,
            };
        }

        PortfolioServices {
            profile_query: Arc::new(ProfileStaticService::new(fixtures.clone(), latency)),
            profile_repository: profile,
            project_query: Arc::new(ProjectStaticService::new(fixtures.clone(), latency)),
            project_repository: projects,
            experience_query: Arc::new(ExperienceStaticService::new(fixtures.clone(), latency)),
            experience_repository: experiences,
            education_query: Arc::new(EducationStaticService::new(fixtures.clone(), latency)),
            education_repository: education,
            memory_query: Arc::new(MemoryStaticService::new(fixtures.clone(), latency)),
            memory_repository: memories,
            navigation_query: Arc::new(NavigationStaticService::new(fixtures, latency)),
            navigation_repository: navigation,
            contact_query: contact.clone(),
            contact_repository: contact,
            media,
        }
    }

    /// Fixture-backed readers and writers for local development.
    pub fn mock(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> PortfolioServices {
        let profile = Arc::new(ProfileMockService::new(fixtures.clone(), latency));
        let projects = Arc::new(ProjectMockService::new(fixtures.clone(), latency));
        let experiences = Arc::new(ExperienceMockService::new(fixtures.clone(), latency));
        let education = Arc::new(EducationMockService::new(fixtures.clone(), latency));
        let memories = Arc::new(MemoryMockService::new(fixtures.clone(), latency));
        let navigation = Arc::new(NavigationMockService::new(fixtures.clone(), latency));
        let contact = Arc::new(ContactMockService::new(fixtures, latency));

        PortfolioServices {
            profile_query: profile.clone(),
            profile_repository: profile,
            project_query: projects.clone(),
            project_repository: projects,
            experience_query: experiences.clone(),
            experience_repository: experiences,
            education_query: education.clone(),
            education_repository: education,
            memory_query: memories.clone(),
            memory_repository: memories,
            navigation_query: navigation.clone(),
            navigation_repository: navigation,
            contact_query: contact.clone(),
            contact_repository: contact,
            media: Arc::new(MediaMockService::new(latency)),
        }
    }
}
