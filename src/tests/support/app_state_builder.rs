use std::sync::Arc;

use actix_web::web;

use crate::data::PortfolioFixtures;
use crate::modules::contact::application::ports::outgoing::ContactRepository;
use crate::modules::education::application::ports::outgoing::EducationQuery;
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::memory::application::ports::outgoing::MemoryQuery;
use crate::modules::navigation::application::ports::outgoing::NavigationQuery;
use crate::modules::profile::application::ports::outgoing::ProfileQuery;
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::service_config::{PortfolioServices, ServiceConfig};
use crate::shared::latency::Latency;
use crate::shared::storage::{LocalStorage, MemoryLocalStorage};
use crate::AppState;

/// Mock-backed [`AppState`] with no latency; individual ports can be swapped.
pub struct TestAppStateBuilder {
    services: PortfolioServices,
    storage: Arc<dyn LocalStorage>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let fixtures = Arc::new(PortfolioFixtures::load().expect("bundled fixtures"));
        Self {
            services: ServiceConfig::mock(fixtures, Latency::none()),
            storage: Arc::new(MemoryLocalStorage::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_profile_query(mut self, query: impl ProfileQuery + 'static) -> Self {
        self.services.profile_query = Arc::new(query);
        self
    }

    pub fn with_project_query(mut self, query: impl ProjectQuery + 'static) -> Self {
        self.services.project_query = Arc::new(query);
        self
    }

    pub fn with_experience_query(mut self, query: impl ExperienceQuery + 'static) -> Self {
        self.services.experience_query = Arc::new(query);
        self
    }

    pub fn with_education_query(mut self, query: impl EducationQuery + 'static) -> Self {
        self.services.education_query = Arc::new(query);
        self
    }

    pub fn with_memory_query(mut self, query: impl MemoryQuery + 'static) -> Self {
        self.services.memory_query = Arc::new(query);
        self
    }

    pub fn with_navigation_query(mut self, query: impl NavigationQuery + 'static) -> Self {
        self.services.navigation_query = Arc::new(query);
        self
    }

    pub fn with_contact_repository(
        mut self,
        repository: impl ContactRepository + 'static,
    ) -> Self {
        self.services.contact_repository = Arc::new(repository);
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn LocalStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState::new(self.services, self.storage, "mock"))
    }
}
