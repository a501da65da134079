use std::sync::Arc;

use async_trait::async_trait;

use crate::data::PortfolioFixtures;
use crate::modules::memory::application::domain::entities::{Memory, MemoryListParams};
use crate::modules::memory::application::ports::outgoing::MemoryQuery;
use crate::shared::api::{ApiResponse, PaginatedResponse};
use crate::shared::collection::find_required;
use crate::shared::error::ServiceError;
use crate::shared::latency::Latency;

pub struct MemoryStaticService {
    fixtures: Arc<PortfolioFixtures>,
    latency: Latency,
}

impl MemoryStaticService {
    pub fn new(fixtures: Arc<PortfolioFixtures>, latency: Latency) -> Self {
        Self { fixtures, latency }
    }
}

#[async_trait]
impl MemoryQuery for MemoryStaticService {
    async fn get_memories(
        &self,
        params: MemoryListParams,
    ) -> Result<PaginatedResponse<Memory>, ServiceError> {
        self.latency.wait(350).await;
        Ok(params.apply(&self.fixtures.memories).with_message("Success"))
    }

    async fn get_memory(&self, id: &str) -> Result<ApiResponse<Memory>, ServiceError> {
        self.latency.wait(200).await;
        let memory = find_required(&self.fixtures.memories, id, "Memory")?;
        Ok(ApiResponse::wrap(memory, Some("Success")))
    }
}
