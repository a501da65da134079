use std::time::Duration;

/// Delay of every mock service call.
pub const MOCK_DELAY_MS: u64 = 500;

/// Artificial delay applied by the fixture-backed services so callers see
/// network-like timing during local development.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn simulated() -> Self {
        Self { enabled: true }
    }

    pub fn none() -> Self {
        Self { enabled: false }
    }

    pub fn from_flag(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn wait(&self, millis: u64) {
        if self.enabled {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn disabled_latency_returns_immediately() {
        let start = Instant::now();
        Latency::none().wait(5_000).await;

        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_latency_sleeps() {
        let start = tokio::time::Instant::now();
        Latency::simulated().wait(300).await;

        assert!(start.elapsed() >= Duration::from_millis(300));
    }
}
