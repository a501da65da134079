use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use tokio::time::Instant;

use crate::shared::error::ServiceError;
use crate::shared::query::QueryKey;

type SharedFetch<V> = Shared<BoxFuture<'static, Result<V, ServiceError>>>;

/// Settled results older than this are refetched on the next read.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
/// Settled entries kept per cache; the oldest are evicted first.
pub const DEFAULT_CAPACITY: usize = 256;

enum Entry<V> {
    Pending(SharedFetch<V>),
    Ready(V, Instant),
    Failed(ServiceError, Instant),
}

impl<V> Entry<V> {
    fn settled_at(&self) -> Option<Instant> {
        match self {
            Entry::Pending(_) => None,
            Entry::Ready(_, at) | Entry::Failed(_, at) => Some(*at),
        }
    }
}

/// Snapshot of one cached query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<V> {
    pub data: Option<V>,
    pub is_loading: bool,
    pub error: Option<ServiceError>,
}

impl<V> QueryState<V> {
    pub fn idle() -> Self {
        Self {
            data: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn settled(result: Result<V, ServiceError>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                is_loading: false,
                error: None,
            },
            Err(error) => Self {
                data: None,
                is_loading: false,
                error: Some(error),
            },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> QueryState<U> {
        QueryState {
            data: self.data.map(f),
            is_loading: self.is_loading,
            error: self.error,
        }
    }

    pub fn into_result(self) -> Result<Option<V>, ServiceError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data),
        }
    }
}

/// Keyed cache of service results with in-flight request sharing.
///
/// The lock is only held to read or swap entries, never across an await.
/// Settled entries expire after `ttl`, and at most `capacity` of them are kept.
pub struct QueryCache<V> {
    name: &'static str,
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<QueryKey, Entry<V>>>,
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str) -> Self {
        Self::with_limits(name, DEFAULT_TTL, DEFAULT_CAPACITY)
    }

    pub fn with_limits(name: &'static str, ttl: Duration, capacity: usize) -> Self {
        Self {
            name,
            ttl,
            capacity: capacity.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the cached value for `key`, joins an in-flight fetch, or runs
    /// `fetcher`. Failed results are reported but never reused.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<V, ServiceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, ServiceError>> + Send + 'static,
    {
        let pending = {
            let mut entries = self.lock();
            let now = Instant::now();
            match entries.get(&key) {
                Some(Entry::Ready(value, at)) if now.duration_since(*at) < self.ttl => {
                    tracing::trace!(cache = self.name, %key, "cache hit");
                    return Ok(value.clone());
                }
                Some(Entry::Pending(fetch)) => {
                    tracing::trace!(cache = self.name, %key, "joining in-flight fetch");
                    fetch.clone()
                }
                _ => {
                    tracing::trace!(cache = self.name, %key, "fetching");
                    entries.remove(&key);
                    self.evict(&mut entries, now);
                    let fetch = fetcher().boxed().shared();
                    entries.insert(key.clone(), Entry::Pending(fetch.clone()));
                    fetch
                }
            }
        };

        let result = pending.clone().await;

        let mut entries = self.lock();
        // An invalidation may have dropped or replaced this fetch meanwhile.
        let still_current = matches!(
            entries.get(&key),
            Some(Entry::Pending(current)) if current.ptr_eq(&pending)
        );
        if still_current {
            let now = Instant::now();
            let settled = match &result {
                Ok(value) => Entry::Ready(value.clone(), now),
                Err(err) => Entry::Failed(err.clone(), now),
            };
            entries.insert(key, settled);
        }

        result
    }

    pub fn state(&self, key: &QueryKey) -> QueryState<V> {
        let entries = self.lock();
        match entries.get(key) {
            None => QueryState::idle(),
            Some(Entry::Pending(_)) => QueryState {
                data: None,
                is_loading: true,
                error: None,
            },
            Some(Entry::Ready(value, _)) => QueryState::settled(Ok(value.clone())),
            Some(Entry::Failed(err, _)) => QueryState::settled(Err(err.clone())),
        }
    }

    /// Drops every entry whose key starts with `prefix`.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        tracing::debug!(
            cache = self.name,
            %prefix,
            dropped = before - entries.len(),
            "cache invalidated"
        );
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Drops expired entries, then the oldest settled ones until a new key fits.
    /// In-flight fetches are never dropped.
    fn evict(&self, entries: &mut HashMap<QueryKey, Entry<V>>, now: Instant) {
        let ttl = self.ttl;
        entries.retain(|_, entry| {
            entry
                .settled_at()
                .map_or(true, |at| now.duration_since(at) < ttl)
        });

        if entries.len() < self.capacity {
            return;
        }

        let mut settled: Vec<(Instant, QueryKey)> = entries
            .iter()
            .filter_map(|(key, entry)| entry.settled_at().map(|at| (at, key.clone())))
            .collect();
        settled.sort_by_key(|(at, _)| *at);

        let excess = entries.len() + 1 - self.capacity;
        for (_, key) in settled.into_iter().take(excess) {
            entries.remove(&key);
        }
        tracing::debug!(cache = self.name, size = entries.len(), "cache evicted oldest entries");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<QueryKey, Entry<V>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn key(name: &str) -> QueryKey {
        QueryKey::new(&["items", name])
    }

    async fn counted(calls: Arc<AtomicUsize>, value: u32) -> Result<u32, ServiceError> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(value)
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_request() {
        let cache = QueryCache::<u32>::new("test");
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.fetch(key("a"), || counted(calls.clone(), 7)),
            cache.fetch(key("a"), || counted(calls.clone(), 99)),
        );

        assert_eq!(a.unwrap(), 7);
        assert_eq!(b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn distinct_keys_fetch_independently() {
        let cache = QueryCache::<u32>::new("test");
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.fetch(key("a"), || counted(calls.clone(), 1)),
            cache.fetch(key("b"), || counted(calls.clone(), 2)),
        );

        assert_eq!((a.unwrap(), b.unwrap()), (1, 2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn ready_value_is_served_from_cache() {
        let cache = QueryCache::<u32>::new("test");
        let calls = Arc::new(AtomicUsize::new(0));

        cache.fetch(key("a"), || counted(calls.clone(), 3)).await.unwrap();
        let again = cache.fetch(key("a"), || counted(calls.clone(), 4)).await.unwrap();

        assert_eq!(again, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.state(&key("a")).data, Some(3));
    }

    #[tokio::test]
    async fn failure_is_reported_then_retried() {
        let cache = QueryCache::<u32>::new("test");

        let err = cache
            .fetch(key("a"), || async { Err(ServiceError::Network("down".into())) })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::Network("down".into()));

        let state = cache.state(&key("a"));
        assert!(!state.is_loading);
        assert_eq!(state.error, Some(ServiceError::Network("down".into())));

        let value = cache.fetch(key("a"), || async { Ok(5) }).await.unwrap();
        assert_eq!(value, 5);
    }

    #[tokio::test]
    async fn invalidate_drops_prefix_only() {
        let cache = QueryCache::<u32>::new("test");
        cache.fetch(key("a"), || async { Ok(1) }).await.unwrap();
        cache
            .fetch(QueryKey::new(&["other"]), || async { Ok(2) })
            .await
            .unwrap();

        cache.invalidate(&QueryKey::new(&["items"]));

        assert_eq!(cache.state(&key("a")), QueryState::idle());
        assert_eq!(cache.state(&QueryKey::new(&["other"])).data, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_value_is_refetched() {
        let cache = QueryCache::<u32>::with_limits("test", Duration::from_secs(60), 8);
        let calls = Arc::new(AtomicUsize::new(0));

        cache.fetch(key("a"), || counted(calls.clone(), 1)).await.unwrap();
        tokio::time::advance(Duration::from_secs(30)).await;
        let fresh = cache.fetch(key("a"), || counted(calls.clone(), 2)).await.unwrap();
        tokio::time::advance(Duration::from_secs(61)).await;
        let refetched = cache.fetch(key("a"), || counted(calls.clone(), 3)).await.unwrap();

        assert_eq!((fresh, refetched), (1, 3));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_entries_are_dropped_on_next_miss() {
        let cache = QueryCache::<u32>::with_limits("test", Duration::from_secs(10), 100);
        for name in ["a", "b", "c"] {
            cache.fetch(key(name), || async { Ok(1) }).await.unwrap();
        }

        tokio::time::advance(Duration::from_secs(11)).await;
        cache.fetch(key("d"), || async { Ok(2) }).await.unwrap();

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.state(&key("a")), QueryState::idle());
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_keys_never_exceed_capacity() {
        let cache = QueryCache::<u32>::with_limits("test", DEFAULT_TTL, 16);

        for i in 0..1_000u32 {
            let tag = format!("t{i}");
            cache.fetch(key(&tag), move || async move { Ok(i) }).await.unwrap();
            tokio::time::advance(Duration::from_millis(1)).await;
        }

        assert_eq!(cache.len(), 16);
        // The newest keys survive.
        assert_eq!(cache.state(&key("t999")).data, Some(999));
        assert_eq!(cache.state(&key("t0")), QueryState::idle());
    }
}
