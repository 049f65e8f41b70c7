//! In-memory LRU cache in front of a [`DataSource`].
//!
//! Responses are keyed by endpoint. Schedule, roster and defense ranks change
//! at most daily, so once fetched they are served from memory for the rest of
//! the session; player payloads are cached too unless `refresh_players` is set.

use lru::LruCache;
use std::{num::NonZeroUsize, sync::Mutex};
use tracing::debug;

use crate::{
    cli::types::PlayerId,
    nba::{
        types::{DefenseRanks, PlayerPayload, RosterEntry, Schedule},
        DataSource,
    },
    Result,
};

/// Default number of cached responses.
pub const DEFAULT_CACHE_CAPACITY: usize = 8;

/// Cache key: one entry per endpoint, one per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Schedule,
    Roster,
    DefenseRanks,
    Player(PlayerId),
}

#[derive(Debug, Clone)]
enum CachedValue {
    Schedule(Schedule),
    Roster(Vec<RosterEntry>),
    DefenseRanks(DefenseRanks),
    Player(PlayerPayload),
}

/// Wraps a [`DataSource`] with an LRU response cache.
///
/// A capacity of 0 disables caching entirely.
pub struct CachedSource<D> {
    inner: D,
    memory_cache: Option<Mutex<LruCache<Endpoint, CachedValue>>>,
    refresh_players: bool,
}

impl<D> CachedSource<D> {
    pub fn new(inner: D, capacity: usize) -> Self {
        Self {
            inner,
            memory_cache: NonZeroUsize::new(capacity)
                .map(|cap| Mutex::new(LruCache::new(cap))),
            refresh_players: false,
        }
    }

    /// Always refetch player payloads, still caching the latest one.
    pub fn with_refresh_players(mut self, refresh: bool) -> Self {
        self.refresh_players = refresh;
        self
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Number of responses currently held.
    pub fn len(&self) -> usize {
        self.memory_cache.as_ref().map_or(0, |cache| {
            cache.lock().unwrap_or_else(|e| e.into_inner()).len()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached response.
    pub fn clear(&self) {
        if let Some(cache) = &self.memory_cache {
            cache.lock().unwrap_or_else(|e| e.into_inner()).clear();
        }
    }

    fn lookup(&self, key: &Endpoint) -> Option<CachedValue> {
        let cache = self.memory_cache.as_ref()?;
        let hit = cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned();
        if hit.is_some() {
            debug!(?key, "cache hit");
        }
        hit
    }

    fn store(&self, key: Endpoint, value: CachedValue) {
        if let Some(cache) = &self.memory_cache {
            cache
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .put(key, value);
        }
    }
}

impl<D: DataSource + Sync> DataSource for CachedSource<D> {
    async fn get_schedule(&self) -> Result<Schedule> {
        if let Some(CachedValue::Schedule(schedule)) = self.lookup(&Endpoint::Schedule) {
            return Ok(schedule);
        }
        let schedule = self.inner.get_schedule().await?;
        self.store(Endpoint::Schedule, CachedValue::Schedule(schedule.clone()));
        Ok(schedule)
    }

    async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
        if let Some(CachedValue::Roster(roster)) = self.lookup(&Endpoint::Roster) {
            return Ok(roster);
        }
        let roster = self.inner.get_roster().await?;
        self.store(Endpoint::Roster, CachedValue::Roster(roster.clone()));
        Ok(roster)
    }

    async fn get_defense_ranks(&self) -> Result<DefenseRanks> {
        if let Some(CachedValue::DefenseRanks(ranks)) = self.lookup(&Endpoint::DefenseRanks) {
            return Ok(ranks);
        }
        let ranks = self.inner.get_defense_ranks().await?;
        self.store(Endpoint::DefenseRanks, CachedValue::DefenseRanks(ranks.clone()));
        Ok(ranks)
    }

    async fn get_player(&self, id: PlayerId) -> Result<PlayerPayload> {
        let key = Endpoint::Player(id);
        if !self.refresh_players {
            if let Some(CachedValue::Player(payload)) = self.lookup(&key) {
                return Ok(payload);
            }
        }
        let payload = self.inner.get_player(id).await?;
        self.store(key, CachedValue::Player(payload.clone()));
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;
    use crate::nba::types::SeasonStats;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and fails player lookups for id 0.
    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl CountingSource {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl DataSource for CountingSource {
        async fn get_schedule(&self) -> Result<Schedule> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Schedule::new())
        }

        async fn get_roster(&self) -> Result<Vec<RosterEntry>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn get_defense_ranks(&self) -> Result<DefenseRanks> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DefenseRanks::new())
        }

        async fn get_player(&self, id: PlayerId) -> Result<PlayerPayload> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if id.as_u64() == 0 {
                return Err(TrackerError::PlayerNotFound { id: id.to_string() });
            }
            Ok(PlayerPayload {
                stats: SeasonStats {
                    name: format!("Player {}", id),
                    ..Default::default()
                },
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_second_lookup_is_served_from_memory() {
        let source = CachedSource::new(CountingSource::default(), 4);

        source.get_schedule().await.unwrap();
        source.get_schedule().await.unwrap();
        source.get_roster().await.unwrap();
        source.get_roster().await.unwrap();

        assert_eq!(source.inner().calls(), 2);
        assert_eq!(source.len(), 2);
    }

    #[tokio::test]
    async fn test_players_are_cached_per_id() {
        let source = CachedSource::new(CountingSource::default(), 4);

        let a = source.get_player(PlayerId::new(2544)).await.unwrap();
        let b = source.get_player(PlayerId::new(2544)).await.unwrap();
        source.get_player(PlayerId::new(201939)).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(source.inner().calls(), 2);
    }

    #[tokio::test]
    async fn test_refresh_players_bypasses_lookup() {
        let source =
            CachedSource::new(CountingSource::default(), 4).with_refresh_players(true);

        source.get_player(PlayerId::new(2544)).await.unwrap();
        source.get_player(PlayerId::new(2544)).await.unwrap();

        assert_eq!(source.inner().calls(), 2);
        assert_eq!(source.len(), 1);
    }

    #[tokio::test]
    async fn test_zero_capacity_disables_cache() {
        let source = CachedSource::new(CountingSource::default(), 0);

        source.get_defense_ranks().await.unwrap();
        source.get_defense_ranks().await.unwrap();

        assert_eq!(source.inner().calls(), 2);
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let source = CachedSource::new(CountingSource::default(), 4);

        assert!(source.get_player(PlayerId::new(0)).await.is_err());
        assert!(source.get_player(PlayerId::new(0)).await.is_err());

        assert_eq!(source.inner().calls(), 2);
        assert!(source.is_empty());
    }

    #[tokio::test]
    async fn test_least_recently_used_entry_is_evicted() {
        let source = CachedSource::new(CountingSource::default(), 2);

        source.get_player(PlayerId::new(1)).await.unwrap();
        source.get_player(PlayerId::new(2)).await.unwrap();
        source.get_player(PlayerId::new(3)).await.unwrap();
        source.get_player(PlayerId::new(1)).await.unwrap();

        assert_eq!(source.inner().calls(), 4);
        assert_eq!(source.len(), 2);

        source.clear();
        assert!(source.is_empty());
    }
}
