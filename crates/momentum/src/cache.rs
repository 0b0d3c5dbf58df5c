//! Memoization of panel responses.
//!
//! Pure recomputation avoidance: a miss just means the panel is built again.

use crate::panel::PanelData;
use crate::scoring::Pillar;
use crate::series::Timeframe;
use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_CAPACITY: u64 = 1_000;
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanelCacheKey {
    pub user: String,
    pub timeframe: Timeframe,
    pub pillar: Pillar,
    pub anchor_id: String,
    pub algorithm_version: String,
}

impl PanelCacheKey {
    /// `user:timeframe:pillar:anchor:version`, for logs
    pub fn composite(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.user, self.timeframe, self.pillar, self.anchor_id, self.algorithm_version
        )
    }
}

/// Panel plus the raw score it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelResponse {
    pub panel: PanelData,
    pub score: f64,
    pub tags: Vec<String>,
    pub anchor_id: String,
}

pub struct PanelCache {
    cache: Cache<PanelCacheKey, PanelResponse>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PanelCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();
        Self {
            cache,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &PanelCacheKey) -> Option<PanelResponse> {
        match self.cache.get(key) {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn insert(&self, key: PanelCacheKey, response: PanelResponse) {
        self.cache.insert(key, response);
    }

    /// Cached value, or compute and store it. Errors are not cached.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: PanelCacheKey,
        compute: impl FnOnce() -> Result<PanelResponse, E>,
    ) -> Result<PanelResponse, E> {
        if let Some(hit) = self.get(&key) {
            log::debug!("Panel cache hit: {}", key.composite());
            return Ok(hit);
        }
        let response = compute()?;
        self.insert(key, response.clone());
        Ok(response)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl Default for PanelCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}
