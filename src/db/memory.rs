use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::OutfitRecommendation;

/// Page size used when a listing does not ask for one
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page a listing may return
pub const MAX_PAGE_SIZE: usize = 200;

/// Records kept when no capacity is configured
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

#[derive(Default)]
struct History {
    /// IDs in insertion order, oldest at the front
    order: VecDeque<Uuid>,
    records: HashMap<Uuid, OutfitRecommendation>,
}

/// Bounded in-memory history of produced recommendations
///
/// Once `capacity` records are held, each insert evicts the oldest one.
/// Cloning is cheap; clones share the same history.
#[derive(Clone)]
pub struct RecommendationStore {
    inner: Arc<RwLock<History>>,
    capacity: usize,
}

impl Default for RecommendationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a store holding at most `capacity` records (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(History::default())),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stores a record, returning the number of records now held
    pub async fn insert(&self, recommendation: OutfitRecommendation) -> usize {
        let mut inner = self.inner.write().await;

        inner.order.push_back(recommendation.id);
        inner.records.insert(recommendation.id, recommendation);

        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.records.remove(&evicted);
                tracing::debug!(recommendation_id = %evicted, "Evicted oldest recommendation");
            }
        }

        inner.records.len()
    }

    pub async fn get(&self, id: Uuid) -> Option<OutfitRecommendation> {
        let inner = self.inner.read().await;
        inner.records.get(&id).cloned()
    }

    /// Most recent recommendations first, at most `limit` of them
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_SIZE`.
    pub async fn list(&self, limit: usize) -> Vec<OutfitRecommendation> {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let inner = self.inner.read().await;

        inner
            .order
            .iter()
            .rev()
            .filter_map(|id| inner.records.get(id))
            .take(limit)
            .cloned()
            .collect()
    }
}
