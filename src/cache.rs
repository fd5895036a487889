//! Shared resource-list cache with per-kind invalidation accounting.
//!
//! One entry per resource kind, holding the last fetched list. Mutations
//! invalidate exactly their kind's entry so the next load refetches. There
//! is no coordination between concurrent fetches: the last response to land
//! wins.

use crate::config::ResourceKind;
use moka::future::Cache;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub struct ListCache {
    lists: Cache<ResourceKind, Arc<Vec<Value>>>,
    generations: [AtomicU64; ResourceKind::ALL.len()],
}

impl ListCache {
    pub fn new() -> Self {
        Self {
            lists: Cache::new(ResourceKind::ALL.len() as u64),
            generations: std::array::from_fn(|_| AtomicU64::new(0)),
        }
    }

    pub async fn get(&self, kind: ResourceKind) -> Option<Arc<Vec<Value>>> {
        self.lists.get(&kind).await
    }

    pub async fn put(&self, kind: ResourceKind, rows: Vec<Value>) -> Arc<Vec<Value>> {
        let rows = Arc::new(rows);
        self.lists.insert(kind, rows.clone()).await;
        rows
    }

    /// Evict the kind's entry and bump its generation counter.
    pub async fn invalidate(&self, kind: ResourceKind) {
        self.lists.invalidate(&kind).await;
        self.generations[kind.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// How many times the kind has been invalidated. Lets callers observe
    /// exactly how many invalidations a mutation caused.
    pub fn generation(&self, kind: ResourceKind) -> u64 {
        self.generations[kind.index()].load(Ordering::Relaxed)
    }
}

impl Default for ListCache {
    fn default() -> Self {
        Self::new()
    }
}
