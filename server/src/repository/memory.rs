//! In-Memory Repository
//!
//! `PodRepository` backed by a `PodStore` behind an async mutex. Requests
//! are serialized on the lock; there is no durability, the collection dies
//! with the process.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainResult, Pod, SortOrder};
use super::pod_store::{paginate_and_sort_pods, PodStore};
use super::traits::PodRepository;

/// In-memory implementation of the pod repository
#[derive(Debug, Default)]
pub struct MemoryPodRepository {
    store: Mutex<PodStore>,
}

impl MemoryPodRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PodRepository for MemoryPodRepository {
    async fn paginate(
        &self,
        page: i64,
        page_size: i64,
        sort_by: SortOrder,
    ) -> DomainResult<(Vec<Pod>, usize)> {
        let store = self.store.lock().await;
        Ok(paginate_and_sort_pods(store.pods(), page, page_size, sort_by))
    }

    async fn create(&self, title: String) -> DomainResult<(Pod, usize)> {
        let mut store = self.store.lock().await;
        let pod = store.create(title);
        Ok((pod, store.total()))
    }

    async fn remove(&self, id: u32) -> DomainResult<(bool, usize)> {
        let mut store = self.store.lock().await;
        let removed = store.remove_by_id(id);
        Ok((removed, store.total()))
    }
}
