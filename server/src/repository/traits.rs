//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for pod data access.
//! Implementations can use in-memory storage, SQLite, etc.

use async_trait::async_trait;
use crate::domain::{DomainResult, Pod, SortOrder};

/// Data access for the pod collection
///
/// Mutating operations report the collection size after the change so the
/// API layer can return it alongside the result.
#[async_trait]
pub trait PodRepository: Send + Sync {
    /// Sorted page of pods plus the total collection size
    async fn paginate(
        &self,
        page: i64,
        page_size: i64,
        sort_by: SortOrder,
    ) -> DomainResult<(Vec<Pod>, usize)>;

    /// Append a new pod, returning it and the new total
    async fn create(&self, title: String) -> DomainResult<(Pod, usize)>;

    /// Remove a pod by id, reporting whether it existed and the new total
    async fn remove(&self, id: u32) -> DomainResult<(bool, usize)>;
}
