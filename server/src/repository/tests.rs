//! Repository Integration Tests
//!
//! Tests for MemoryPodRepository through the PodRepository trait.

#[cfg(test)]
mod tests {
    use crate::domain::SortOrder;
    use crate::repository::{MemoryPodRepository, PodRepository};

    fn setup_repo() -> MemoryPodRepository {
        MemoryPodRepository::new()
    }

    #[tokio::test]
    async fn test_create_pod() {
        let repo = setup_repo();

        let (pod, total) = repo.create("Test".to_string()).await.expect("create failed");

        assert_eq!(pod.id, 1);
        assert_eq!(pod.title, "Test");
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_created_pod_appears_in_listing_once() {
        let repo = setup_repo();
        repo.create("Pod 1".to_string()).await.unwrap();
        repo.create("Pod 2".to_string()).await.unwrap();
        let (created, _) = repo.create("Pod 3".to_string()).await.unwrap();

        let (pods, total) = repo
            .paginate(1, 10, SortOrder::NewestFirst)
            .await
            .expect("paginate failed");

        assert_eq!(total, 3);
        let matches = pods.iter().filter(|pod| pod.id == created.id).count();
        assert_eq!(matches, 1);
        assert_eq!(pods[0].id, created.id);
    }

    #[tokio::test]
    async fn test_paginate_slices_by_page() {
        let repo = setup_repo();
        for i in 1..=15 {
            repo.create(format!("Pod {i}")).await.unwrap();
        }

        let (first, total) = repo.paginate(1, 5, SortOrder::OldestFirst).await.unwrap();
        let (second, _) = repo.paginate(2, 5, SortOrder::OldestFirst).await.unwrap();

        assert_eq!(total, 15);
        assert_eq!(first.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(second.iter().map(|p| p.id).collect::<Vec<_>>(), vec![6, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn test_remove_pod() {
        let repo = setup_repo();
        let (pod, _) = repo.create("To delete".to_string()).await.unwrap();

        let (removed, total) = repo.remove(pod.id).await.expect("remove failed");
        assert!(removed);
        assert_eq!(total, 0);

        let (removed_again, total) = repo.remove(pod.id).await.unwrap();
        assert!(!removed_again);
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_empty_repository_paginates_to_nothing() {
        let repo = setup_repo();

        let (pods, total) = repo.paginate(1, 5, SortOrder::NewestFirst).await.unwrap();

        assert!(pods.is_empty());
        assert_eq!(total, 0);
    }
}
