//! Pod Store - In-Memory Collection
//!
//! Owns the pod list and the id counter. The pagination helper is a pure
//! function so it can serve any backing collection.

use crate::domain::{Pod, SortOrder};

/// Sort a copy of `pods` by id and cut out the requested page.
///
/// `page` is 1-based. Page and size arrive from the wire unvalidated; a
/// slice start that falls before the collection or past its end yields an
/// empty page rather than an error. The returned total is always the
/// unsliced collection size, so callers can derive the page count.
pub fn paginate_and_sort_pods(
    pods: &[Pod],
    page: i64,
    page_size: i64,
    sort_by: SortOrder,
) -> (Vec<Pod>, usize) {
    let total = pods.len();

    let mut sorted = pods.to_vec();
    match sort_by {
        SortOrder::NewestFirst => sorted.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::OldestFirst => sorted.sort_by(|a, b| a.id.cmp(&b.id)),
    }

    let start = (page - 1).saturating_mul(page_size);
    if start < 0 || start >= total as i64 {
        return (Vec::new(), total);
    }
    let start = start as usize;
    let end = start
        .saturating_add(page_size.max(0) as usize)
        .min(total);

    (sorted[start..end].to_vec(), total)
}

/// Ordered mutable pod collection plus the id counter
///
/// Constructed once per process and handed to the repository; lives only in
/// memory, so the collection is discarded on restart. Insertion order is
/// preserved; display order is computed at read time.
#[derive(Debug)]
pub struct PodStore {
    pods: Vec<Pod>,
    next_id: u32,
}

impl Default for PodStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PodStore {
    pub fn new() -> Self {
        Self {
            pods: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new pod with the next id and advance the counter.
    ///
    /// Titles are not checked for uniqueness.
    pub fn create(&mut self, title: String) -> Pod {
        let pod = Pod::new(self.next_id, title);
        self.pods.push(pod.clone());
        self.next_id += 1;
        pod
    }

    /// Remove the first pod with the given id.
    ///
    /// Returns whether anything was removed; the list is untouched when the
    /// id is absent.
    pub fn remove_by_id(&mut self, id: u32) -> bool {
        match self.pods.iter().position(|pod| pod.id == id) {
            Some(index) => {
                self.pods.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn pods(&self) -> &[Pod] {
        &self.pods
    }

    pub fn total(&self) -> usize {
        self.pods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(titles: &[&str]) -> PodStore {
        let mut store = PodStore::new();
        for title in titles {
            store.create(title.to_string());
        }
        store
    }

    #[test]
    fn test_paginate_ascending() {
        let pods = vec![
            Pod::new(3, "Pod 3"),
            Pod::new(1, "Pod 1"),
            Pod::new(2, "Pod 2"),
        ];
        let (page, total) = paginate_and_sort_pods(&pods, 1, 2, SortOrder::OldestFirst);

        assert_eq!(total, 3);
        assert_eq!(page, vec![Pod::new(1, "Pod 1"), Pod::new(2, "Pod 2")]);
    }

    #[test]
    fn test_paginate_descending() {
        let pods = vec![
            Pod::new(3, "Pod 3"),
            Pod::new(1, "Pod 1"),
            Pod::new(2, "Pod 2"),
        ];
        let (page, total) = paginate_and_sort_pods(&pods, 1, 2, SortOrder::NewestFirst);

        assert_eq!(total, 3);
        assert_eq!(page, vec![Pod::new(3, "Pod 3"), Pod::new(2, "Pod 2")]);
    }

    #[test]
    fn test_sort_orders_mirror_each_other() {
        let pods: Vec<Pod> = (1..=7).map(|id| Pod::new(id, format!("Pod {id}"))).collect();

        let (newest, newest_total) = paginate_and_sort_pods(&pods, 1, 7, SortOrder::NewestFirst);
        let (oldest, oldest_total) = paginate_and_sort_pods(&pods, 1, 7, SortOrder::OldestFirst);

        assert_eq!(newest_total, oldest_total);
        let reversed: Vec<Pod> = oldest.into_iter().rev().collect();
        assert_eq!(newest, reversed);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let pods = vec![Pod::new(1, "Pod 1"), Pod::new(2, "Pod 2")];
        let (page, total) = paginate_and_sort_pods(&pods, 3, 2, SortOrder::OldestFirst);

        assert_eq!(total, 2);
        assert!(page.is_empty());
    }

    #[test]
    fn test_negative_and_zero_pages_are_empty() {
        let pods: Vec<Pod> = (1..=5).map(|id| Pod::new(id, format!("Pod {id}"))).collect();

        for page in [-3, 0] {
            let (slice, total) = paginate_and_sort_pods(&pods, page, 5, SortOrder::NewestFirst);
            assert_eq!(total, 5);
            assert!(slice.is_empty(), "page {page} should be empty");
        }
    }

    #[test]
    fn test_empty_input() {
        let (page, total) = paginate_and_sort_pods(&[], 1, 2, SortOrder::OldestFirst);

        assert_eq!(total, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let pods = vec![Pod::new(2, "Pod 2"), Pod::new(1, "Pod 1")];
        let before = pods.clone();
        let _ = paginate_and_sort_pods(&pods, 1, 10, SortOrder::OldestFirst);

        assert_eq!(pods, before);
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = PodStore::new();

        let first = store.create("Pod 1".to_string());
        let second = store.create("Pod 2".to_string());

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.total(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = store_with(&["Pod 1", "Pod 2"]);

        assert!(store.remove_by_id(2));
        let next = store.create("Pod 3".to_string());

        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_remove_is_idempotent_on_absence() {
        let mut store = store_with(&["Pod 1", "Pod 2", "Pod 3"]);

        assert!(store.remove_by_id(2));
        assert!(!store.remove_by_id(2));
        assert_eq!(store.total(), 2);
    }

    #[test]
    fn test_remove_missing_id_leaves_list_untouched() {
        let mut store = store_with(&["Pod 1", "Pod 2"]);
        let before = store.pods().to_vec();

        assert!(!store.remove_by_id(99));
        assert_eq!(store.pods(), &before[..]);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let mut store = PodStore::new();
        assert!(!store.remove_by_id(1));
    }
}
