//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the pod
//! list. The optimistic helpers patch local state after a mutation; the
//! reconciling list fetch then replaces it wholesale with server data.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Pod;

/// Server-confirmed list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PodsState {
    /// Pods on the current page
    pub pods: Vec<Pod>,
    /// Unsliced collection size
    pub total: usize,
}

/// Type alias for the store
pub type PodsStore = Store<PodsState>;

/// Get the pods store from context
pub fn use_pods_store() -> PodsStore {
    expect_context::<PodsStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the held page with server-confirmed data
pub fn store_replace_pods(store: &PodsStore, pods: Vec<Pod>, total: usize) {
    store.pods().set(pods);
    store.total().set(total);
}

/// Optimistically append a freshly created pod
pub fn store_append_pod(store: &PodsStore, pod: Pod, total: usize) {
    store.pods().write().push(pod);
    store.total().set(total);
}

/// Optimistically remove a pod from the held page by id
pub fn store_remove_pod(store: &PodsStore, pod_id: u32, total: usize) {
    store.pods().write().retain(|pod| pod.id != pod_id);
    store.total().set(total);
}
