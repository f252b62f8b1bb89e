//! Frontend Models
//!
//! Data structures matching the backend wire types.

use serde::{Deserialize, Serialize};

/// Pod data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub id: u32,
    pub title: String,
}

/// Body of `GET /api/pods`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginatedPods {
    pub pods: Vec<Pod>,
    pub total: usize,
}

/// Body of a successful `POST /api/pods`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePodResponse {
    pub pod: Pod,
    pub total: usize,
}

/// Body of a successful `DELETE /api/pods`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletePodResponse {
    pub message: String,
    pub total: usize,
}

/// Error payload shared by every failing operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
