//! Pod Handlers
//!
//! The three `/api/pods` operations: list, create, delete.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{Pod, SortOrder};
use crate::AppState;
use super::error::ApiError;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 5;

// ========================
// Wire Types
// ========================

/// Query string of the list operation; everything arrives as text
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaginatedPods {
    pub pods: Vec<Pod>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct CreatePodRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePodResponse {
    pub pod: Pod,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct DeletePodRequest {
    #[serde(default)]
    pub id: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePodResponse {
    pub message: String,
    pub total: usize,
}

/// Parse a numeric query parameter without bounds validation.
///
/// Absent or empty text takes the default; anything non-numeric becomes 0,
/// which lands outside the valid page range and is answered by the
/// pagination math with an empty page rather than an error.
fn parse_numeric(raw: Option<&str>, default: i64) -> i64 {
    match raw {
        None => default,
        Some("") => default,
        Some(s) => s.parse().unwrap_or(0),
    }
}

// ========================
// Handlers
// ========================

/// GET /api/pods - sorted page of pods plus the total count
pub async fn list_pods(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PaginatedPods>, ApiError> {
    let page = parse_numeric(params.page.as_deref(), DEFAULT_PAGE);
    let page_size = parse_numeric(params.page_size.as_deref(), DEFAULT_PAGE_SIZE);
    let sort_by = SortOrder::from_str(params.sort_by.as_deref().unwrap_or("newestFirst"));

    let (pods, total) = state
        .repo
        .paginate(page, page_size, sort_by)
        .await
        .map_err(|e| {
            error!("error in GET /api/pods: {e}");
            ApiError::internal("Failed to fetch pods. Please try again later.")
        })?;

    Ok(Json(PaginatedPods { pods, total }))
}

/// POST /api/pods - append a new pod
pub async fn create_pod(
    State(state): State<AppState>,
    Json(body): Json<CreatePodRequest>,
) -> Result<(StatusCode, Json<CreatePodResponse>), ApiError> {
    let title = body.title.unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::invalid_input("Pod content is required."));
    }

    let (pod, total) = state.repo.create(title).await.map_err(|e| {
        error!("error in POST /api/pods: {e}");
        ApiError::internal("Failed to create pod. Please try again later.")
    })?;

    Ok((StatusCode::CREATED, Json(CreatePodResponse { pod, total })))
}

/// DELETE /api/pods - remove a pod by id
///
/// Removing an id that does not exist still answers 200; only the message
/// distinguishes the two outcomes.
pub async fn delete_pod(
    State(state): State<AppState>,
    Json(body): Json<DeletePodRequest>,
) -> Result<Json<DeletePodResponse>, ApiError> {
    // An id of 0 is treated the same as a missing id.
    let id = match body.id {
        Some(id) if id != 0 => id,
        _ => return Err(ApiError::invalid_input("Pod ID is required.")),
    };

    let (removed, total) = state.repo.remove(id).await.map_err(|e| {
        error!("error in DELETE /api/pods: {e}");
        ApiError::internal("Failed to delete pod. Please try again later.")
    })?;

    let message = if removed { "Deleted" } else { "Pod not found" };
    Ok(Json(DeletePodResponse {
        message: message.to_string(),
        total,
    }))
}

#[cfg(test)]
mod param_tests {
    use super::parse_numeric;

    #[test]
    fn test_absent_and_empty_take_default() {
        assert_eq!(parse_numeric(None, 1), 1);
        assert_eq!(parse_numeric(Some(""), 5), 5);
    }

    #[test]
    fn test_numeric_text_passes_through() {
        assert_eq!(parse_numeric(Some("3"), 1), 3);
        assert_eq!(parse_numeric(Some("-2"), 1), -2);
    }

    #[test]
    fn test_garbage_becomes_out_of_range() {
        assert_eq!(parse_numeric(Some("abc"), 1), 0);
    }
}
