//! Pod API Calls
//!
//! One wrapper per backend operation. Errors carry the message the UI
//! shows: the server's `error` field when present, a default otherwise.

use serde::Serialize;

use crate::models::{CreatePodResponse, DeletePodResponse, PaginatedPods};
use super::{error_message, request};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct CreatePodArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct DeletePodArgs {
    id: u32,
}

// ========================
// Calls
// ========================

pub async fn list_pods(page: usize, page_size: usize, sort_by: &str) -> Result<PaginatedPods, String> {
    let url = format!("/api/pods?page={page}&pageSize={page_size}&sortBy={sort_by}");
    let (status, body) = request("GET", &url, None).await?;
    if status != 200 {
        return Err(error_message(body, "Failed to fetch pods."));
    }
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

pub async fn create_pod(title: &str) -> Result<CreatePodResponse, String> {
    let body = serde_json::to_string(&CreatePodArgs { title }).map_err(|e| e.to_string())?;
    let (status, body) = request("POST", "/api/pods", Some(body)).await?;
    if status != 201 {
        return Err(error_message(body, "Failed to create pod."));
    }
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

pub async fn delete_pod(id: u32) -> Result<DeletePodResponse, String> {
    let body = serde_json::to_string(&DeletePodArgs { id }).map_err(|e| e.to_string())?;
    let (status, body) = request("DELETE", "/api/pods", Some(body)).await?;
    if status != 200 {
        return Err(error_message(body, "Failed to delete pod."));
    }
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}
