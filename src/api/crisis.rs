//! Crisis Facade
//!
//! Submission, listing, and status updates against `/crisis`.

use serde::Serialize;

use super::ApiError;
use crate::models::{
    ApiResponse, CrisisCreated, CrisisDetail, CrisisFilter, CrisisRequest, CrisisStatus,
};

/// Free-text submission payload for `POST /crisis`.
#[derive(Serialize)]
pub struct NewCrisisArgs<'a> {
    pub original_message: &'a str,
    pub message_source: &'a str,
}

#[derive(Serialize)]
struct UpdateStatusArgs {
    status: CrisisStatus,
}

/// Submit a message for extraction, scoring, and matching.
pub async fn create_crisis(args: &NewCrisisArgs<'_>) -> Result<ApiResponse<CrisisCreated>, ApiError> {
    super::post("/crisis", args).await
}

/// All crisis requests matching the filter; empty filter values are not
/// forwarded.
pub async fn list_crises(filter: &CrisisFilter) -> Result<ApiResponse<Vec<CrisisRequest>>, ApiError> {
    super::get_with_query("/crisis", &filter.query_pairs()).await
}

/// One crisis request plus its matches.
pub async fn get_crisis(id: i64) -> Result<ApiResponse<CrisisDetail>, ApiError> {
    super::get(&format!("/crisis/{id}")).await
}

/// Move a request to a new lifecycle status; returns the updated record.
pub async fn update_crisis_status(
    id: i64,
    status: CrisisStatus,
) -> Result<ApiResponse<CrisisRequest>, ApiError> {
    super::put(&format!("/crisis/{id}/status"), &UpdateStatusArgs { status }).await
}
