//! Resource Facade

use super::ApiError;
use crate::models::{ApiResponse, ResourceRecord};

/// Every resource NGOs currently hold.
pub async fn list_resources() -> Result<ApiResponse<Vec<ResourceRecord>>, ApiError> {
    super::get("/resources").await
}

pub async fn get_resource(id: i64) -> Result<ApiResponse<ResourceRecord>, ApiError> {
    super::get(&format!("/resources/{id}")).await
}
