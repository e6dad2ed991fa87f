//! NGO Facade

use super::ApiError;
use crate::models::{ApiResponse, Ngo};

/// The full NGO directory.
pub async fn list_ngos() -> Result<ApiResponse<Vec<Ngo>>, ApiError> {
    super::get("/ngos").await
}

pub async fn get_ngo(id: i64) -> Result<ApiResponse<Ngo>, ApiError> {
    super::get(&format!("/ngos/{id}")).await
}
