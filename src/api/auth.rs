//! Auth Facade
//!
//! Login, registration, and logout against `/auth/*`.

use serde::Serialize;

use super::ApiError;
use crate::models::{ApiResponse, Session};
use crate::session;

#[derive(Serialize)]
struct LoginArgs<'a> {
    email: &'a str,
    password: &'a str,
}

/// New-account payload for `/auth/register`.
#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
}

/// Exchange credentials for a session. The returned session is persisted
/// only when the backend reports success; a failed attempt leaves any
/// prior session untouched.
pub async fn login(email: &str, password: &str) -> Result<ApiResponse<Session>, ApiError> {
    let resp: ApiResponse<Session> = super::post("/auth/login", &LoginArgs { email, password }).await?;
    if resp.success {
        if let Some(new_session) = &resp.data {
            session::set(new_session);
        }
    }
    Ok(resp)
}

/// Create an account. Persists the returned session on success, same as
/// [`login`].
pub async fn register(args: &RegisterArgs<'_>) -> Result<ApiResponse<Session>, ApiError> {
    let resp: ApiResponse<Session> = super::post("/auth/register", args).await?;
    if resp.success {
        if let Some(new_session) = &resp.data {
            session::set(new_session);
        }
    }
    Ok(resp)
}

/// Drop the stored session unconditionally; works with no session present.
/// Navigation back to the login view is the caller's job.
pub fn logout() {
    session::clear();
}
