//! Backend API Client
//!
//! HTTP bindings to the crisis-matcher REST service, organized by domain.
//! One shared transport attaches the bearer token to every request and
//! reports 401s through a handler the application root registers; it never
//! touches the router itself.

mod auth;
mod crisis;
mod ngo;
mod resource;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config;
use crate::models::ApiResponse;
use crate::session;

// Re-export all public items
pub use auth::*;
pub use crisis::*;
pub use ngo::*;
pub use resource::*;

/// Transport-level failure. Business failures travel inside the decoded
/// [`ApiResponse`] envelope instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend rejected the session (HTTP 401). The session has
    /// already been cleared and the unauthorized handler fired.
    Unauthorized,
    /// Non-2xx response whose body was not the JSON envelope.
    Http { status: u16 },
    /// The request never completed (connection refused, DNS, CORS).
    Network(String),
    /// The body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized => write!(f, "session expired"),
            ApiError::Http { status } => write!(f, "server returned HTTP {status}"),
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the callback invoked whenever any response comes back 401.
/// The application root subscribes once and translates the event into
/// navigation; the transport stays free of UI concerns.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    UNAUTHORIZED_HANDLER.with(|slot| *slot.borrow_mut() = Some(Rc::new(handler)));
}

fn notify_unauthorized() {
    let handler = UNAUTHORIZED_HANDLER.with(|slot| slot.borrow().clone());
    if let Some(handler) = handler {
        handler();
    }
}

/// Characters escaped in query parameter values.
const QUERY_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Render query pairs as `?k=v&...`, skipping empty values entirely: an
/// empty filter means "no constraint", never an empty-string constraint.
fn build_query(pairs: &[(&str, String)]) -> String {
    let mut query = String::new();
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(&utf8_percent_encode(value, QUERY_ESCAPE).to_string());
    }
    query
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

async fn send<T>(
    method: &str,
    path: &str,
    query: &[(&str, String)],
    body: Option<String>,
) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    let headers = Headers::new().map_err(|e| ApiError::Network(js_error(e)))?;
    if body.is_some() {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(js_error(e)))?;
    }
    if let Some(token) = session::token() {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Network(js_error(e)))?;
    }
    opts.set_headers(headers.as_ref());

    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}{}", config::api_base_url(), path, build_query(query));
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| ApiError::Network(js_error(e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not yield a Response".into()))?;

    if response.status() == 401 {
        session::clear();
        notify_unauthorized();
        return Err(ApiError::Unauthorized);
    }

    let json = response.json().map_err(|e| ApiError::Decode(js_error(e)))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|e| ApiError::Decode(js_error(e)))?;

    match serde_wasm_bindgen::from_value::<ApiResponse<T>>(json) {
        Ok(envelope) => Ok(envelope),
        // A non-2xx body without the envelope is a plain HTTP failure;
        // with the envelope it still reaches the caller so the backend's
        // message can be shown verbatim.
        Err(_) if !response.ok() => Err(ApiError::Http {
            status: response.status(),
        }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

pub(crate) async fn get<T>(path: &str) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    send("GET", path, &[], None).await
}

pub(crate) async fn get_with_query<T>(
    path: &str,
    query: &[(&str, String)],
) -> Result<ApiResponse<T>, ApiError>
where
    T: DeserializeOwned,
{
    send("GET", path, query, None).await
}

pub(crate) async fn post<B, T>(path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send("POST", path, &[], Some(body)).await
}

pub(crate) async fn put<B, T>(path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    send("PUT", path, &[], Some(body)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_query_skips_empty_values() {
        let pairs = [
            ("status", String::new()),
            ("urgency_level", "critical".to_string()),
            ("need_type", String::new()),
        ];
        assert_eq!(build_query(&pairs), "?urgency_level=critical");
        assert_eq!(build_query(&[]), "");
    }

    #[test]
    fn build_query_joins_and_encodes() {
        let pairs = [
            ("status", "pending".to_string()),
            ("need_type", "food & water".to_string()),
        ];
        assert_eq!(
            build_query(&pairs),
            "?status=pending&need_type=food%20%26%20water"
        );
    }
}
