//! Session Management
//!
//! Sole owner of the durable browser session (token + user profile in
//! localStorage). Everything else goes through these functions; no other
//! module touches storage directly.

use web_sys::Storage;

use crate::models::{Session, User};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persist a freshly issued session. Call only after a successful login
/// or registration; a failed attempt must leave any prior session alone.
pub fn set(session: &Session) {
    let Some(storage) = storage() else {
        web_sys::console::warn_1(&"localStorage unavailable; session not persisted".into());
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, &session.token);
    match serde_json::to_string(&session.user) {
        Ok(user_json) => {
            let _ = storage.set_item(USER_KEY, &user_json);
        }
        Err(err) => {
            web_sys::console::warn_1(&format!("failed to serialize user profile: {err}").into());
        }
    }
}

/// Remove both stored keys. Safe to call with no session present.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// The bearer token, if one is stored.
pub fn token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// The stored dispatcher profile. A corrupt stored value reads as `None`.
pub fn current_user() -> Option<User> {
    storage()
        .and_then(|s| s.get_item(USER_KEY).ok().flatten())
        .and_then(|raw| parse_user(&raw))
}

/// Pure presence check on the stored token; says nothing about whether the
/// backend still accepts it.
pub fn is_authenticated() -> bool {
    token().is_some()
}

fn parse_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_reads_profile() {
        let user = parse_user(r#"{"full_name":"Asha Rao","role":"dispatcher"}"#).unwrap();
        assert_eq!(user.full_name.as_deref(), Some("Asha Rao"));
        assert_eq!(user.role.as_deref(), Some("dispatcher"));
        assert!(user.email.is_none());
    }

    #[test]
    fn parse_user_tolerates_corrupt_storage() {
        assert!(parse_user("not json").is_none());
        assert!(parse_user("").is_none());
    }
}
