//! User session token kept in localStorage by the auth flow
//!
//! The session is stored under `sb-{project}-auth-token` as JSON; only the
//! access token is needed to call RPC functions on behalf of the user.

use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Deserialize)]
struct StoredSession {
    access_token: Option<String>,
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Project reference: first label of the backend host
///
/// "https://abcd1234.supabase.co" -> "abcd1234"
pub fn project_ref(url: &str) -> Option<&str> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let host = without_scheme.split(['/', ':']).next()?;
    host.split('.').next().filter(|label| !label.is_empty())
}

/// localStorage key holding the session for the given backend url
pub fn storage_key(url: &str) -> Option<String> {
    project_ref(url).map(|r| format!("sb-{}-auth-token", r))
}

fn parse_access_token(raw: &str) -> Option<String> {
    serde_json::from_str::<StoredSession>(raw)
        .ok()?
        .access_token
        .filter(|t| !t.is_empty())
}

/// Access token of the signed-in user, if any
pub fn access_token(url: &str) -> Option<String> {
    let key = storage_key(url)?;
    let raw = get_local_storage()?.get_item(&key).ok()??;
    parse_access_token(&raw)
}

/// Drop the stored session (used before reloading on session expiry)
pub fn clear_session(url: &str) {
    if let (Some(storage), Some(key)) = (get_local_storage(), storage_key(url)) {
        let _ = storage.remove_item(&key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ref() {
        assert_eq!(project_ref("https://abcd1234.supabase.co"), Some("abcd1234"));
        assert_eq!(project_ref("http://localhost:54321"), Some("localhost"));
        assert_eq!(project_ref("https://xyz.supabase.co/"), Some("xyz"));
        assert_eq!(project_ref(""), None);
    }

    #[test]
    fn test_storage_key() {
        assert_eq!(
            storage_key("https://abcd1234.supabase.co").as_deref(),
            Some("sb-abcd1234-auth-token")
        );
    }

    #[test]
    fn test_parse_access_token() {
        assert_eq!(
            parse_access_token(r#"{"access_token":"jwt","expires_at":1700000000}"#).as_deref(),
            Some("jwt")
        );
        assert_eq!(parse_access_token(r#"{"access_token":""}"#), None);
        assert_eq!(parse_access_token("not json"), None);
    }
}
