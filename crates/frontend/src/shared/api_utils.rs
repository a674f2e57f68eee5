//! URL helpers for requests to the dashboard's own server
//!
//! The backend serves both the wasm bundle and `/api/*`, so everything is
//! resolved against the page origin.

/// Origin of the current page, e.g. "http://localhost:3000"
///
/// Returns an empty string when there is no window (unit tests), which
/// turns every URL into a path-only one.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full URL from a server path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/views/compras-detalle.html");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
