//! Errors of the remote data-access layer
//!
//! The kind of an error is decided here, where the HTTP status and the
//! PostgREST error code are still available, and travels with it.

use serde::Deserialize;
use thiserror::Error;

/// Closed set of failure categories the UI reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    PermissionDenied,
    SessionExpired,
    NotFound,
    Transport,
    Unknown,
}

/// Message markers used by the database functions when they raise exceptions
const PERMISSION_MARKERS: &[&str] = &["permiso", "permission denied"];
const SESSION_MARKERS: &[&str] = &["sesión", "sesion", "jwt expired"];

/// Error body as returned by PostgREST and the API gateway
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    details: Option<String>,
}

/// Failure of a remote call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, `None` when the request never got a response
    pub status: Option<u16>,
    /// PostgREST / Postgres error code (`PGRST301`, `42501`, `P0001`, ...)
    pub code: Option<String>,
}

impl RemoteError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            code: None,
        }
    }

    /// Network failure: no response was received
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Build an error from a non-2xx response
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        let message = parsed
            .message
            .or(parsed.msg)
            .or(parsed.error_description)
            .or(parsed.details)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                let raw = body.trim();
                if raw.is_empty() {
                    format!("HTTP {}", status)
                } else {
                    raw.to_string()
                }
            });

        let kind = classify(Some(status), parsed.code.as_deref(), &message);
        Self {
            kind,
            message,
            status: Some(status),
            code: parsed.code,
        }
    }
}

/// Decide the error kind from status, code and message, in that order of precedence
pub fn classify(status: Option<u16>, code: Option<&str>, message: &str) -> ErrorKind {
    match code {
        Some("PGRST301") | Some("PGRST302") | Some("PGRST303") => return ErrorKind::SessionExpired,
        Some("42501") => return ErrorKind::PermissionDenied,
        _ => {}
    }

    match status {
        Some(401) => return ErrorKind::SessionExpired,
        Some(403) => return ErrorKind::PermissionDenied,
        _ => {}
    }

    let lower = message.to_lowercase();
    if PERMISSION_MARKERS.iter().any(|m| lower.contains(m)) {
        ErrorKind::PermissionDenied
    } else if SESSION_MARKERS.iter().any(|m| lower.contains(m)) {
        ErrorKind::SessionExpired
    } else {
        ErrorKind::Unknown
    }
}
