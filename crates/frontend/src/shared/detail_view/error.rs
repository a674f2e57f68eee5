use thiserror::Error;

use crate::system::remote::error::classify;
use crate::system::remote::{ConfigurationError, ErrorKind, RemoteError};

/// Message shown when the backend answered without data
pub const NOT_FOUND_MESSAGE: &str = "No se encontraron datos";

/// The mount container is missing: a template/structure bug, not a runtime condition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Contenedor de montaje no encontrado: #{0}")]
pub struct MountError(pub String);

/// Failure of a detail view load after the mount container was found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("No se pudo cargar la vista {path}: {reason}")]
    TemplateLoad { path: String, reason: String },

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// No payload, or the envelope reported a failure; `kind` is decided from its message
    #[error("{}", .message.as_deref().unwrap_or(NOT_FOUND_MESSAGE))]
    NotFound {
        message: Option<String>,
        kind: ErrorKind,
    },

    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
}

impl LoadError {
    /// The remote function answered without data
    pub fn no_data() -> Self {
        LoadError::NotFound {
            message: None,
            kind: ErrorKind::NotFound,
        }
    }

    /// Failure reported inside the envelope; permission and session markers keep their kind
    pub fn rejected(message: Option<String>) -> Self {
        let kind = match message.as_deref().map(|m| classify(None, None, m)) {
            Some(kind @ (ErrorKind::PermissionDenied | ErrorKind::SessionExpired)) => kind,
            _ => ErrorKind::NotFound,
        };
        LoadError::NotFound { message, kind }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Remote(e) => e.kind,
            LoadError::NotFound { kind, .. } => *kind,
            LoadError::TemplateLoad { .. } => ErrorKind::Transport,
            LoadError::Configuration(_) | LoadError::Decode(_) => ErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        assert_eq!(LoadError::no_data().to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(LoadError::rejected(None).to_string(), NOT_FOUND_MESSAGE);
        assert_eq!(
            LoadError::rejected(Some("Venta no encontrada".to_string())).to_string(),
            "Venta no encontrada"
        );
    }

    #[test]
    fn test_remote_message_is_raw() {
        let err: LoadError = RemoteError::new(ErrorKind::Unknown, "boom").into();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_kinds() {
        let template = LoadError::TemplateLoad {
            path: "/views/x.html".to_string(),
            reason: "HTTP 404".to_string(),
        };
        assert_eq!(template.kind(), ErrorKind::Transport);
        assert_eq!(LoadError::no_data().kind(), ErrorKind::NotFound);
        assert_eq!(
            LoadError::Configuration(ConfigurationError("x".to_string())).kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_rejection_message_decides_kind() {
        let rejected = |m: &str| LoadError::rejected(Some(m.to_string()));
        assert_eq!(
            rejected("No tiene permiso para ver esta venta").kind(),
            ErrorKind::PermissionDenied
        );
        assert_eq!(rejected("Su sesión ha expirado").kind(), ErrorKind::SessionExpired);
        assert_eq!(rejected("Venta no encontrada").kind(), ErrorKind::NotFound);
        assert_eq!(
            rejected("Su sesión ha expirado").to_string(),
            "Su sesión ha expirado"
        );
    }
}
