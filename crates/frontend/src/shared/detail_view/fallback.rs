use super::error::LoadError;
use crate::system::remote::ErrorKind;

/// Delay before the automatic reload after a session expiry
pub const SESSION_RELOAD_DELAY_MS: u32 = 2000;

/// Panel replacing the whole mount container when a load fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackPanel {
    /// Static "insufficient permissions" panel, back action only
    PermissionDenied,
    /// Notice followed by an unconditional page reload
    SessionExpired { reload_after_ms: u32 },
    /// Raw error message and back action
    Generic { message: String },
}

impl FallbackPanel {
    pub fn for_error(error: &LoadError) -> Self {
        match error.kind() {
            ErrorKind::PermissionDenied => FallbackPanel::PermissionDenied,
            ErrorKind::SessionExpired => FallbackPanel::SessionExpired {
                reload_after_ms: SESSION_RELOAD_DELAY_MS,
            },
            ErrorKind::NotFound | ErrorKind::Transport | ErrorKind::Unknown => {
                FallbackPanel::Generic {
                    message: error.to_string(),
                }
            }
        }
    }

    pub fn has_back_action(&self) -> bool {
        !matches!(self, FallbackPanel::SessionExpired { .. })
    }

    pub fn reload_after_ms(&self) -> Option<u32> {
        match self {
            FallbackPanel::SessionExpired { reload_after_ms } => Some(*reload_after_ms),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FallbackPanel::PermissionDenied => "Permisos insuficientes",
            FallbackPanel::SessionExpired { .. } => "Sesión expirada",
            FallbackPanel::Generic { .. } => "Error al cargar los datos",
        }
    }

    pub fn body(&self) -> String {
        match self {
            FallbackPanel::PermissionDenied => {
                "No tiene permisos para ver esta información.".to_string()
            }
            FallbackPanel::SessionExpired { .. } => {
                "Su sesión ha expirado. La página se recargará en unos segundos...".to_string()
            }
            FallbackPanel::Generic { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::remote::RemoteError;

    fn remote(status: u16, message: &str) -> LoadError {
        RemoteError::from_response(status, &format!(r#"{{"message":"{}"}}"#, message)).into()
    }

    #[test]
    fn test_permission_marker() {
        let panel = FallbackPanel::for_error(&remote(400, "no permiso"));
        assert_eq!(panel, FallbackPanel::PermissionDenied);
        assert!(panel.has_back_action());
        assert_eq!(panel.reload_after_ms(), None);
    }

    #[test]
    fn test_session_marker_schedules_reload() {
        let panel = FallbackPanel::for_error(&remote(400, "sesión expirada"));
        assert_eq!(panel.reload_after_ms(), Some(2000));
        assert!(!panel.has_back_action());
    }

    #[test]
    fn test_other_message_is_shown_verbatim() {
        let panel = FallbackPanel::for_error(&remote(500, "division by zero"));
        assert_eq!(
            panel,
            FallbackPanel::Generic {
                message: "division by zero".to_string()
            }
        );
        assert_eq!(panel.body(), "division by zero");
        assert!(panel.has_back_action());
    }

    #[test]
    fn test_not_found_uses_generic_panel() {
        let panel = FallbackPanel::for_error(&LoadError::rejected(Some("Venta anulada".to_string())));
        assert_eq!(panel.body(), "Venta anulada");
    }

    #[test]
    fn test_envelope_rejection_markers() {
        let panel = FallbackPanel::for_error(&LoadError::rejected(Some(
            "No tiene permiso para ver esta venta".to_string(),
        )));
        assert_eq!(panel, FallbackPanel::PermissionDenied);

        let panel =
            FallbackPanel::for_error(&LoadError::rejected(Some("Su sesión ha expirado".to_string())));
        assert_eq!(
            panel,
            FallbackPanel::SessionExpired {
                reload_after_ms: SESSION_RELOAD_DELAY_MS
            }
        );
        assert_eq!(panel.reload_after_ms(), Some(2000));
    }
}
