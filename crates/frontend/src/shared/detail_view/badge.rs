//! Status badge styling

use super::view::SlotValue;

/// Visual severity of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Primary,
    Neutral,
}

impl BadgeTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeTone::Success => "badge bg-success",
            BadgeTone::Warning => "badge bg-warning text-dark",
            BadgeTone::Danger => "badge bg-danger",
            BadgeTone::Info => "badge bg-info text-dark",
            BadgeTone::Primary => "badge bg-primary",
            BadgeTone::Neutral => "badge bg-secondary",
        }
    }
}

/// Lookup key for a status value: trimmed, lowercase, spaces as underscores
pub fn status_key(status: &str) -> String {
    status.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Human label for a status value: "en_proceso" -> "En proceso"
pub fn status_label(status: Option<&str>) -> String {
    let raw = status.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return "Sin estado".to_string();
    }
    let spaced = raw.replace('_', " ").to_lowercase();
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

/// Badge for a status value; statuses missing from `tones` are `Neutral`
pub fn status_badge(status: Option<&str>, tones: &[(&str, BadgeTone)]) -> SlotValue {
    let key = status.map(status_key).unwrap_or_default();
    let tone = tones
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, tone)| *tone)
        .unwrap_or(BadgeTone::Neutral);
    SlotValue::badge(status_label(status), tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TONES: &[(&str, BadgeTone)] = &[
        ("pendiente", BadgeTone::Warning),
        ("en_proceso", BadgeTone::Info),
    ];

    #[test]
    fn test_status_badge_lookup() {
        assert_eq!(
            status_badge(Some("En Proceso"), TONES),
            SlotValue::badge("En proceso", BadgeTone::Info)
        );
        assert_eq!(
            status_badge(Some("archivada"), TONES),
            SlotValue::badge("Archivada", BadgeTone::Neutral)
        );
        assert_eq!(
            status_badge(None, TONES),
            SlotValue::badge("Sin estado", BadgeTone::Neutral)
        );
    }

    #[test]
    fn test_status_key() {
        assert_eq!(status_key("  En Proceso "), "en_proceso");
        assert_eq!(status_key("PAGADA"), "pagada");
        assert_eq!(status_key("no-pagado"), "no_pagado");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(Some("en_proceso")), "En proceso");
        assert_eq!(status_label(Some("PENDIENTE")), "Pendiente");
        assert_eq!(status_label(Some("íntegra")), "Íntegra");
        assert_eq!(status_label(None), "Sin estado");
    }
}
