//! Date formatting for detail views (`dd/mm/yyyy`)

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::format::EMPTY;

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt.date());
        }
    }
    // Postgres `timestamptz::text` style: "2024-03-15 14:02:26+00"
    if let Some(date_part) = value.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
            return Some(date);
        }
    }
    None
}

/// Format an ISO date or timestamp as `dd/mm/yyyy`
///
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024".
/// Unparseable input is returned as-is; `None` or blank gives "—".
pub fn format_date(value: Option<&str>) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return EMPTY.to_string(),
    };
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-15")), "15/03/2024");
        assert_eq!(format_date(Some("2024-03-15T14:02:26.123Z")), "15/03/2024");
        assert_eq!(format_date(Some("2024-03-15T23:30:00-05:00")), "15/03/2024");
        assert_eq!(format_date(Some("2024-03-15 14:02:26+00")), "15/03/2024");
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("")), "—");
        assert_eq!(format_date(Some("invalid")), "invalid");
    }
}
