//! Shared utility functions used across multiple modules.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a UTC instant as an ISO 8601 string with millisecond precision.
///
/// The output sorts lexically in time order, e.g. `2024-05-01T12:00:00.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a timestamp produced by [`iso_timestamp`].
pub fn parse_iso_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

/// Trim note text and reject whitespace-only input.
pub fn normalize_note_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn iso_timestamp_uses_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2024-05-01T12:00:00.000Z");
    }

    #[test]
    fn iso_timestamp_parses_back() {
        let now = Utc::now();
        let parsed = parse_iso_timestamp(&iso_timestamp(now)).unwrap();
        assert_eq!(parsed.timestamp_millis(), now.timestamp_millis());
    }

    #[test]
    fn parse_iso_timestamp_rejects_garbage() {
        assert!(parse_iso_timestamp("yesterday").is_none());
    }

    #[test]
    fn normalize_note_text_trims_and_rejects_empty() {
        assert_eq!(normalize_note_text("  hello  "), Some("hello".to_string()));
        assert_eq!(normalize_note_text(" \n\t "), None);
    }
}
