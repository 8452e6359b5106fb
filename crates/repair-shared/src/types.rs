//! Common types

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub type EntityId = Uuid;

/// Allocate a random (version 4) identifier.
pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Parse an identifier taken from a URL path or request body.
///
/// Ids are matched exactly: only the canonical lowercase hyphenated text
/// that `new_id` hands out is accepted. Anything else yields `None`, so
/// callers can treat it the same way as an unknown id.
pub fn parse_id(raw: &str) -> Option<EntityId> {
    Uuid::parse_str(raw)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw)
}

/// RFC 3339 timestamp with millisecond precision, as emitted on the wire.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_version_4() {
        let id = new_id();
        assert_eq!(id.get_version_num(), 4);
        assert_ne!(id, new_id());
    }

    #[test]
    fn test_parse_id() {
        let id = new_id();
        assert_eq!(parse_id(&id.to_string()), Some(id));
        assert_eq!(parse_id("unknown-id"), None);
        assert_eq!(parse_id(""), None);
    }

    #[test]
    fn test_parse_id_rejects_non_canonical_forms() {
        let id = new_id();
        let canonical = id.to_string();
        let variants = [
            canonical.to_uppercase(),
            id.simple().to_string(),
            id.urn().to_string(),
            id.braced().to_string(),
            format!(" {} ", canonical),
        ];
        for variant in variants {
            assert_eq!(parse_id(&variant), None, "accepted {variant}");
        }
    }

    #[test]
    fn test_format_timestamp_uses_millis_and_z() {
        let at = DateTime::parse_from_rfc3339("2024-05-01T10:20:30.123456Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(&at), "2024-05-01T10:20:30.123Z");
    }
}
