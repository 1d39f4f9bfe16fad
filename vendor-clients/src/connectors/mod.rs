pub mod gdrive;
pub mod hubspot;
pub mod shopify;
pub mod xero;
pub mod zendesk;

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp; anything unparseable is treated as absent.
pub(crate) fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|v| DateTime::parse_from_rfc3339(v).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp(Some("2024-03-05T14:30:00Z")).unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day(), ts.hour()), (2024, 3, 5, 14));

        let millis = parse_timestamp(Some("2024-03-05T14:30:00.123Z")).unwrap();
        assert_eq!(millis.minute(), 30);

        assert_eq!(parse_timestamp(Some("yesterday")), None);
        assert_eq!(parse_timestamp(None), None);
    }
}
