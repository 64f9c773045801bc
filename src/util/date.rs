use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use thiserror::Error;

/// A publish date that matched none of the accepted input formats.
#[derive(Debug, Error)]
#[error("unrecognized date format: {0:?}")]
pub struct DateError(pub String);

/// What to do with a publish date that matches no accepted format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePolicy {
    /// Substitute the current wall-clock time. This silently converts a
    /// data-quality problem into an untraceable timestamp, but keeps a whole
    /// feed from failing over one bad item. Matches the original service.
    #[default]
    Fallback,
    /// Surface the bad date as an error.
    Strict,
}

/// Normalizes a raw feed date string to canonical RFC 3339 form.
///
/// Accepted input formats, tried in priority order so ambiguous strings
/// resolve deterministically:
///
/// 1. RFC 1123 with a numeric offset (`Mon, 02 Jan 2006 15:04:05 -0700`),
///    the most common RSS `pubDate` form
/// 2. RFC 2822, which covers the named-zone RFC 1123 form
///    (`Mon, 02 Jan 2006 15:04:05 MST`) as well as the loose
///    single-digit-day `Mon, 2 Jan 2006 15:04:05 GMT` variant
/// 3. RFC 3339 (already canonical; re-emitted in canonical form)
///
/// Unrecognized input does not fail: the current time is substituted and a
/// warning is logged. Use [`try_normalize_date`] for the strict policy.
pub fn normalize_date(raw: &str) -> String {
    match parse_known_format(raw) {
        Some(dt) => canonical(dt),
        None => {
            tracing::warn!(date = %raw, "unrecognized publish date, substituting current time");
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        }
    }
}

/// Strict variant of [`normalize_date`]: unrecognized input is an error
/// instead of becoming the current time.
pub fn try_normalize_date(raw: &str) -> Result<String, DateError> {
    parse_known_format(raw)
        .map(canonical)
        .ok_or_else(|| DateError(raw.to_string()))
}

fn parse_known_format(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S %z") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    None
}

/// Canonical form: RFC 3339 with second precision, `Z` for UTC.
fn canonical(dt: DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc1123_numeric_offset() {
        assert_eq!(
            normalize_date("Mon, 02 Jan 2006 15:04:05 -0700"),
            "2006-01-02T15:04:05-07:00"
        );
    }

    #[test]
    fn test_rfc1123_named_zone() {
        // MST is one of the RFC 2822 obsolete zones (-0700)
        assert_eq!(
            normalize_date("Mon, 02 Jan 2006 15:04:05 MST"),
            "2006-01-02T15:04:05-07:00"
        );
        assert_eq!(
            normalize_date("Mon, 02 Jan 2006 15:04:05 GMT"),
            "2006-01-02T15:04:05Z"
        );
    }

    #[test]
    fn test_single_digit_day_gmt() {
        assert_eq!(
            normalize_date("Mon, 2 Jan 2006 15:04:05 GMT"),
            "2006-01-02T15:04:05Z"
        );
    }

    #[test]
    fn test_rfc3339_passthrough() {
        assert_eq!(
            normalize_date("2006-01-02T15:04:05-07:00"),
            "2006-01-02T15:04:05-07:00"
        );
        // Sub-second precision collapses to seconds
        assert_eq!(
            normalize_date("2006-01-02T15:04:05.123Z"),
            "2006-01-02T15:04:05Z"
        );
    }

    #[test]
    fn test_same_instant_round_trip() {
        let inputs = [
            "Mon, 02 Jan 2006 15:04:05 -0700",
            "Mon, 02 Jan 2006 15:04:05 MST",
            "2006-01-02T22:04:05Z",
        ];
        let expected = DateTime::parse_from_rfc3339("2006-01-02T22:04:05Z").unwrap();
        for input in inputs {
            let normalized = normalize_date(input);
            let parsed = DateTime::parse_from_rfc3339(&normalized).unwrap();
            assert_eq!(parsed, expected, "instant drifted for {:?}", input);
        }
    }

    #[test]
    fn test_fallback_substitutes_current_time() {
        let before = Utc::now();
        let normalized = normalize_date("not a date");
        let after = Utc::now();

        let parsed = DateTime::parse_from_rfc3339(&normalized)
            .expect("fallback output must be valid RFC 3339")
            .with_timezone(&Utc);
        // Second precision output may land just before `before`
        assert!(parsed >= before - chrono::Duration::seconds(1));
        assert!(parsed <= after + chrono::Duration::seconds(1));
    }

    #[test]
    fn test_strict_rejects_unrecognized() {
        let err = try_normalize_date("not a date").unwrap_err();
        assert!(err.to_string().contains("not a date"));

        assert_eq!(
            try_normalize_date("Mon, 02 Jan 2006 15:04:05 -0700").unwrap(),
            "2006-01-02T15:04:05-07:00"
        );
    }

    #[test]
    fn test_empty_string_falls_back() {
        assert!(try_normalize_date("").is_err());
        let normalized = normalize_date("");
        assert!(DateTime::parse_from_rfc3339(&normalized).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(
            normalize_date("  Mon, 02 Jan 2006 15:04:05 -0700  "),
            "2006-01-02T15:04:05-07:00"
        );
    }
}
