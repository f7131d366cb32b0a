//! Data models exchanged with the backend.

mod resume;
mod user;

pub use resume::{Feedback, Resume, ResumeId};
pub use user::{User, UserId};

/// Parse a backend timestamp into a calendar date.
///
/// Accepts RFC 3339 (`2025-03-01T12:00:00Z`) and the bare
/// `YYYY-MM-DD HH:MM:SS[.fff]` form Postgres emits without a zone.
pub fn parse_date(raw: &str) -> Option<chrono::NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(parse_date("2025-03-01T12:30:00.000Z"), expected);
        assert_eq!(parse_date("2025-03-01 12:30:00.123456"), expected);
        assert_eq!(parse_date("2025-03-01T12:30:00"), expected);
        assert_eq!(parse_date("2025-03-01"), expected);
        assert_eq!(parse_date("yesterday"), None);
    }
}
