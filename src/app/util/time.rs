use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

pub fn current_time_in_secs() -> i64 {
    Utc::now().timestamp()
}

/// Accepts `YYYY-MM-DD` (midnight UTC), a naive `YYYY-MM-DDTHH:MM:SS[.f]`
/// (taken as UTC) or a full RFC 3339 timestamp.
pub fn parse_iso_to_secs(value: &str) -> Option<i64> {
    let value = value.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.timestamp());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.and_utc().timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc().timestamp());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates_as_utc_midnight() {
        assert_eq!(parse_iso_to_secs("2024-01-01"), Some(1704067200));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        assert_eq!(parse_iso_to_secs("2024-01-01T05:30:00+05:30"), Some(1704067200));
        assert_eq!(parse_iso_to_secs("2024-01-01T00:00:00.000Z"), Some(1704067200));
    }

    #[test]
    fn parses_naive_datetime_as_utc() {
        assert_eq!(parse_iso_to_secs("2024-01-01T00:00:10"), Some(1704067210));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_iso_to_secs("01/01/2024"), None);
        assert_eq!(parse_iso_to_secs(""), None);
    }
}
