use chrono::NaiveDateTime;

const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `2025-05-10T09:00` -> `10 May 2025, 09:00`.
///
/// Anything that is not a valid local timestamp is returned as-is.
pub(crate) fn format_datetime(iso: &str) -> String {
    match NaiveDateTime::parse_from_str(iso, EVENT_TIME_FORMAT) {
        Ok(at) => at.format("%-d %b %Y, %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

pub(crate) fn current_year() -> u32 {
    // Use system local timezone (browser runtime).
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-05-10T09:00"), "10 May 2025, 09:00");
        assert_eq!(format_datetime("2025-12-01T18:30"), "1 Dec 2025, 18:30");
    }

    #[test]
    fn test_format_datetime_passes_through_unparseable_input() {
        assert_eq!(format_datetime("2025-05-10"), "2025-05-10");
        assert_eq!(format_datetime("2025-13-10T09:00"), "2025-13-10T09:00");
        assert_eq!(format_datetime("soon"), "soon");
    }

    #[test]
    fn test_format_datetime_rejects_impossible_dates_and_times() {
        assert_eq!(format_datetime("2025-02-31T09:00"), "2025-02-31T09:00");
        assert_eq!(format_datetime("2025-05-99T09:00"), "2025-05-99T09:00");
        assert_eq!(format_datetime("2025-05-10Tnope"), "2025-05-10Tnope");
        assert_eq!(format_datetime("2025-05-+7T09:00"), "2025-05-+7T09:00");
    }
}
