use chrono::{FixedOffset, TimeZone};

/// Month abbreviations as the marketing team writes them on the webinar
/// cards ("12 mar", "03 out").
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

fn month_number(abbreviation: &str) -> Option<u32> {
    let lowered = abbreviation.trim().to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|m| *m == lowered)
        .map(|index| index as u32 + 1)
}

/// Builds the `webinar_datetime` payload value from the card's day, month
/// abbreviation and a "HH:MM BRT" time string. Webinars are always announced
/// in Brasília time, taken as a fixed UTC-03:00 offset.
pub fn webinar_datetime(day: u32, month_abbr: &str, year: i32, time: &str) -> Option<String> {
    let month = month_number(month_abbr)?;

    let clock = time.split_whitespace().next()?;
    let (hour, minute) = clock.split_once(':')?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    let brt = FixedOffset::west_opt(3 * 3600)?;
    let datetime = brt
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()?;
    Some(datetime.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_iso_datetime_at_brasilia_offset() {
        let datetime = webinar_datetime(12, "mar", 2026, "19:30 BRT").unwrap();
        assert_eq!(datetime, "2026-03-12T19:30:00-03:00");
    }

    #[test]
    fn month_abbreviations_are_case_insensitive() {
        assert_eq!(webinar_datetime(1, "Out", 2026, "20:00 BRT"),
                   webinar_datetime(1, "out", 2026, "20:00 BRT"));
        assert!(webinar_datetime(1, "DEZ", 2026, "09:00 BRT").is_some());
    }

    #[test]
    fn rejects_unknown_month_or_broken_clock() {
        assert_eq!(webinar_datetime(12, "march", 2026, "19:30 BRT"), None);
        assert_eq!(webinar_datetime(12, "mar", 2026, "1930 BRT"), None);
        assert_eq!(webinar_datetime(12, "mar", 2026, "xx:30 BRT"), None);
        assert_eq!(webinar_datetime(32, "mar", 2026, "19:30 BRT"), None);
    }

    #[test]
    fn time_suffix_is_optional() {
        assert_eq!(
            webinar_datetime(5, "jun", 2026, "19:00"),
            Some("2026-06-05T19:00:00-03:00".to_string())
        );
    }
}
