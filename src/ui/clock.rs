use chrono::{DateTime, Local, NaiveTime};

use crate::data::DailyPrayerTimes;

/// Format used throughout the signage for times of day.
const TIME_FORMAT: &str = "%I:%M %p";

/// 12-hour clock without a leading zero, e.g. "7:45 PM".
pub fn format_clock(now: DateTime<Local>) -> String {
    now.format("%-I:%M %p").to_string()
}

/// Long date line, e.g. "Sunday 30 August 2026".
pub fn format_date(now: DateTime<Local>) -> String {
    now.format("%A %-d %B %Y").to_string()
}

/// Index into [`DailyPrayerTimes::rows`] of the next prayer still to
/// start today, or `None` once Isha has begun (the next prayer is
/// tomorrow's Fajr). Unparseable times are skipped.
pub fn next_prayer_index(now: NaiveTime, today: &DailyPrayerTimes) -> Option<usize> {
    today.rows().iter().position(|(_, entry)| {
        NaiveTime::parse_from_str(&entry.start, TIME_FORMAT)
            .map(|start| start > now)
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SignageData;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_format_clock_no_leading_zero() {
        let dt = Local.with_ymd_and_hms(2026, 8, 30, 19, 45, 0).unwrap();
        assert_eq!(format_clock(dt), "7:45 PM");
        let dt = Local.with_ymd_and_hms(2026, 8, 30, 9, 5, 0).unwrap();
        assert_eq!(format_clock(dt), "9:05 AM");
    }

    #[test]
    fn test_format_date() {
        let dt = Local.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        assert_eq!(format_date(dt), "Sunday 30 August 2026");
    }

    #[test]
    fn test_next_prayer_progression() {
        // Sample day: Fajr 5:32 AM .. Isha 7:45 PM.
        let today = SignageData::sample().today;
        assert_eq!(next_prayer_index(at(4, 0), &today), Some(0)); // Fajr
        assert_eq!(next_prayer_index(at(6, 30), &today), Some(1)); // Zuhr
        assert_eq!(next_prayer_index(at(15, 0), &today), Some(2)); // Asr
        assert_eq!(next_prayer_index(at(18, 0), &today), Some(3)); // Maghrib
        assert_eq!(next_prayer_index(at(19, 0), &today), Some(4)); // Isha
        assert_eq!(next_prayer_index(at(23, 0), &today), None); // tomorrow
    }

    #[test]
    fn test_next_prayer_advances_across_start() {
        // The tick handler compares successive indices to know when
        // the highlighted row must move; crossing a start time one
        // minute apart has to change the index.
        let today = SignageData::sample().today;
        let before = next_prayer_index(at(12, 13), &today); // Zuhr starts 12:14 PM
        let after = next_prayer_index(at(12, 15), &today);
        assert_eq!(before, Some(1));
        assert_eq!(after, Some(2));
        assert_ne!(before, after);
    }

    #[test]
    fn test_next_prayer_skips_unparseable() {
        let mut today = SignageData::sample().today;
        today.fajr.start = "dawn".to_string();
        assert_eq!(next_prayer_index(at(4, 0), &today), Some(1));
    }
}
