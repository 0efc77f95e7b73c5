//! Wall-clock timestamps for leaderboard entries.

use chrono::{DateTime, Local, TimeZone};

/// Source of the display timestamp recorded when a round ends.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local time as `H:M:S` without zero padding (e.g. `9:5:7`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn timestamp(&self) -> String {
        format_time(&Local::now())
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

impl<F> Clock for F
where
    F: Fn() -> String,
{
    fn timestamp(&self) -> String {
        self()
    }
}

pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-H:%-M:%-S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn formats_without_padding() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_time(&at), "9:5:7");

        let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 10).unwrap();
        assert_eq!(format_time(&at), "23:59:10");
    }

    #[test]
    fn formats_in_the_given_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(format_time(&at), "0:0:0");
    }

    #[test]
    fn closures_are_clocks() {
        let clock = || "12:0:1".to_string();
        assert_eq!(clock.timestamp(), "12:0:1");
        assert_eq!(FixedClock("1:2:3".into()).timestamp(), "1:2:3");
    }
}
