//! Clock-time strings ("09:30", "09:30:00") to minutes since midnight.

use chrono::{NaiveTime, Timelike};

use crate::error::{FamboardError, FamboardResult};
use crate::layout::{MINUTES_PER_DAY, TimedItem};

/// Time used when an event has no start or end time set.
pub const DEFAULT_TIME: &str = "00:00";

/// Parse `HH:MM` or `HH:MM:SS` into minutes since midnight.
/// Seconds are dropped. `24:00` is accepted as the end of the day.
pub fn parse_minutes(s: &str) -> FamboardResult<i32> {
    let trimmed = s.trim();

    if trimmed == "24:00" || trimmed == "24:00:00" {
        return Ok(MINUTES_PER_DAY);
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| FamboardError::InvalidTime(s.to_string()))?;

    Ok((time.hour() * 60 + time.minute()) as i32)
}

/// Format minutes since midnight as `HH:MM`.
pub fn format_minutes(minutes: i32) -> String {
    let minutes = minutes.clamp(0, MINUTES_PER_DAY);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

impl TimedItem {
    /// Build a layout item from stored clock times; a missing time counts as midnight.
    pub fn from_times(
        id: impl Into<String>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> FamboardResult<Self> {
        let start = parse_minutes(start.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_TIME))?;
        let end = parse_minutes(end.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_TIME))?;

        Ok(TimedItem::new(id, start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours_and_minutes() {
        assert_eq!(parse_minutes("09:30").unwrap(), 570);
        assert_eq!(parse_minutes("9:05").unwrap(), 545);
        assert_eq!(parse_minutes("00:00").unwrap(), 0);
    }

    #[test]
    fn test_parse_ignores_seconds() {
        assert_eq!(parse_minutes("14:00:59").unwrap(), 840);
    }

    #[test]
    fn test_parse_end_of_day() {
        assert_eq!(parse_minutes("24:00").unwrap(), 1440);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "noon", "25:00", "12:60", "12"] {
            assert!(
                matches!(parse_minutes(bad), Err(FamboardError::InvalidTime(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(1440), "24:00");
    }

    #[test]
    fn test_from_times_defaults_missing_to_midnight() {
        let item = TimedItem::from_times("a", None, Some("")).unwrap();
        assert_eq!(item, TimedItem::new("a", 0, 0));

        let item = TimedItem::from_times("b", Some("10:00:00"), Some("11:15")).unwrap();
        assert_eq!(item, TimedItem::new("b", 600, 675));
    }
}
