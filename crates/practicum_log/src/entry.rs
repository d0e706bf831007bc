//! Time entry data structure

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{LogError, Result};

/// One logged block of practicum time on a single day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    /// Entry ID.
    pub id: Uuid,

    /// Day the time was worked.
    pub date: NaiveDate,

    /// Start of the block.
    pub start: NaiveTime,

    /// End of the block. Always after `start`.
    pub end: NaiveTime,

    /// What the time was spent on, e.g. "Classroom Observation".
    pub activity: String,
}

impl TimeEntry {
    /// Create a validated entry. The end time must be strictly after the
    /// start time (entries never span midnight) and the activity must be
    /// non-empty.
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        activity: impl Into<String>,
    ) -> Result<Self> {
        let activity = activity.into();

        if end <= start {
            return Err(LogError::EndNotAfterStart { start, end });
        }
        if activity.trim().is_empty() {
            return Err(LogError::EmptyActivity);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            start,
            end,
            activity,
        })
    }

    /// Length of the block in hours.
    pub fn hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 9, 10).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_entry_hours() {
        let entry =
            TimeEntry::new(date(), time(9, 0), time(14, 30), "Classroom Observation").unwrap();
        assert_eq!(entry.hours(), 5.5);
    }

    #[test]
    fn test_entry_rejects_end_before_start() {
        let result = TimeEntry::new(date(), time(14, 0), time(9, 0), "Teaching");
        assert!(matches!(result, Err(LogError::EndNotAfterStart { .. })));
    }

    #[test]
    fn test_entry_rejects_zero_length() {
        let result = TimeEntry::new(date(), time(9, 0), time(9, 0), "Teaching");
        assert!(matches!(result, Err(LogError::EndNotAfterStart { .. })));
    }

    #[test]
    fn test_entry_rejects_blank_activity() {
        let result = TimeEntry::new(date(), time(9, 0), time(10, 0), "   ");
        assert_eq!(result, Err(LogError::EmptyActivity));
    }

    #[test]
    fn test_serialization_round_trip() {
        let entry = TimeEntry::new(date(), time(9, 0), time(12, 0), "Lesson Planning").unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: TimeEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }
}
