//! Log book and progress aggregation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::TimeEntry;
use crate::error::{LogError, Result};

/// A student's logged time entries plus the hours goal they count toward.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogBook {
    goal_hours: f64,
    entries: Vec<TimeEntry>,
}

impl LogBook {
    /// Create an empty book with a positive hours goal.
    pub fn new(goal_hours: f64) -> Result<Self> {
        if !(goal_hours > 0.0) {
            return Err(LogError::InvalidGoal(goal_hours));
        }

        Ok(Self {
            goal_hours,
            entries: Vec::new(),
        })
    }

    pub fn goal_hours(&self) -> f64 {
        self.goal_hours
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Add an entry to the book.
    pub fn log(&mut self, entry: TimeEntry) {
        debug!(id = %entry.id, hours = entry.hours(), "time entry logged");
        self.entries.push(entry);
    }

    /// Total hours logged so far.
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(TimeEntry::hours).sum()
    }

    /// Entries ordered newest day first, the order the summary screen
    /// lists them. Entries on the same day keep their logged order.
    pub fn recent_first(&self) -> Vec<&TimeEntry> {
        let mut entries: Vec<&TimeEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    /// Aggregate progress toward the goal.
    pub fn summary(&self) -> ProgressSummary {
        let completed_hours = self.total_hours();
        let remaining_hours = (self.goal_hours - completed_hours).max(0.0);
        let percent_complete =
            ((completed_hours / self.goal_hours * 100.0).round() as u8).min(100);

        ProgressSummary {
            completed_hours,
            goal_hours: self.goal_hours,
            remaining_hours,
            percent_complete,
        }
    }
}

/// Aggregate view of progress toward the hours goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSummary {
    pub completed_hours: f64,

    pub goal_hours: f64,

    /// Hours still to log. Floors at zero once the goal is met.
    pub remaining_hours: f64,

    /// Rounded completion percentage, capped at 100.
    pub percent_complete: u8,
}
