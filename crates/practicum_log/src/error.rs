//! Log error types

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogError {
    #[error("End time {end} is not after start time {start}")]
    EndNotAfterStart { start: NaiveTime, end: NaiveTime },

    #[error("Activity description must not be empty")]
    EmptyActivity,

    #[error("Hours goal must be positive, got {0}")]
    InvalidGoal(f64),
}

pub type Result<T> = std::result::Result<T, LogError>;
