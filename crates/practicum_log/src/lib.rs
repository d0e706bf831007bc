//! # Practicum Log
//!
//! Domain model for practicum-hour tracking: validated time entries and
//! aggregate progress toward an hours goal.

pub mod book;
pub mod entry;
pub mod error;

// Re-exports
pub use book::{LogBook, ProgressSummary};
pub use entry::TimeEntry;
pub use error::LogError;
