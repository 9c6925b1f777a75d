//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A time-of-day string was not a valid 24-hour `HH:MM` value.
    #[error("Invalid time of day: {0}")]
    Format(String),

    /// The booked range does not span exactly the requested duration.
    #[error("Invalid duration: slot spans {actual} minutes, expected {expected}")]
    InvalidDuration { expected: i32, actual: i32 },

    /// The booked range is not inside any common free slot.
    #[error("Slot not available: {start}-{end}")]
    SlotUnavailable { start: String, end: String },
}

pub type Result<T> = std::result::Result<T, SlotError>;
