//! # slot-engine
//!
//! Finds free time common to a group of users and books it.
//!
//! Each user's busy intervals, plus every slot already booked for the group,
//! are merged into one busy timeline over a single day. Inverting that
//! timeline against the work window (09:00-18:00 by default) yields the
//! common free slots. A booking is accepted only when it fits entirely inside
//! one of them.
//!
//! ## Modules
//!
//! - [`time`] — `HH:MM` strings ↔ minutes since midnight
//! - [`interval`] — Interval merging and busy → free inversion
//! - [`scheduler`] — Group busy state, suggestions and booking
//! - [`error`] — Error types

pub mod error;
pub mod interval;
pub mod scheduler;
pub mod time;

pub use error::SlotError;
pub use interval::{free_slots, invert_busy, merge_intervals, Interval, WorkWindow};
pub use scheduler::{Calendar, Scheduler, UserId, UserSlots, MAX_SUGGESTIONS};
pub use time::{to_minutes, to_time};
