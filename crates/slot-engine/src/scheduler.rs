//! Group availability and first-come-first-served booking.
//!
//! A [`Scheduler`] owns every user's busy intervals plus the slots already
//! booked for the group. Free time is always derived fresh from that state;
//! nothing is cached between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Result, SlotError};
use crate::interval::{free_slots, Interval, WorkWindow};
use crate::time::to_time;

/// Maximum number of free slots returned by [`Scheduler::suggest`].
pub const MAX_SUGGESTIONS: usize = 3;

/// Integer key identifying a user.
pub type UserId = i64;

/// One user's busy intervals as `["HH:MM", "HH:MM"]` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSlots {
    pub id: UserId,
    pub busy: Vec<[String; 2]>,
}

/// A user's busy intervals alongside every group booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub busy: Vec<[String; 2]>,
    pub booked: Vec<[String; 2]>,
}

/// In-memory busy state for a group of users.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    window: WorkWindow,
    busy: BTreeMap<UserId, Vec<Interval>>,
    booked: Vec<Interval>,
}

impl Scheduler {
    /// An empty scheduler over the default 09:00-18:00 window.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: WorkWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    pub fn window(&self) -> WorkWindow {
        self.window
    }

    /// Replace `user_id`'s busy intervals wholesale. Intervals are not checked
    /// for `start <= end`.
    pub fn replace_user_busy_slots(&mut self, user_id: UserId, intervals: Vec<Interval>) {
        self.busy.insert(user_id, intervals);
    }

    /// Parse and store busy intervals for every listed user.
    ///
    /// All times are parsed before anything is stored, so a malformed entry
    /// leaves the scheduler unchanged. Returns the number of users saved.
    pub fn save_slots(&mut self, users: &[UserSlots]) -> Result<usize> {
        let parsed = users
            .iter()
            .map(|user| -> Result<(UserId, Vec<Interval>)> {
                let intervals = user
                    .busy
                    .iter()
                    .map(Interval::parse_pair)
                    .collect::<Result<Vec<_>>>()?;
                Ok((user.id, intervals))
            })
            .collect::<Result<Vec<_>>>()?;

        let count = parsed.len();
        for (user_id, intervals) in parsed {
            debug!(user_id, intervals = intervals.len(), "replacing busy slots");
            self.replace_user_busy_slots(user_id, intervals);
        }
        info!(users = count, "saved busy slots");
        Ok(count)
    }

    /// Every free slot of at least `duration` minutes common to all users,
    /// start-ascending and uncapped.
    pub fn common_free_slots(&self, duration: i32) -> Vec<Interval> {
        let all_busy: Vec<Interval> = self
            .busy
            .values()
            .flatten()
            .chain(self.booked.iter())
            .copied()
            .collect();

        free_slots(all_busy, self.window, duration)
    }

    /// The first [`MAX_SUGGESTIONS`] common free slots of at least `duration`
    /// minutes, formatted as `["HH:MM", "HH:MM"]` pairs.
    pub fn suggest(&self, duration: i32) -> Vec<[String; 2]> {
        let suggestions: Vec<[String; 2]> = self
            .common_free_slots(duration)
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(Interval::to_pair)
            .collect();
        debug!(duration, found = suggestions.len(), "computed suggestions");
        suggestions
    }

    /// `user_id`'s busy intervals (empty for an unknown user) and all group
    /// bookings.
    pub fn calendar(&self, user_id: UserId) -> Calendar {
        let busy: Vec<[String; 2]> = self
            .busy
            .get(&user_id)
            .map(|intervals| intervals.iter().map(Interval::to_pair).collect())
            .unwrap_or_default();

        Calendar {
            busy,
            booked: self.booked.iter().map(Interval::to_pair).collect(),
        }
    }

    /// Book `slot` for the whole group.
    ///
    /// The slot must span exactly `duration` minutes and lie inside one of
    /// the current common free slots. On success it is recorded as a group
    /// booking and appended to every known user's busy intervals. A rejected
    /// booking changes nothing.
    pub fn book(&mut self, slot: Interval, duration: i32) -> Result<Interval> {
        if slot.duration() != duration {
            warn!(
                start = %to_time(slot.start),
                end = %to_time(slot.end),
                duration,
                "rejected booking with mismatched duration"
            );
            return Err(SlotError::InvalidDuration {
                expected: duration,
                actual: slot.duration(),
            });
        }

        let available = self
            .common_free_slots(duration)
            .iter()
            .any(|free| free.contains(&slot));

        if !available {
            warn!(
                start = %to_time(slot.start),
                end = %to_time(slot.end),
                "rejected booking outside common free time"
            );
            return Err(SlotError::SlotUnavailable {
                start: to_time(slot.start),
                end: to_time(slot.end),
            });
        }

        self.booked.push(slot);
        for intervals in self.busy.values_mut() {
            intervals.push(slot);
        }

        info!(
            start = %to_time(slot.start),
            end = %to_time(slot.end),
            users = self.busy.len(),
            "booked slot"
        );
        Ok(slot)
    }

    /// Parse a `["HH:MM", "HH:MM"]` pair and [`book`](Self::book) it.
    pub fn book_pair(&mut self, slot: &[String; 2], duration: i32) -> Result<Interval> {
        let interval = Interval::parse_pair(slot)?;
        self.book(interval, duration)
    }
}
