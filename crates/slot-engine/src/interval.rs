//! Busy/free interval arithmetic over a single day.
//!
//! Busy intervals are sorted and merged into non-overlapping blocks, then
//! inverted against a work window to produce the free gaps between them.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::{to_minutes, to_time};

/// A `[start, end]` range of minute offsets.
///
/// `start <= end` is expected but not enforced; a reversed interval is carried
/// through every computation as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: i32,
    pub end: i32,
}

impl Interval {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Length in minutes. Negative for a reversed interval.
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// True when `other` lies entirely inside `self`, endpoints included.
    pub fn contains(&self, other: &Interval) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Parse a `["HH:MM", "HH:MM"]` pair.
    pub fn parse_pair(pair: &[String; 2]) -> Result<Self> {
        Ok(Self {
            start: to_minutes(&pair[0])?,
            end: to_minutes(&pair[1])?,
        })
    }

    /// Format as a `["HH:MM", "HH:MM"]` pair.
    pub fn to_pair(&self) -> [String; 2] {
        [to_time(self.start), to_time(self.end)]
    }
}

/// The daily bounds within which free time is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: i32,
    pub end: i32,
}

impl WorkWindow {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }
}

impl Default for WorkWindow {
    /// 09:00 to 18:00.
    fn default() -> Self {
        Self::new(540, 1080)
    }
}

/// Merge overlapping or touching intervals.
///
/// Consumes the input, sorts it by `(start, end)` and sweeps left to right.
/// A new block starts only when the previous block ends strictly before the
/// next interval starts, so `[0,60]` and `[60,120]` merge into `[0,120]`.
/// The result is start-ascending and free of overlaps and touches.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}

/// Compute the free gaps in `window` around already-merged busy blocks.
///
/// `busy` must be sorted by start and non-overlapping (the output of
/// [`merge_intervals`]); it is not merged here. Gaps are not clipped to
/// `window.end`: a busy block starting after the window still closes a gap
/// that reaches past it.
pub fn invert_busy(busy: &[Interval], window: WorkWindow) -> Vec<Interval> {
    let mut free = Vec::new();
    let mut cursor = window.start;

    for block in busy {
        if block.start > cursor {
            free.push(Interval::new(cursor, block.start));
        }
        cursor = cursor.max(block.end);
    }

    // Trailing free time after the last busy block.
    if cursor < window.end {
        free.push(Interval::new(cursor, window.end));
    }

    free
}

/// Free slots of at least `min_duration` minutes, start-ascending.
///
/// Busy time is merged and inverted as-is. Busy time after the window and
/// reversed intervals flow through [`invert_busy`] unchanged, so a returned
/// slot can reach past `window.end`.
pub fn free_slots(busy: Vec<Interval>, window: WorkWindow, min_duration: i32) -> Vec<Interval> {
    let merged = merge_intervals(busy);
    invert_busy(&merged, window)
        .into_iter()
        .filter(|slot| slot.duration() >= min_duration)
        .collect()
}
