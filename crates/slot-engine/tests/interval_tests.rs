//! Tests for interval merging and busy → free inversion.

use slot_engine::interval::{free_slots, invert_busy, merge_intervals, Interval, WorkWindow};

/// Helper to build a list of intervals from `(start, end)` minute pairs.
fn intervals(pairs: &[(i32, i32)]) -> Vec<Interval> {
    pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
}

fn window() -> WorkWindow {
    WorkWindow::new(540, 1080)
}

// ── merge_intervals ─────────────────────────────────────────────────────────

#[test]
fn touching_intervals_are_merged() {
    let merged = merge_intervals(intervals(&[(0, 60), (60, 120)]));
    assert_eq!(merged, intervals(&[(0, 120)]));
}

#[test]
fn overlapping_intervals_merge_to_widest_end() {
    // 10:00-11:30 and 11:00-12:00 → 10:00-12:00
    let merged = merge_intervals(intervals(&[(600, 690), (660, 720)]));
    assert_eq!(merged, intervals(&[(600, 720)]));
}

#[test]
fn contained_interval_does_not_shrink_block() {
    let merged = merge_intervals(intervals(&[(600, 900), (660, 720)]));
    assert_eq!(merged, intervals(&[(600, 900)]));
}

#[test]
fn unsorted_input_is_sorted_before_merging() {
    let merged = merge_intervals(intervals(&[(900, 960), (540, 600), (590, 620)]));
    assert_eq!(merged, intervals(&[(540, 620), (900, 960)]));
}

#[test]
fn gap_of_one_minute_keeps_blocks_apart() {
    let merged = merge_intervals(intervals(&[(0, 60), (61, 120)]));
    assert_eq!(merged, intervals(&[(0, 60), (61, 120)]));
}

#[test]
fn empty_input_merges_to_empty() {
    assert!(merge_intervals(Vec::new()).is_empty());
}

#[test]
fn already_merged_list_is_unchanged() {
    let disjoint = intervals(&[(540, 600), (660, 720), (900, 1000)]);
    assert_eq!(merge_intervals(disjoint.clone()), disjoint);
}

// ── invert_busy ─────────────────────────────────────────────────────────────

#[test]
fn no_busy_time_leaves_whole_window_free() {
    assert_eq!(invert_busy(&[], window()), intervals(&[(540, 1080)]));
}

#[test]
fn fully_busy_window_has_no_free_time() {
    assert!(invert_busy(&intervals(&[(540, 1080)]), window()).is_empty());
}

#[test]
fn single_busy_block_produces_two_gaps() {
    // Busy 10:00-11:00 → free 09:00-10:00 and 11:00-18:00
    let free = invert_busy(&intervals(&[(600, 660)]), window());
    assert_eq!(free, intervals(&[(540, 600), (660, 1080)]));
}

#[test]
fn busy_time_before_window_moves_cursor_only() {
    // 08:00-09:30 starts before the window and ends inside it.
    let free = invert_busy(&intervals(&[(480, 570)]), window());
    assert_eq!(free, intervals(&[(570, 1080)]));
}

#[test]
fn busy_time_running_past_window_end_leaves_no_trailing_gap() {
    let free = invert_busy(&intervals(&[(1020, 1200)]), window());
    assert_eq!(free, intervals(&[(540, 1020)]));
}

#[test]
fn gap_before_block_after_window_is_not_clipped() {
    // Only busy block is 19:00-20:00; the single gap runs up to its start.
    let free = invert_busy(&intervals(&[(1140, 1200)]), window());
    assert_eq!(free, intervals(&[(540, 1140)]));
}

#[test]
fn block_starting_at_window_start_produces_no_leading_gap() {
    let free = invert_busy(&intervals(&[(540, 600)]), window());
    assert_eq!(free, intervals(&[(600, 1080)]));
}

// ── free_slots ──────────────────────────────────────────────────────────────

#[test]
fn free_slots_filters_short_gaps() {
    // Busy 09:30-12:00 and 12:15-17:00 → gaps 30, 15 and 60 minutes.
    let busy = intervals(&[(735, 1020), (570, 720)]);
    let free = free_slots(busy, window(), 30);
    assert_eq!(free, intervals(&[(540, 570), (1020, 1080)]));
}

#[test]
fn free_slots_keeps_gap_exactly_at_minimum() {
    let free = free_slots(intervals(&[(600, 1080)]), window(), 60);
    assert_eq!(free, intervals(&[(540, 600)]));
}

#[test]
fn free_slots_merges_unsorted_overlapping_busy_time() {
    let busy = intervals(&[(700, 800), (600, 720), (750, 760)]);
    let free = free_slots(busy, window(), 0);
    assert_eq!(free, intervals(&[(540, 600), (800, 1080)]));
}

#[test]
fn free_slots_gap_runs_up_to_busy_time_after_window() {
    // 19:00-20:00 lies after the window; the gap before it reaches 19:00.
    let free = free_slots(intervals(&[(1140, 1200)]), window(), 30);
    assert_eq!(free, intervals(&[(540, 1140)]));
}

#[test]
fn free_slots_pass_reversed_interval_through() {
    // [20:00, 08:20] is reversed: it closes a gap at 20:00 but never moves
    // the cursor, so the trailing gap covers the whole window again.
    let free = free_slots(intervals(&[(1200, 500)]), window(), 60);
    assert_eq!(free, intervals(&[(540, 1200), (540, 1080)]));
}

// ── Interval helpers ────────────────────────────────────────────────────────

#[test]
fn contains_includes_endpoints() {
    let free = Interval::new(600, 720);
    assert!(free.contains(&Interval::new(600, 720)));
    assert!(free.contains(&Interval::new(630, 690)));
    assert!(!free.contains(&Interval::new(590, 650)));
    assert!(!free.contains(&Interval::new(700, 721)));
}

#[test]
fn parse_pair_and_format_pair() {
    let pair = ["09:15".to_string(), "10:45".to_string()];
    let interval = Interval::parse_pair(&pair).unwrap();
    assert_eq!(interval, Interval::new(555, 645));
    assert_eq!(interval.duration(), 90);
    assert_eq!(interval.to_pair(), pair);
}

#[test]
fn parse_pair_rejects_malformed_end() {
    let pair = ["09:15".to_string(), "10-45".to_string()];
    assert!(Interval::parse_pair(&pair).is_err());
}
