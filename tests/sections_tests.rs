// Host-side tests for the scroll-offset section tracker.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod sections {
        include!("../src/core/sections.rs");
    }
}

use scene_core::sections::SectionTracker;

#[test]
fn starts_at_section_zero() {
    let tracker = SectionTracker::new(3);
    assert_eq!(tracker.current(), 0);
}

#[test]
fn scenario_walkthrough() {
    let mut tracker = SectionTracker::new(3);
    // offset 0 of viewport 800 -> still section 0, no signal
    assert_eq!(tracker.observe(0.0, 800.0), None);
    // 850 / 800 rounds to 1 -> signal fires once
    assert_eq!(tracker.observe(850.0, 800.0), Some(1));
    // same offset again -> no duplicate signal
    assert_eq!(tracker.observe(850.0, 800.0), None);
    assert_eq!(tracker.current(), 1);
    // 1600 / 800 = 2 exactly
    assert_eq!(tracker.observe(1600.0, 800.0), Some(2));
}

#[test]
fn clamps_beyond_the_last_section() {
    let mut tracker = SectionTracker::new(3);
    assert_eq!(tracker.observe(100_000.0, 800.0), Some(2));
    assert_eq!(tracker.current(), 2);
    // Scrolling even further stays clamped and silent
    assert_eq!(tracker.observe(999_999.0, 800.0), None);
}

#[test]
fn negative_offset_clamps_to_zero() {
    let mut tracker = SectionTracker::new(3);
    tracker.observe(850.0, 800.0);
    assert_eq!(tracker.observe(-50.0, 800.0), Some(0));
}

#[test]
fn degenerate_viewport_is_ignored() {
    let mut tracker = SectionTracker::new(3);
    assert_eq!(tracker.observe(850.0, 0.0), None);
    assert_eq!(tracker.observe(850.0, -100.0), None);
    assert_eq!(tracker.current(), 0);
}

#[test]
fn zero_section_count_never_emits() {
    let mut tracker = SectionTracker::new(0);
    assert_eq!(tracker.observe(850.0, 800.0), None);
}

#[test]
fn midpoint_rounds_away_from_zero() {
    // Exactly half a viewport: f32::round is half-away-from-zero, so this
    // lands in section 1.
    let mut tracker = SectionTracker::new(3);
    assert_eq!(tracker.observe(400.0, 800.0), Some(1));
}

#[test]
fn index_is_always_in_range() {
    let mut tracker = SectionTracker::new(3);
    for offset in (0..20).map(|i| i as f32 * 500.0) {
        tracker.observe(offset, 800.0);
        assert!(tracker.current() < 3, "index escaped at offset {offset}");
    }
}
