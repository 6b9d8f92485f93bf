//! Unit tests for ba-behavior.

use std::sync::Arc;

use ba_core::{GridPos, ManualClock, UnitId};
use ba_layout::{GridLayout, GridLayoutBuilder, Layout};

use crate::{
    Behavior, BehaviorError, BlankBehavior, FrameBuffer, MusicalBehavior, MusicalBuilder,
    OutputSink, RecordingSink, ScanOrder, SinkWrite, breathing, find_distant_unit,
    select_distant_units,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Four units on the corners of a 10 × 10 square, numbered
/// (0,0), (10,0), (0,10), (10,10).
fn corners() -> GridLayout {
    let mut b = GridLayoutBuilder::new();
    for (x, y) in [(0, 0), (10, 0), (0, 10), (10, 10)] {
        b.add_unit(GridPos::new(x, y));
    }
    b.build().unwrap()
}

fn ids(range: std::ops::Range<u32>) -> Vec<UnitId> {
    range.map(UnitId).collect()
}

fn musical_in_order(
    layout: GridLayout,
    pool:   Vec<UnitId>,
    clock:  &ManualClock,
    params: &[(&str, f64)],
) -> MusicalBehavior<GridLayout, ManualClock> {
    let mut builder = MusicalBuilder::new(layout, pool)
        .scan_order(ScanOrder::InOrder)
        .clock(clock.clone());
    for &(name, value) in params {
        builder = builder.param(name, value);
    }
    builder.build().unwrap()
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sink_tests {
    use super::*;

    #[test]
    fn frame_buffer_starts_dark() {
        let fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.lit_cells(), 0);
        assert_eq!(fb.voiced_cells(), 0);
        assert_eq!(fb.cells().count(), 12);
    }

    #[test]
    fn off_array_writes_are_dropped() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_brightness(GridPos::new(-1, 0), 1.0);
        fb.set_brightness(GridPos::new(2, 0), 1.0);
        fb.set_volume(GridPos::new(0, 2), 1.0);
        assert_eq!(fb.lit_cells(), 0);
        assert_eq!(fb.voiced_cells(), 0);
        assert_eq!(fb.brightness_at(GridPos::new(-1, 0)), None);
    }

    #[test]
    fn channels_are_independent() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.set_brightness(GridPos::new(1, 1), 0.25);
        fb.set_volume(GridPos::new(2, 2), 1.0);
        fb.zero_volume();
        assert_eq!(fb.brightness_at(GridPos::new(1, 1)), Some(0.25));
        assert_eq!(fb.volume_at(GridPos::new(2, 2)), Some(0.0));
        fb.zero_brightness();
        assert_eq!(fb.lit_cells(), 0);
    }

    #[test]
    fn cells_are_row_major() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set_brightness(GridPos::new(2, 1), 1.0);
        let (pos, b, v) = fb.cells().last().unwrap();
        assert_eq!(pos, GridPos::new(2, 1));
        assert_eq!((b, v), (1.0, 0.0));
    }

    #[test]
    fn recording_sink_keeps_order() {
        let mut sink = RecordingSink::new();
        sink.zero_brightness();
        sink.set_volume(GridPos::new(-5, 0), 1.0);
        assert_eq!(
            sink.take(),
            vec![SinkWrite::ZeroBrightness, SinkWrite::Volume(GridPos::new(-5, 0), 1.0)]
        );
        assert!(sink.writes.is_empty());
    }
}

// ── BehaviorState / BlankBehavior ─────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use ba_core::ParamSet;

    use super::*;
    use crate::BehaviorState;

    #[test]
    fn starts_at_zero_and_constructed() {
        let state = BehaviorState::new(ParamSet::from_defaults([("speed", 2.0)]));
        assert_eq!(state.time(), 0.0);
        assert!(!state.is_running());
        assert_eq!(state.params().get("speed"), Some(2.0));
    }

    #[test]
    fn advance_accumulates() {
        let mut state = BehaviorState::new(ParamSet::default());
        state.advance(0.5);
        state.advance(0.0);
        state.advance(1.5);
        assert_eq!(state.time(), 2.0);
        assert!(state.is_running());
        assert_eq!(state.updates(), 3);
    }

    #[test]
    fn blank_renders_zero_frame() {
        let mut blank = BlankBehavior::new();
        blank.update(1.0);
        let mut sink = RecordingSink::new();
        blank.render(&mut sink);
        assert_eq!(sink.writes, vec![SinkWrite::ZeroBrightness, SinkWrite::ZeroVolume]);
        assert_eq!(blank.time(), 1.0);
        assert_eq!(blank.name(), "blank");
        assert!(blank.params().is_empty());
    }
}

// ── Selector ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;

    #[test]
    fn in_order_returns_first_qualifying() {
        let layout = GridLayout::rectangle(10, 1).unwrap();
        let pool = ids(0..10);
        let got = find_distant_unit(&pool, &[UnitId(0)], 5.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(got, Some(UnitId(5)));
    }

    #[test]
    fn first_slot_is_unconstrained() {
        let layout = corners();
        let got = find_distant_unit(&ids(0..4), &[], 1_000.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(got, Some(UnitId(0)));
    }

    #[test]
    fn none_when_nothing_is_far_enough() {
        let layout = GridLayout::rectangle(3, 3).unwrap();
        let got = find_distant_unit(&ids(0..9), &[UnitId(4)], 5.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(got, None);
    }

    #[test]
    fn empty_pool_is_none() {
        let layout = corners();
        assert_eq!(find_distant_unit(&[], &[], 0.0, &layout, &mut ScanOrder::InOrder), None);
    }

    #[test]
    fn accepted_units_are_not_returned_again() {
        let layout = corners();
        let pool = ids(0..2);
        let mut order = ScanOrder::InOrder;
        assert_eq!(find_distant_unit(&pool, &[UnitId(0)], 0.0, &layout, &mut order), Some(UnitId(1)));
        assert_eq!(find_distant_unit(&pool, &[UnitId(0), UnitId(1)], 0.0, &layout, &mut order), None);
    }

    #[test]
    fn distance_equal_to_minimum_qualifies() {
        let layout = GridLayout::rectangle(6, 1).unwrap();
        let got = find_distant_unit(&[UnitId(5)], &[UnitId(0)], 5.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(got, Some(UnitId(5)));
    }

    #[test]
    fn units_without_position_are_skipped() {
        let layout = corners();
        let pool = vec![UnitId(99), UnitId(2)];
        let got = find_distant_unit(&pool, &[], 0.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(got, Some(UnitId(2)));
    }

    #[test]
    fn zero_distance_fills_min_of_count_and_pool() {
        let layout = GridLayout::rectangle(4, 4).unwrap();
        let pool = ids(0..16);
        for count in [0, 1, 5, 16, 40] {
            for mut order in [ScanOrder::InOrder, ScanOrder::shuffled(3)] {
                let picked = select_distant_units(&pool, count, 0.0, &layout, &mut order);
                assert_eq!(picked.len(), count.min(pool.len()));
                let mut unique = picked.clone();
                unique.sort_unstable();
                unique.dedup();
                assert_eq!(unique.len(), picked.len(), "duplicate unit selected");
            }
        }
    }

    #[test]
    fn distance_beyond_extent_keeps_only_first_pick() {
        let layout = corners();
        let picked = select_distant_units(&ids(0..4), 3, 100.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(picked, vec![UnitId(0)]);
    }

    #[test]
    fn huge_count_is_bounded_by_pool() {
        let layout = corners();
        let picked = select_distant_units(
            &ids(0..4),
            u32::MAX as usize,
            0.0,
            &layout,
            &mut ScanOrder::shuffled(9),
        );
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn infeasible_slot_ends_selection() {
        // Three units on a line 4 apart: after (0,0), only (8,0) is 5 away,
        // and after that nothing is.
        let layout = GridLayout::rectangle(9, 1).unwrap();
        let pool = vec![UnitId(0), UnitId(4), UnitId(8)];
        let picked = select_distant_units(&pool, 10, 5.0, &layout, &mut ScanOrder::InOrder);
        assert_eq!(picked, vec![UnitId(0), UnitId(8)]);
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let layout = corners();
        let picked = select_distant_units(&[], 3, 0.0, &layout, &mut ScanOrder::shuffled(1));
        assert!(picked.is_empty());
    }

    #[test]
    fn shuffled_selections_are_pairwise_separated() {
        let layout = GridLayout::rectangle(16, 8).unwrap();
        let pool = ids(0..128);
        let mut order = ScanOrder::shuffled(2024);
        for _ in 0..50 {
            let picked = select_distant_units(&pool, 3, 5.0, &layout, &mut order);
            assert!(!picked.is_empty() && picked.len() <= 3);
            for (i, &a) in picked.iter().enumerate() {
                for &b in &picked[i + 1..] {
                    let d = layout.position_of(a).unwrap().distance(layout.position_of(b).unwrap());
                    assert!(d >= 5.0, "{a} and {b} only {d} apart");
                }
            }
        }
    }

    #[test]
    fn in_order_is_fully_deterministic() {
        let layout = GridLayout::rectangle(16, 8).unwrap();
        let pool = ids(0..128);
        let first = select_distant_units(&pool, 3, 5.0, &layout, &mut ScanOrder::InOrder);
        let mut order = ScanOrder::InOrder;
        for _ in 0..5 {
            assert_eq!(select_distant_units(&pool, 3, 5.0, &layout, &mut order), first);
        }
        assert_eq!(first, vec![UnitId(0), UnitId(5), UnitId(10)]);
    }

    #[test]
    fn shuffled_is_reproducible_per_seed() {
        let layout = GridLayout::rectangle(16, 8).unwrap();
        let pool = ids(0..128);
        let mut a = ScanOrder::shuffled(77);
        let mut b = ScanOrder::shuffled(77);
        for _ in 0..10 {
            assert_eq!(
                select_distant_units(&pool, 3, 5.0, &layout, &mut a),
                select_distant_units(&pool, 3, 5.0, &layout, &mut b),
            );
        }
    }
}

// ── Breathing envelope ────────────────────────────────────────────────────────

#[cfg(test)]
mod breathing_tests {
    use super::*;

    #[test]
    fn quarter_points_with_period_four() {
        assert_eq!(breathing(0.0, 4.0), 0.5);
        assert!(approx(breathing(1.0, 4.0), 1.0));
        assert!(approx(breathing(2.0, 4.0), 0.5));
        assert!(approx(breathing(3.0, 4.0), 0.0));
        assert!(approx(breathing(4.0, 4.0), 0.5));
    }

    #[test]
    fn stays_in_unit_interval() {
        for i in 0..10_000 {
            let t = i as f64 * 0.0137;
            let b = breathing(t, 3.0);
            assert!((0.0..=1.0).contains(&b), "b({t}) = {b}");
        }
    }

    #[test]
    fn is_periodic() {
        for i in 0..100 {
            let t = i as f64 * 0.1;
            assert!(approx(breathing(t, 3.0), breathing(t + 3.0, 3.0)));
        }
    }
}

// ── MusicalBehavior ───────────────────────────────────────────────────────────

#[cfg(test)]
mod musical_tests {
    use ba_layout::{MUSICAL_GROUP, StaticCatalog};

    use super::*;
    use crate::musical::{BREATHING_PERIOD, MIN_DISTANCE, NUM_TO_HIGHLIGHT, TRANSITION_DELAY};

    #[test]
    fn defaults() {
        let b = MusicalBuilder::new(corners(), ids(0..4)).build().unwrap();
        assert_eq!(b.params().get(NUM_TO_HIGHLIGHT), Some(3.0));
        assert_eq!(b.params().get(MIN_DISTANCE), Some(5.0));
        assert_eq!(b.params().get(BREATHING_PERIOD), Some(3.0));
        assert_eq!(b.params().get(TRANSITION_DELAY), Some(30.0));
        assert_eq!(b.params().len(), 4);
        assert_eq!(b.settings().num_to_highlight, 3);
        assert_eq!(b.name(), "musical");
    }

    #[test]
    fn huge_highlight_count_reselects_within_pool() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(
            corners(),
            ids(0..4),
            &clock,
            &[(NUM_TO_HIGHLIGHT, f64::from(u32::MAX)), (MIN_DISTANCE, 0.0)],
        );
        b.update(0.1);
        assert_eq!(&*b.highlighted(), &ids(0..4)[..]);
        assert_eq!(b.reselections(), 1);
    }

    #[test]
    fn constructed_state() {
        let b = MusicalBuilder::new(corners(), ids(0..4)).build().unwrap();
        assert!(b.highlighted().is_empty());
        assert_eq!(b.highlight_time(), None);
        assert_eq!(b.reselections(), 0);
        assert_eq!(b.time(), 0.0);
        assert!(!b.state().is_running());
    }

    #[test]
    fn unknown_param_rejected() {
        let err = MusicalBuilder::new(corners(), ids(0..4))
            .param("hue", 0.3)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, BehaviorError::Param(_)));
    }

    #[test]
    fn invalid_values_rejected() {
        for (name, value) in [
            (NUM_TO_HIGHLIGHT, -1.0),
            (NUM_TO_HIGHLIGHT, 1.5),
            (MIN_DISTANCE, -0.1),
            (MIN_DISTANCE, f64::NAN),
            (BREATHING_PERIOD, 0.0),
            (TRANSITION_DELAY, -30.0),
        ] {
            let result = MusicalBuilder::new(corners(), ids(0..4)).param(name, value).build();
            assert!(
                matches!(result, Err(BehaviorError::Config(_))),
                "{name} = {value} should be rejected"
            );
        }
    }

    #[test]
    fn pool_unit_without_position_rejected() {
        let err = MusicalBuilder::new(corners(), vec![UnitId(0), UnitId(7)])
            .build()
            .err()
            .unwrap();
        assert_eq!(err, BehaviorError::UnknownUnit(UnitId(7)));
    }

    #[test]
    fn from_catalog_uses_musical_group() {
        let catalog = StaticCatalog::new()
            .with_group(MUSICAL_GROUP, [UnitId(3), UnitId(1)])
            .with_group("ambient", [UnitId(0)]);
        let b = MusicalBuilder::from_catalog(corners(), &catalog).build().unwrap();
        assert_eq!(b.pool(), &[UnitId(3), UnitId(1)]);
    }

    #[test]
    fn render_before_any_update_is_zero_frame() {
        let clock = ManualClock::default();
        let b = musical_in_order(corners(), ids(0..4), &clock, &[]);
        let mut sink = RecordingSink::new();
        b.render(&mut sink);
        assert_eq!(sink.writes, vec![SinkWrite::ZeroBrightness, SinkWrite::ZeroVolume]);
    }

    #[test]
    fn first_update_selects() {
        let clock = ManualClock::starting_at(100.0);
        let mut b = musical_in_order(corners(), ids(0..4), &clock, &[]);
        b.update(0.1);
        assert_eq!(b.reselections(), 1);
        assert_eq!(b.highlight_time(), Some(100.0));
        // All corners are 10 apart, so three of the four fit.
        assert_eq!(&*b.highlighted(), &[UnitId(0), UnitId(1), UnitId(2)]);
    }

    #[test]
    fn reselection_follows_wall_clock() {
        let clock = ManualClock::starting_at(0.0);
        let mut b = musical_in_order(corners(), ids(0..4), &clock, &[(TRANSITION_DELAY, 30.0)]);

        b.update(1.0 / 60.0);
        assert_eq!(b.reselections(), 1);
        let first = b.highlighted();

        clock.set(29.0);
        b.update(1.0 / 60.0);
        assert_eq!(b.reselections(), 1);
        assert!(Arc::ptr_eq(&first, &b.highlighted()), "highlight set replaced too early");

        clock.set(30.0);
        b.update(1.0 / 60.0);
        assert_eq!(b.reselections(), 1, "cadence boundary is exclusive");

        clock.set(30.5);
        b.update(1.0 / 60.0);
        assert_eq!(b.reselections(), 2);
        assert_eq!(b.highlight_time(), Some(30.5));

        clock.set(31.0);
        b.update(1.0 / 60.0);
        assert_eq!(b.reselections(), 2);
    }

    #[test]
    fn sim_time_ignores_wall_clock() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), ids(0..4), &clock, &[]);
        for _ in 0..4 {
            b.update(0.25);
        }
        assert!(approx(b.time(), 1.0));

        // A long simulated step does not trigger reselection on its own.
        b.update(1_000.0);
        assert_eq!(b.reselections(), 1);
    }

    #[test]
    fn explicit_reselect_replaces_wholesale() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), ids(0..4), &clock, &[]);
        b.reselect(2);
        let before = b.highlighted();
        assert_eq!(before.len(), 2);
        b.reselect(1);
        assert_eq!(before.len(), 2, "old snapshot must be untouched");
        assert_eq!(&*b.highlighted(), &[UnitId(0)]);
    }

    #[test]
    fn four_corner_scenario() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(
            corners(),
            ids(0..4),
            &clock,
            &[(NUM_TO_HIGHLIGHT, 2.0), (MIN_DISTANCE, 5.0)],
        );
        b.update(0.0);
        let highlighted = b.highlighted();
        assert_eq!(highlighted.len(), 2);

        let layout = corners();
        let centers: Vec<GridPos> = highlighted.iter().map(|&u| layout.position_of(u).unwrap()).collect();
        let halos: Vec<GridPos> = centers.iter().flat_map(|c| c.neighbors()).collect();

        let mut fb = FrameBuffer::new(11, 11);
        b.render(&mut fb);
        for (pos, brightness, volume) in fb.cells() {
            if centers.contains(&pos) {
                assert_eq!(brightness, 0.5, "center {pos}");
                assert_eq!(volume, 1.0, "center {pos}");
            } else if halos.contains(&pos) {
                assert_eq!(brightness, 1.0, "halo {pos}");
                assert_eq!(volume, 0.0, "halo {pos}");
            } else {
                assert_eq!((brightness, volume), (0.0, 0.0), "background {pos}");
            }
        }

        // Off-array halo cells are still written; the sink decides to drop them.
        let mut sink = RecordingSink::new();
        b.render(&mut sink);
        let brightness_writes = sink
            .writes
            .iter()
            .filter(|w| matches!(w, SinkWrite::Brightness(..)))
            .count();
        assert_eq!(brightness_writes, 2 * 5);
        assert!(sink.writes.contains(&SinkWrite::Brightness(GridPos::new(-1, 0), 1.0)));
    }

    #[test]
    fn render_write_order() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), vec![UnitId(3)], &clock, &[]);
        b.update(0.0);
        let mut sink = RecordingSink::new();
        b.render(&mut sink);
        let c = GridPos::new(10, 10);
        assert_eq!(
            sink.writes,
            vec![
                SinkWrite::ZeroBrightness,
                SinkWrite::ZeroVolume,
                SinkWrite::Volume(c, 1.0),
                SinkWrite::Brightness(c, 0.5),
                SinkWrite::Brightness(GridPos::new(9, 10), 1.0),
                SinkWrite::Brightness(GridPos::new(11, 10), 1.0),
                SinkWrite::Brightness(GridPos::new(10, 9), 1.0),
                SinkWrite::Brightness(GridPos::new(10, 11), 1.0),
            ]
        );
    }

    #[test]
    fn render_is_idempotent() {
        let clock = ManualClock::default();
        let mut b = MusicalBuilder::new(GridLayout::rectangle(16, 8).unwrap(), ids(0..128))
            .clock(clock.clone())
            .build()
            .unwrap();
        b.update(0.7);

        let mut first = RecordingSink::new();
        let mut second = RecordingSink::new();
        b.render(&mut first);
        b.render(&mut second);
        assert_eq!(first, second);
        assert_eq!(b.time(), 0.7);
    }

    #[test]
    fn breathing_follows_sim_clock() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), vec![UnitId(0)], &clock, &[(BREATHING_PERIOD, 4.0)]);
        b.update(1.0);
        let mut fb = FrameBuffer::new(11, 11);
        b.render(&mut fb);
        assert!(approx(fb.brightness_at(GridPos::new(0, 0)).unwrap(), 1.0));

        b.update(2.0);
        b.render(&mut fb);
        assert!(approx(fb.brightness_at(GridPos::new(0, 0)).unwrap(), 0.0));
        assert_eq!(fb.volume_at(GridPos::new(0, 0)), Some(1.0));
    }

    #[test]
    fn overlapping_halos_last_write_wins() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(
            GridLayout::rectangle(3, 1).unwrap(),
            ids(0..3),
            &clock,
            &[(NUM_TO_HIGHLIGHT, 2.0), (MIN_DISTANCE, 1.0)],
        );
        b.update(0.0);
        assert_eq!(&*b.highlighted(), &[UnitId(0), UnitId(1)]);

        let mut fb = FrameBuffer::new(3, 1);
        b.render(&mut fb);
        // Unit 1's halo overwrites unit 0's center, and vice versa.
        assert_eq!(fb.brightness_at(GridPos::new(0, 0)), Some(1.0));
        assert_eq!(fb.brightness_at(GridPos::new(1, 0)), Some(0.5));
        assert_eq!(fb.brightness_at(GridPos::new(2, 0)), Some(1.0));
        assert_eq!(fb.voiced_cells(), 2);
    }

    #[test]
    fn previous_frame_is_cleared() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), ids(0..4), &clock, &[(NUM_TO_HIGHLIGHT, 0.0)]);
        let mut fb = FrameBuffer::new(11, 11);
        fb.set_brightness(GridPos::new(5, 5), 1.0);
        fb.set_volume(GridPos::new(5, 5), 1.0);
        b.update(0.1);
        b.render(&mut fb);
        assert!(b.highlighted().is_empty());
        assert_eq!((fb.lit_cells(), fb.voiced_cells()), (0, 0));
    }

    #[test]
    fn empty_pool_degrades_to_silence() {
        let clock = ManualClock::default();
        let mut b = musical_in_order(corners(), vec![], &clock, &[]);
        b.update(0.1);
        assert_eq!(b.reselections(), 1);
        assert!(b.highlighted().is_empty());
        let mut sink = RecordingSink::new();
        b.render(&mut sink);
        assert_eq!(sink.writes, vec![SinkWrite::ZeroBrightness, SinkWrite::ZeroVolume]);
    }

    #[test]
    fn same_seed_same_highlights() {
        let run = |seed: u64| {
            let clock = ManualClock::default();
            let mut b = MusicalBuilder::new(GridLayout::rectangle(16, 8).unwrap(), ids(0..128))
                .scan_order(ScanOrder::shuffled(seed))
                .clock(clock.clone())
                .build()
                .unwrap();
            let mut picks = Vec::new();
            for step in 0..5 {
                clock.set(step as f64 * 31.0);
                b.update(0.02);
                picks.push(b.highlighted().to_vec());
            }
            picks
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn behaviors_are_object_safe() {
        let clock = ManualClock::default();
        let mut behaviors: Vec<Box<dyn Behavior>> = vec![
            Box::new(BlankBehavior::new()),
            Box::new(musical_in_order(corners(), ids(0..4), &clock, &[])),
        ];
        let mut fb = FrameBuffer::new(11, 11);
        for b in &mut behaviors {
            b.update(0.5);
            b.render(&mut fb);
            assert_eq!(b.time(), 0.5);
        }
        assert_eq!(fb.voiced_cells(), 3);
    }
}
