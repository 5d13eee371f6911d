//! End-to-end scenarios for a single approach signal.

mod common;

use approach_signal::core::{ApproachKey, Egress};
use approach_signal::signal::Detached;
use approach_signal::{resolve_pedestrian_state, ApproachSignal, LightColor, Lights, Mode};
use common::{RecordingGroup, RecordingSink};
use std::rc::Rc;
use LightColor::*;

const KEY: ApproachKey = ApproachKey {
    junction: approach_signal::core::JunctionId(1024),
    approach: approach_signal::core::ApproachId(17),
};

fn cycle_to(signal: &mut ApproachSignal<Rc<RecordingGroup>>, mode: Mode) {
    let full = Egress::new(true, true, true);
    while signal.mode() != mode {
        signal.cycle_mode(&full).unwrap();
    }
}

#[test]
fn uniform_green_resolves_green() {
    let mut sink = RecordingSink::default();
    let signal = ApproachSignal::new_uniform(KEY, Green, Detached, &mut sink, 0).unwrap();

    assert_eq!(signal.mode(), Mode::Simple);
    assert_eq!(signal.resolve_aggregate_vehicle_state(), Green);
    assert!(signal.is_any_green());
}

#[test]
fn cycling_without_left_egress_goes_to_single_right() {
    let mut sink = RecordingSink::default();
    let mut signal = ApproachSignal::new_uniform(KEY, Red, Detached, &mut sink, 0).unwrap();

    signal.cycle_mode(&Egress::new(false, true, true)).unwrap();

    assert_eq!(signal.mode(), Mode::SingleRight);
    assert_eq!(signal.left(), Red);
    assert_eq!(signal.right(), Red);
    assert_eq!(signal.through(), Red);
}

#[test]
fn toggling_left_in_all_mode_leaves_others() {
    let group = Rc::new(RecordingGroup::default());
    let mut sink = RecordingSink::default();
    let mut signal =
        ApproachSignal::new_uniform(KEY, Red, Rc::clone(&group), &mut sink, 0).unwrap();
    cycle_to(&mut signal, Mode::All);
    signal.set_color(approach_signal::Movement::Through, Green);
    assert_eq!(signal.lights(), Lights::new(Green, Red, Red));

    signal.toggle_left(&mut sink, 0).unwrap();

    assert_eq!(signal.left(), Green);
    assert_eq!(signal.through(), Green);
    assert_eq!(signal.right(), Red);
    assert_eq!(signal.resolve_aggregate_vehicle_state(), Green);
}

#[test]
fn toggling_through_in_simple_mode_turns_everything_green() {
    let group = Rc::new(RecordingGroup::default());
    let mut sink = RecordingSink::default();
    let mut signal =
        ApproachSignal::new_uniform(KEY, Red, Rc::clone(&group), &mut sink, 0).unwrap();
    sink.writes.clear();

    signal.toggle_through(&mut sink, 0).unwrap();

    assert_eq!(signal.lights(), Lights::uniform(Green));
    assert_eq!(signal.resolve_aggregate_vehicle_state(), Green);
    assert_eq!(group.changes.get(), 3);
    assert_eq!(sink.writes.len(), 2);
    assert!(sink.writes.iter().all(|w| w.vehicle == Green));
}

#[test]
fn all_red_pairs_with_green_pedestrians() {
    let mut sink = RecordingSink::default();
    let signal = ApproachSignal::new_uniform(KEY, Red, Detached, &mut sink, 0).unwrap();

    let vehicle = signal.resolve_aggregate_vehicle_state();

    assert_eq!(vehicle, Red);
    assert_eq!(resolve_pedestrian_state(vehicle), Green);
}

#[test]
fn every_sync_writes_both_slots_for_this_approach() {
    let group = Rc::new(RecordingGroup::default());
    group.pedestrian.set(Some(Green));
    let mut sink = RecordingSink::default();
    let mut signal =
        ApproachSignal::new_uniform(KEY, Red, Rc::clone(&group), &mut sink, 100).unwrap();

    signal.toggle_through(&mut sink, 900).unwrap();
    signal.sync_visuals(&mut sink, 1800).unwrap();

    assert_eq!(sink.writes.len(), 6);
    for pair in sink.writes.chunks(2) {
        assert_ne!(pair[0].slot, pair[1].slot);
        assert_eq!(pair[0].vehicle, pair[1].vehicle);
        assert_eq!(pair[0].pedestrian, Green);
    }
    assert!(sink
        .writes
        .iter()
        .all(|w| w.junction == KEY.junction && w.approach == KEY.approach));
}

#[test]
fn settle_then_reset_sequence() {
    let group = Rc::new(RecordingGroup::default());
    let mut sink = RecordingSink::default();
    let mut signal =
        ApproachSignal::new_uniform(KEY, RedToGreen, Rc::clone(&group), &mut sink, 0).unwrap();
    assert!(signal.is_any_in_transition());
    assert_eq!(signal.resolve_aggregate_vehicle_state(), RedToGreen);

    signal.force_settle();
    assert_eq!(signal.lights(), Lights::uniform(Green));
    assert_eq!(group.changes.get(), 3);

    signal.force_all_red();
    assert_eq!(signal.lights(), Lights::uniform(Red));
    assert_eq!(group.changes.get(), 3);
}
