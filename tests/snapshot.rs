//! Snapshot round-trip and validation tests.

use roundtally::{
    EngineOptions, GroupLabel, RoundState, ScoringEngine, Snapshot, SnapshotError, Timestamp,
};

fn label(text: &str) -> GroupLabel {
    GroupLabel::new(text)
}

fn populated_engine() -> ScoringEngine {
    let mut engine = ScoringEngine::new(EngineOptions::default()).unwrap();

    engine.start_round();
    for (group, placement) in [("A", 1), ("B", 2), ("C", 3), ("D", 4)] {
        engine.set_placement(&label(group), placement).unwrap();
    }
    engine
        .finalize_round_at(Timestamp::from_millis(1_000))
        .unwrap();

    // Leave a second round open with a partial placement map.
    engine.start_round();
    engine.set_placement(&label("B"), 1).unwrap();
    engine.set_placement(&label("D"), 2).unwrap();

    engine
}

#[test]
fn snapshot_round_trips_through_json() {
    let engine = populated_engine();
    let snapshot = engine.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored_snapshot: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored_snapshot, snapshot);

    let restored =
        ScoringEngine::from_snapshot(EngineOptions::default(), restored_snapshot).unwrap();

    assert_eq!(restored.groups(), engine.groups());
    assert_eq!(restored.current_round(), engine.current_round());
    assert_eq!(restored.state(), RoundState::InProgress);
    assert_eq!(restored.history(), engine.history());
    assert_eq!(restored.compute_ranking(), engine.compute_ranking());
    for group in engine.groups() {
        assert_eq!(restored.total(group), engine.total(group));
        assert_eq!(restored.placement(group), engine.placement(group));
    }
}

#[test]
fn snapshot_uses_historical_field_names() {
    let value = serde_json::to_value(populated_engine().snapshot()).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "groups",
        "currentRound",
        "roundHistory",
        "totalScores",
        "isRoundInProgress",
        "currentRoundData",
    ] {
        assert!(object.contains_key(key), "missing key `{key}`");
    }
}

#[test]
fn groups_without_totals_restore_to_zero() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.total_scores.retain(|(group, _)| *group != label("C"));

    let restored = ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap();
    assert_eq!(restored.total(&label("C")), Some(0));
    assert_eq!(restored.total(&label("A")), Some(4));
}

#[test]
fn stale_placements_are_dropped_when_no_round_is_open() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.is_round_in_progress = false;

    let restored = ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap();
    assert_eq!(restored.state(), RoundState::Idle);
    assert_eq!(restored.placement(&label("B")), None);
    assert!(restored.snapshot().current_round_data.is_empty());
}

#[test]
fn rejects_zero_round_number() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.current_round = 0;

    assert_eq!(
        ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap_err(),
        SnapshotError::ZeroRound
    );
}

#[test]
fn rejects_duplicate_roster_labels() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.groups.push(label("A"));

    assert_eq!(
        ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap_err(),
        SnapshotError::DuplicateGroup(label("A"))
    );
}

#[test]
fn rejects_totals_for_unknown_groups() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.total_scores.push((label("Z"), 12));

    assert_eq!(
        ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap_err(),
        SnapshotError::UnknownGroup(label("Z"))
    );
}

#[test]
fn rejects_out_of_range_stored_placements() {
    let mut snapshot = populated_engine().snapshot();
    snapshot.current_round_data.push((label("C"), 9));

    assert_eq!(
        ScoringEngine::from_snapshot(EngineOptions::default(), snapshot).unwrap_err(),
        SnapshotError::PlacementOutOfRange {
            group: label("C"),
            placement: 9,
            limit: 4
        }
    );
}

#[test]
fn restored_engine_resets_to_its_options_roster() {
    let options = EngineOptions::default().with_groups(["North", "South"]);
    let mut engine = ScoringEngine::new(options.clone()).unwrap();
    engine.add_group("East").unwrap();

    let snapshot = engine.snapshot();
    let mut restored = ScoringEngine::from_snapshot(options, snapshot).unwrap();
    assert_eq!(restored.groups().len(), 3);

    restored.reset();
    assert_eq!(restored.groups(), [label("North"), label("South")]);
}
