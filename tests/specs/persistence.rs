//! Persisted snapshot shape and history invariants.

use crate::prelude::{fresh_state, run_codes};
use redgreen_core::{FakeClock, Phase};
use similar_asserts::assert_eq;

#[test]
fn exit_code_history_length_matches_call_count() {
    let clock = FakeClock::new();
    let mut state = fresh_state();
    let codes = [1, 0, 5, 2, 99];

    run_codes(Phase::Green, &codes, &mut state, &clock);

    assert_eq!(state.exit_code_history.len(), codes.len());
    assert_eq!(
        state.exit_code_history.last().copied(),
        state.exit_code
    );
    assert_eq!(state.route_history.len(), codes.len());
}

#[test]
fn snapshot_exposes_the_checkpoint_fields() {
    let clock = FakeClock::new();
    let mut state = fresh_state();
    run_codes(Phase::Red, &[1], &mut state, &clock);

    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["exit_code"], serde_json::json!(1));
    assert_eq!(json["exit_code_history"], serde_json::json!([1]));
    assert!(json["route_history"][0].as_str().unwrap().contains("next_phase"));
    assert_eq!(json["run_id"], serde_json::json!("spec-run"));
}

#[test]
fn snapshot_survives_a_persist_and_restore_cycle() {
    let clock = FakeClock::new();
    let mut state = fresh_state();
    run_codes(Phase::Red, &[4, 4], &mut state, &clock);

    // Engine checkpoints, restarts, and restores mid-streak
    let checkpoint = serde_json::to_string(&state).unwrap();
    let mut restored: redgreen_verifier::VerifyState =
        serde_json::from_str(&checkpoint).unwrap();

    // The retry streak continues where it left off: two more retryable
    // outcomes and the restored run escalates
    let decisions = run_codes(Phase::Red, &[4, 4], &mut restored, &clock);
    assert!(!decisions[0].requires_human);
    assert!(decisions[1].requires_human);
    assert_eq!(restored.exit_code_history, vec![4, 4, 4, 4]);
}

#[test]
fn record_history_is_capped_without_affecting_counters() {
    let clock = FakeClock::new();
    let mut state = fresh_state();

    // Alternate failing and passing GREEN runs well past the cap
    let codes: Vec<i32> = (0..130).map(|i| i % 2).collect();
    run_codes(Phase::Green, &codes, &mut state, &clock);

    assert_eq!(state.history.len(), state.history_cap());
    // The uncapped engine-facing lists keep everything
    assert_eq!(state.exit_code_history.len(), codes.len());
    assert_eq!(state.route_history.len(), codes.len());
    // Last record still mirrors the last decision
    assert_eq!(
        state.last_record().map(|r| r.outcome.code()),
        state.exit_code
    );
}
