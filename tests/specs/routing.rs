//! End-to-end routing decisions, phase by phase.

use crate::prelude::{fresh_state, run_codes};
use redgreen_core::{FakeClock, NextStep, Phase};
use redgreen_verifier::{verify_green_phase, verify_red_phase, TestRunResult};

#[test]
fn a_full_tdd_cycle_routes_cleanly() {
    let clock = FakeClock::new();
    let mut state = fresh_state();

    // RED: the new test fails, as it should
    let red = run_codes(Phase::Red, &[1], &mut state, &clock);
    assert_eq!(red[0].next_step, NextStep::NextPhase);

    // GREEN: two implementation passes, then the suite goes green
    let green = run_codes(Phase::Green, &[1, 1, 0], &mut state, &clock);
    assert_eq!(green[0].next_step, NextStep::Implement);
    assert_eq!(green[1].next_step, NextStep::Implement);
    assert_eq!(green[2].next_step, NextStep::NextPhase);

    // REFACTOR: suite stays green
    let refactor = run_codes(Phase::Refactor, &[0], &mut state, &clock);
    assert_eq!(refactor[0].next_step, NextStep::NextPhase);

    assert!(state.route_history.iter().all(|entry| !entry.is_empty()));
    assert_eq!(state.exit_code_history, vec![1, 1, 1, 0, 0]);
}

#[test]
fn premature_green_in_red_pauses_the_run() {
    let clock = FakeClock::new();
    let mut state = fresh_state();

    let decision = verify_red_phase(&TestRunResult::new(0, Phase::Red), &mut state, &clock);

    assert_eq!(decision.next_step, NextStep::HumanReview);
    assert!(decision.requires_human);
}

#[test]
fn fatal_outcomes_escalate_on_first_occurrence() {
    let clock = FakeClock::new();

    for raw in [2, 3] {
        let mut state = fresh_state();
        let decision =
            verify_green_phase(&TestRunResult::new(raw, Phase::Green), &mut state, &clock);

        assert!(decision.requires_human, "exit code {raw} must escalate");
        assert_eq!(decision.next_step, NextStep::HumanReview);
        // No retry was spent or offered
        assert!(!decision.retry_allowed);
    }
}

#[test]
fn out_of_contract_exit_code_escalates_with_diagnostics() {
    let clock = FakeClock::new();
    let mut state = fresh_state();

    let decision = verify_green_phase(&TestRunResult::new(99, Phase::Green), &mut state, &clock);

    assert_eq!(decision.next_step, NextStep::HumanReview);
    assert!(decision.reason.contains("99"));
    assert!(state.route_history[0].contains("99"));
}

#[test]
fn collection_problems_rescaffold_in_every_phase() {
    let clock = FakeClock::new();

    for phase in [Phase::Red, Phase::Green, Phase::Refactor] {
        for raw in [4, 5] {
            let mut state = fresh_state();
            let decisions = run_codes(phase, &[raw], &mut state, &clock);
            assert_eq!(decisions[0].next_step, NextStep::Rescaffold);
            assert!(decisions[0].retry_allowed);
        }
    }
}
