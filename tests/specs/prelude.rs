//! Shared helpers for the behavioral specs.

use redgreen_core::{FakeClock, Phase, RetryPolicy, RouteDecision, RunId};
use redgreen_verifier::{verify, TestRunResult, VerifyState};

pub fn fresh_state() -> VerifyState {
    VerifyState::new(RunId::from("spec-run"), RetryPolicy::default())
}

/// Run a sequence of raw exit codes through the verifier in one phase,
/// returning every decision in order.
pub fn run_codes(
    phase: Phase,
    codes: &[i32],
    state: &mut VerifyState,
    clock: &FakeClock,
) -> Vec<RouteDecision> {
    codes
        .iter()
        .map(|&raw| verify(&TestRunResult::new(raw, phase), state, clock))
        .collect()
}
