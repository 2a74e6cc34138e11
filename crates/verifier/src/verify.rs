// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase verifier entry points
//!
//! Thin adapters the workflow engine calls after each test run. Each one
//! drives the same chain: extract the exit code, classify, route, guard,
//! record, persist into the run's state, and hand the final decision back.

use crate::recorder;
use crate::result::TestRunResult;
use crate::state::VerifyState;
use redgreen_core::{route, Clock, Outcome, Phase, RouteDecision};

/// Verify a test run using the phase reported by the runner wrapper.
pub fn verify(
    result: &TestRunResult,
    state: &mut VerifyState,
    clock: &impl Clock,
) -> RouteDecision {
    verify_phase(result.phase, result, state, clock)
}

/// Entry point for the RED workflow node (the node's phase is
/// authoritative over whatever the runner wrapper reported).
pub fn verify_red_phase(
    result: &TestRunResult,
    state: &mut VerifyState,
    clock: &impl Clock,
) -> RouteDecision {
    verify_phase(Phase::Red, result, state, clock)
}

/// Entry point for the GREEN workflow node.
pub fn verify_green_phase(
    result: &TestRunResult,
    state: &mut VerifyState,
    clock: &impl Clock,
) -> RouteDecision {
    verify_phase(Phase::Green, result, state, clock)
}

/// Entry point for the REFACTOR workflow node.
pub fn verify_refactor_phase(
    result: &TestRunResult,
    state: &mut VerifyState,
    clock: &impl Clock,
) -> RouteDecision {
    verify_phase(Phase::Refactor, result, state, clock)
}

fn verify_phase(
    phase: Phase,
    result: &TestRunResult,
    state: &mut VerifyState,
    clock: &impl Clock,
) -> RouteDecision {
    // A result without an exit code counts as a runner crash, never as a
    // pass: the safe direction for adversarial input is human review.
    let raw = result.exit_code.unwrap_or(Outcome::InternalError.code());

    let outcome = Outcome::classify(raw);
    let routed = route(outcome, phase);
    let (decision, retry) = state.retry.guard(phase, routed);
    state.retry = retry;

    recorder::record(outcome, phase, &decision, state, clock);
    state.exit_code = Some(raw);
    state.exit_code_history.push(raw);

    decision
}

#[cfg(test)]
#[path = "verify_tests.rs"]
mod tests;
