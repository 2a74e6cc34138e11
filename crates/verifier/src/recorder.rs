// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! History recorder
//!
//! Appends every decision to the run's append-only history and emits one
//! structured log event per call. Log emission is a best-effort side
//! channel: `tracing` macros cannot fail, so a missing or broken
//! subscriber never aborts the routing decision.

use crate::state::{RouteRecord, VerifyState};
use redgreen_core::{Clock, Outcome, Phase, RouteDecision};

/// Record a routed decision against the run's state.
///
/// Called on every verification, including decisions the retry guard
/// overrode. Escalations log at `warn`, everything else at `info`.
pub fn record(
    outcome: Outcome,
    phase: Phase,
    decision: &RouteDecision,
    state: &mut VerifyState,
    clock: &impl Clock,
) {
    let recorded_at = clock.now();

    state
        .route_history
        .push(format!("{}: {}", decision.next_step, decision.reason));
    state.push_record(RouteRecord {
        outcome,
        phase,
        decision: decision.clone(),
        recorded_at,
    });

    if decision.requires_human {
        tracing::warn!(
            run_id = %state.run_id,
            phase = %phase,
            outcome = %outcome,
            step = %decision.next_step,
            reason = %decision.reason,
            recorded_at = %recorded_at,
            "verification escalated to human review"
        );
    } else {
        tracing::info!(
            run_id = %state.run_id,
            phase = %phase,
            outcome = %outcome,
            step = %decision.next_step,
            reason = %decision.reason,
            recorded_at = %recorded_at,
            "verification routed"
        );
    }
}

#[cfg(test)]
#[path = "recorder_tests.rs"]
mod tests;
