// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pure phase router
//!
//! Maps (outcome, phase) to a routing decision. The router is stateless and
//! has no access to retry history; bounding consecutive retries is the
//! guard's job in [`crate::retry`]. Keeping the two apart means the decision
//! table stays a total function that can be tested exhaustively.

use crate::outcome::Outcome;
use crate::phase::Phase;
use serde::{Deserialize, Serialize};

/// The workflow node to execute next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NextStep {
    /// Re-run test scaffolding
    Rescaffold,
    /// Draft or revise the implementation
    Implement,
    /// Current phase is satisfied; advance
    NextPhase,
    /// Terminal for this run: pause for human intervention
    HumanReview,
}

impl NextStep {
    /// Get the step name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            NextStep::Rescaffold => "rescaffold",
            NextStep::Implement => "implement",
            NextStep::NextPhase => "next_phase",
            NextStep::HumanReview => "human_review",
        }
    }
}

impl std::fmt::Display for NextStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An immutable routing decision.
///
/// Invariant: `requires_human` implies `next_step == NextStep::HumanReview`.
/// The constructors below are the only way decisions are built, so the
/// invariant holds everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDecision {
    pub next_step: NextStep,
    /// Why this decision was made; never empty
    pub reason: String,
    pub requires_human: bool,
    pub retry_allowed: bool,
}

impl RouteDecision {
    /// The current phase is satisfied; hand off to the next one
    pub fn advance(reason: impl Into<String>) -> Self {
        Self {
            next_step: NextStep::NextPhase,
            reason: reason.into(),
            requires_human: false,
            retry_allowed: false,
        }
    }

    /// Route back to the implementation step
    pub fn implement(reason: impl Into<String>) -> Self {
        Self {
            next_step: NextStep::Implement,
            reason: reason.into(),
            requires_human: false,
            retry_allowed: false,
        }
    }

    /// Route back to scaffolding; counts against the retry ceiling
    pub fn rescaffold(reason: impl Into<String>) -> Self {
        Self {
            next_step: NextStep::Rescaffold,
            reason: reason.into(),
            requires_human: false,
            retry_allowed: true,
        }
    }

    /// Pause the run for human intervention
    pub fn escalate(reason: impl Into<String>) -> Self {
        Self {
            next_step: NextStep::HumanReview,
            reason: reason.into(),
            requires_human: true,
            retry_allowed: false,
        }
    }

    /// Check if this decision pauses the run for a human
    pub fn is_escalation(&self) -> bool {
        self.requires_human
    }
}

/// Route a classified outcome observed in the given phase.
///
/// Expected-failure outcomes are routed normally, retryable infrastructure
/// outcomes go back to scaffolding, fatal and out-of-contract outcomes
/// escalate immediately. A passing suite during RED is a contract violation:
/// the new test exercised nothing, and a human has to look at it.
pub fn route(outcome: Outcome, phase: Phase) -> RouteDecision {
    match (outcome, phase) {
        (Outcome::TestsPassed, Phase::Red) => {
            RouteDecision::escalate("tests must fail in RED; a passing suite means the new test exercises nothing")
        }
        (Outcome::TestsPassed, _) => {
            RouteDecision::advance("all tests passed; advancing to the next phase")
        }

        (Outcome::TestsFailed, Phase::Red) => {
            RouteDecision::advance("failing test confirmed; RED is satisfied")
        }
        (Outcome::TestsFailed, Phase::Green) => {
            RouteDecision::implement("assertions still failing; implementation needs another pass")
        }
        (Outcome::TestsFailed, Phase::Refactor) => {
            RouteDecision::implement("tests regressed during REFACTOR; routing back to implementation")
        }

        (Outcome::Interrupted, _) => {
            RouteDecision::escalate("test run was interrupted before completion")
        }
        (Outcome::InternalError, _) => {
            RouteDecision::escalate("test runner crashed internally")
        }

        (Outcome::UsageError, _) => {
            RouteDecision::rescaffold("test invocation failed before any test ran; re-scaffolding the harness")
        }
        (Outcome::NoTestsCollected, _) => {
            RouteDecision::rescaffold("runner collected zero tests; re-scaffolding the test suite")
        }

        (Outcome::Unknown(raw), _) => RouteDecision::escalate(format!(
            "exit code {raw} is outside the runner contract; refusing to guess"
        )),
    }
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
