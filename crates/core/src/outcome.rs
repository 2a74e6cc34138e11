// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test-runner exit-code classification
//!
//! The test runner is an external process whose sole contract is "produce an
//! integer exit code". Classification is total: every integer maps to an
//! outcome, and anything outside the contract becomes [`Outcome::Unknown`]
//! for downstream fail-safe handling.

use serde::{Deserialize, Serialize};

/// Canonical outcome of a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// All tests passed (exit 0)
    TestsPassed,
    /// Assertions failed; the normal red/green signal (exit 1)
    TestsFailed,
    /// Run was interrupted, e.g. by a signal (exit 2)
    Interrupted,
    /// The runner itself crashed (exit 3)
    InternalError,
    /// Invocation, syntax, or collection error (exit 4)
    UsageError,
    /// Zero tests were discovered (exit 5)
    NoTestsCollected,
    /// Any exit code outside the runner contract
    Unknown(i32),
}

impl Outcome {
    /// Classify a raw exit code. Never fails; out-of-contract codes map to
    /// `Unknown` and are escalated downstream.
    pub fn classify(raw: i32) -> Outcome {
        match raw {
            0 => Outcome::TestsPassed,
            1 => Outcome::TestsFailed,
            2 => Outcome::Interrupted,
            3 => Outcome::InternalError,
            4 => Outcome::UsageError,
            5 => Outcome::NoTestsCollected,
            other => Outcome::Unknown(other),
        }
    }

    /// The canonical exit code for this outcome
    pub fn code(self) -> i32 {
        match self {
            Outcome::TestsPassed => 0,
            Outcome::TestsFailed => 1,
            Outcome::Interrupted => 2,
            Outcome::InternalError => 3,
            Outcome::UsageError => 4,
            Outcome::NoTestsCollected => 5,
            Outcome::Unknown(raw) => raw,
        }
    }

    /// Infrastructure outcomes that are recovered by re-scaffolding
    pub fn is_retryable(self) -> bool {
        matches!(self, Outcome::UsageError | Outcome::NoTestsCollected)
    }

    /// Runtime outcomes that always escalate, never retry
    pub fn is_fatal(self) -> bool {
        matches!(self, Outcome::Interrupted | Outcome::InternalError)
    }

    /// Get the outcome name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::TestsPassed => "tests_passed",
            Outcome::TestsFailed => "tests_failed",
            Outcome::Interrupted => "interrupted",
            Outcome::InternalError => "internal_error",
            Outcome::UsageError => "usage_error",
            Outcome::NoTestsCollected => "no_tests_collected",
            Outcome::Unknown(_) => "unknown",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Unknown(raw) => write!(f, "unknown({raw})"),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
