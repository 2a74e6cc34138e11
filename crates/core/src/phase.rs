// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TDD phase definitions

use serde::{Deserialize, Serialize};

/// A phase of the TDD cycle
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Phase {
    /// Write a failing test
    Red,
    /// Make the test pass
    Green,
    /// Improve the code without changing behavior
    Refactor,
}

impl Phase {
    /// The phase that follows this one, or `None` after Refactor
    /// (completion is handed back to the workflow engine)
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Red => Some(Phase::Green),
            Phase::Green => Some(Phase::Refactor),
            Phase::Refactor => None,
        }
    }

    /// Get the phase name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Red => "red",
            Phase::Green => "green",
            Phase::Refactor => "refactor",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
