// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run verification state
//!
//! The caller-visible snapshot the workflow engine persists between steps.
//! Field names are part of the checkpoint format: `exit_code`,
//! `exit_code_history`, and `route_history` are read by existing call sites.

use chrono::{DateTime, Utc};
use redgreen_core::{Outcome, Phase, RetryPolicy, RetryState, RouteDecision, RunId};
use serde::{Deserialize, Serialize};

/// Default cap on retained decision records
pub const DEFAULT_HISTORY_CAP: usize = 100;

/// One routed decision, as retained for postmortem debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub outcome: Outcome,
    pub phase: Phase,
    pub decision: RouteDecision,
    pub recorded_at: DateTime<Utc>,
}

/// Verification state for one pipeline run.
///
/// Created once per run, owned by that run's persisted workflow state,
/// and discarded or archived when the run terminates. All mutation goes
/// through the verifier and recorder; nothing here is shared across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyState {
    pub run_id: RunId,
    /// Exit code of the most recent run, if any run happened yet
    pub exit_code: Option<i32>,
    /// Every exit code observed, oldest first
    pub exit_code_history: Vec<i32>,
    /// One formatted "<step>: <reason>" entry per decision, oldest first
    pub route_history: Vec<String>,
    pub retry: RetryState,
    /// Most recent decision records; a ring capped at `history_cap`.
    /// Ceiling enforcement reads the retry counters, never this list, so
    /// the cap cannot affect routing.
    pub history: Vec<RouteRecord>,
    #[serde(default = "default_history_cap")]
    history_cap: usize,
}

fn default_history_cap() -> usize {
    DEFAULT_HISTORY_CAP
}

impl VerifyState {
    /// Create a fresh state for a new pipeline run
    pub fn new(run_id: RunId, policy: RetryPolicy) -> Self {
        Self {
            run_id,
            exit_code: None,
            exit_code_history: Vec::new(),
            route_history: Vec::new(),
            retry: RetryState::new(policy),
            history: Vec::new(),
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }

    /// Override the record cap; clamped to at least 1 so the most recent
    /// decision is always retrievable
    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap.max(1);
        self
    }

    pub fn history_cap(&self) -> usize {
        self.history_cap
    }

    /// The most recent decision record, if any
    pub fn last_record(&self) -> Option<&RouteRecord> {
        self.history.last()
    }

    /// Append a record, evicting the oldest once the cap is reached
    pub(crate) fn push_record(&mut self, record: RouteRecord) {
        while self.history.len() >= self.history_cap.max(1) {
            self.history.remove(0);
        }
        self.history.push(record);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
