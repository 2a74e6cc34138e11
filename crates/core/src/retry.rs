// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Retry guard for re-scaffold loops
//!
//! The router alone cannot prevent infinite re-scaffold loops because it is
//! stateless. The guard tracks consecutive retryable decisions per run and
//! overrides the router once a configurable ceiling is exceeded, forcing
//! escalation regardless of the raw outcome.

use crate::phase::Phase;
use crate::route::RouteDecision;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Default number of consecutive re-scaffold attempts before escalation
pub const DEFAULT_RETRY_CEILING: u32 = 3;

/// Errors that can occur when building a retry policy
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("retry ceiling must be at least 1")]
    ZeroCeiling,
}

/// Scope of the consecutive-retry ceiling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetryScope {
    /// Each phase spends its own budget; re-scaffolding during RED does
    /// not exhaust GREEN's
    #[default]
    PerPhase,
    /// All phases share a single consecutive counter
    PerRun,
}

/// Ceiling and scope for the retry guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    ceiling: u32,
    scope: RetryScope,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            ceiling: DEFAULT_RETRY_CEILING,
            scope: RetryScope::PerPhase,
        }
    }
}

impl RetryPolicy {
    /// Create a policy. The ceiling must be at least 1; a ceiling of 0
    /// would escalate on the first retryable outcome and make the
    /// re-scaffold path unreachable.
    pub fn new(ceiling: u32, scope: RetryScope) -> Result<Self, PolicyError> {
        if ceiling == 0 {
            return Err(PolicyError::ZeroCeiling);
        }
        Ok(Self { ceiling, scope })
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    pub fn scope(&self) -> RetryScope {
        self.scope
    }
}

/// Consecutive-retryable counters for one pipeline run.
///
/// Owned by that run's persisted workflow state; one instance per run,
/// mutated only through [`RetryState::guard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryState {
    policy: RetryPolicy,
    per_phase: BTreeMap<Phase, u32>,
    per_run: u32,
}

impl Default for RetryState {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl RetryState {
    /// Create a fresh state with zeroed counters
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            per_phase: BTreeMap::new(),
            per_run: 0,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The consecutive retryable count currently in scope for this phase
    pub fn consecutive(&self, phase: Phase) -> u32 {
        match self.policy.scope {
            RetryScope::PerPhase => self.per_phase.get(&phase).copied().unwrap_or(0),
            RetryScope::PerRun => self.per_run,
        }
    }

    /// Apply the ceiling to a routed decision, returning the (possibly
    /// overridden) decision and the updated state.
    ///
    /// A non-retryable decision resets the counter in scope and passes
    /// through unchanged. A retryable decision increments it; once the new
    /// count exceeds the ceiling, the decision is overridden to escalation.
    pub fn guard(&self, phase: Phase, decision: RouteDecision) -> (RouteDecision, RetryState) {
        let mut next = self.clone();

        if !decision.retry_allowed {
            match next.policy.scope {
                RetryScope::PerPhase => {
                    next.per_phase.remove(&phase);
                }
                RetryScope::PerRun => next.per_run = 0,
            }
            return (decision, next);
        }

        let count = next.consecutive(phase) + 1;
        match next.policy.scope {
            RetryScope::PerPhase => {
                next.per_phase.insert(phase, count);
            }
            RetryScope::PerRun => next.per_run = count,
        }

        if count > next.policy.ceiling {
            let overridden = RouteDecision::escalate(format!(
                "retry ceiling exceeded ({count} consecutive re-scaffold attempts)"
            ));
            return (overridden, next);
        }

        (decision, next)
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
