// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Verifier TOML configuration
//!
//! The engine hands the verifier its slice of the project configuration as
//! a TOML string; only the `[verify]` table is read here and every field
//! has a default, so an absent table means default behavior.

use crate::state::{VerifyState, DEFAULT_HISTORY_CAP};
use redgreen_core::{PolicyError, RetryPolicy, RetryScope, RunId, DEFAULT_RETRY_CEILING};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading verifier configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid retry policy: {0}")]
    Policy(#[from] PolicyError),
}

/// The `[verify]` table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    /// Consecutive re-scaffold attempts permitted before escalation
    pub retry_ceiling: u32,
    /// Whether each phase spends its own retry budget or the run shares one
    pub retry_scope: RetryScope,
    /// Decision records retained per run
    pub history_cap: usize,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            retry_ceiling: DEFAULT_RETRY_CEILING,
            retry_scope: RetryScope::PerPhase,
            history_cap: DEFAULT_HISTORY_CAP,
        }
    }
}

impl VerifyConfig {
    /// Validate into a retry policy
    pub fn retry_policy(&self) -> Result<RetryPolicy, ConfigError> {
        Ok(RetryPolicy::new(self.retry_ceiling, self.retry_scope)?)
    }

    /// Build a fresh verification state for a new run
    pub fn new_state(&self, run_id: RunId) -> Result<VerifyState, ConfigError> {
        Ok(VerifyState::new(run_id, self.retry_policy()?).with_history_cap(self.history_cap))
    }
}

/// Parse the `[verify]` table from TOML content.
///
/// Other top-level tables are ignored (they belong to other subsystems);
/// unknown keys inside `[verify]` are rejected so typos do not silently
/// fall back to defaults.
pub fn parse_verify_config(content: &str) -> Result<VerifyConfig, ConfigError> {
    #[derive(Deserialize)]
    struct Root {
        #[serde(default)]
        verify: VerifyConfig,
    }

    let root: Root = toml::from_str(content)?;
    Ok(root.verify)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
