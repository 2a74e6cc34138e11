// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound test-run result

use redgreen_core::Phase;
use serde::{Deserialize, Serialize};

/// Result of one external test-runner invocation, as wrapped by the
/// runner side of the workflow engine.
///
/// `exit_code` is `None` when the wrapper could not observe a code at all
/// (runner never started, wrapper crashed mid-read). The verifier treats
/// that as an internal error, never as success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRunResult {
    pub exit_code: Option<i32>,
    /// Phase the runner wrapper believes it ran in
    pub phase: Phase,
    /// Captured runner output; opaque to the router, kept for humans
    #[serde(default)]
    pub raw_output: String,
}

impl TestRunResult {
    /// Create a result with an observed exit code
    pub fn new(exit_code: i32, phase: Phase) -> Self {
        Self {
            exit_code: Some(exit_code),
            phase,
            raw_output: String::new(),
        }
    }

    /// Create a result for a run whose exit code was lost
    pub fn without_exit_code(phase: Phase) -> Self {
        Self {
            exit_code: None,
            phase,
            raw_output: String::new(),
        }
    }

    /// Attach captured runner output
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.raw_output = output.into();
        self
    }
}
