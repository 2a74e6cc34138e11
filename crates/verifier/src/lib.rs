//! redgreen-verifier: phase verifier adapters over the decision core
//!
//! This crate provides:
//! - The inbound [`TestRunResult`] wrapper produced by the test-runner side
//! - The per-run [`VerifyState`] snapshot the workflow engine persists
//! - The history recorder (append-only decision log plus structured logging)
//! - The per-phase verifier entry points the engine calls after a test run
//! - TOML configuration for the retry ceiling, scope, and history cap
//!
//! The verifier is the only component with access to the mutable pipeline
//! state; the classifier, router, and guard it drives live in
//! `redgreen-core` and stay pure. Single-writer access per run is the
//! caller's responsibility.

pub mod config;
pub mod recorder;
pub mod result;
pub mod state;
pub mod verify;

// Re-exports
pub use config::{parse_verify_config, ConfigError, VerifyConfig};
pub use recorder::record;
pub use result::TestRunResult;
pub use state::{RouteRecord, VerifyState, DEFAULT_HISTORY_CAP};
pub use verify::{verify, verify_green_phase, verify_red_phase, verify_refactor_phase};
