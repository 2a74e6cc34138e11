//! redgreen-core: decision core for the exit-code-driven TDD phase router
//!
//! This crate provides:
//! - Classification of test-runner exit codes into canonical outcomes
//! - The pure phase router (outcome x phase -> routing decision)
//! - The retry guard that bounds consecutive re-scaffold attempts
//! - Clock and run-id abstractions shared with the verifier layer
//!
//! Everything here is synchronous, performs no I/O, and never panics in
//! library code. The classifier and router are total functions: adversarial
//! input maps to a decision, not an error.

pub mod clock;
pub mod run;

// Decision core (order matters for dependencies)
pub mod outcome;
pub mod phase;
pub mod route;
pub mod retry;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use outcome::Outcome;
pub use phase::Phase;
pub use retry::{PolicyError, RetryPolicy, RetryScope, RetryState, DEFAULT_RETRY_CEILING};
pub use route::{route, NextStep, RouteDecision};
pub use run::RunId;
