//! Outcome Error Types
//!
//! This module defines the [`OutcomeError`] enum, the single error kind the outcome builder can produce.
//! Assembling an outcome is a constant-time, in-memory operation, so the only way it can fail is builder
//! misuse: finalizing before an assignment handler was attached, leaving the outcome with no name to report.
//!
//! # Usage
//!
//! [`OutcomeError`] is the error type of [`OutcomeBuilder::build`](crate::OutcomeBuilder::build). It is a
//! caller programming error, surfaced immediately and never retried or recovered internally.

/// Represents all error types that can occur while assembling an attempt outcome.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// `build()` was called on a builder with no assignment handler attached.
    #[error("No assignment attached; the outcome's assignment name cannot be resolved")]
    MissingAssignment,
}
