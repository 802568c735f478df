//!
//! # Assignment Handler Trait
//!
//! This module defines the [`AssignmentHandler`] trait, the capability an assignment's evaluation logic
//! exposes to outcome assembly.
//!
//! The builder never inspects the handler beyond its name: the name is read once, at build time, and
//! stamped onto the produced outcome so the platform can attribute the result to the right lesson
//! assignment. Handlers are expected to return a stable, configured identifier rather than anything
//! derived from runtime type information.

/// A capability trait for the lesson assignment under evaluation.
///
/// Implement this on the type that evaluates a learner's attempt and hand a reference to the outcome
/// builder; the produced outcome reports `name()` as its `assignment_name`.
///
/// # Example
///
/// ```rust
/// use outcomes::traits::assignment::AssignmentHandler;
///
/// struct SqlInjectionChallenge;
///
/// impl AssignmentHandler for SqlInjectionChallenge {
///     fn name(&self) -> &str {
///         "SqlInjectionChallenge"
///     }
/// }
///
/// assert_eq!(SqlInjectionChallenge.name(), "SqlInjectionChallenge");
/// ```
pub trait AssignmentHandler {
    /// Returns the stable identifying name of this assignment.
    fn name(&self) -> &str;
}
