//! # Outcomes Library
//!
//! This crate provides the result-assembly component of a security training platform: the piece every
//! lesson assignment uses to describe what happened when a learner's attempt was evaluated. Evaluation
//! logic configures an [`OutcomeBuilder`] through chained calls and finalizes it into an immutable
//! [`AttemptOutcome`], which the platform's response layer serializes for the learner's browser and
//! resolves against its localized message catalog.
//!
//! ## Key Concepts
//! - **OutcomeBuilder**: The fluent, consume-once builder an assignment configures per evaluation.
//! - **AttemptOutcome**: The immutable record describing the result of one evaluated attempt.
//! - **AssignmentHandler**: The capability trait supplying the outcome's identifying assignment name.
//! - **MessageArg**: The scalar value type for positional feedback/output template arguments.

pub mod error;
pub mod traits;
pub mod types;

pub use error::OutcomeError;
pub use traits::assignment::AssignmentHandler;
pub use types::{AttemptOutcome, MessageArg};

use tracing::{debug, warn};

/// Feedback key applied by the single-argument [`OutcomeBuilder::completed`] shorthand.
pub const LESSON_COMPLETED_KEY: &str = "lesson.completed";
/// Feedback key preset by [`OutcomeBuilder::success`].
pub const ASSIGNMENT_SOLVED_KEY: &str = "assignment.solved";
/// Feedback key preset by [`OutcomeBuilder::failed`], and the build-time default when none was set.
pub const ASSIGNMENT_NOT_SOLVED_KEY: &str = "assignment.not.solved";

/// Fluent builder that accumulates the fields of an [`AttemptOutcome`].
///
/// One builder is created per evaluation and mutated through by-value chained calls.
/// [`build`](OutcomeBuilder::build) consumes it exactly once; reuse after build is unrepresentable.
/// The builder borrows the assignment handler rather than owning it: the handler belongs to the
/// surrounding web layer and only its name is read, at build time.
///
/// # Example
///
/// ```rust
/// use outcomes::{AssignmentHandler, OutcomeBuilder};
///
/// struct ClientSideFilteringLesson;
///
/// impl AssignmentHandler for ClientSideFilteringLesson {
///     fn name(&self) -> &str {
///         "ClientSideFilteringLesson"
///     }
/// }
///
/// let lesson = ClientSideFilteringLesson;
/// let outcome = OutcomeBuilder::success(&lesson)
///     .output("<p>hidden salaries leaked</p>")
///     .build()
///     .unwrap();
///
/// assert!(outcome.completed());
/// assert_eq!(outcome.assignment_name(), "ClientSideFilteringLesson");
/// ```
pub struct OutcomeBuilder<'a> {
    completed: bool,
    feedback_key: Option<String>,
    feedback_args: Option<Vec<MessageArg>>,
    output: Option<String>,
    output_args: Option<Vec<MessageArg>>,
    assignment: Option<&'a dyn AssignmentHandler>,
    attempted: bool,
}

impl<'a> Default for OutcomeBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OutcomeBuilder<'a> {
    /// Create a blank builder: nothing set, `completed` and `attempted` both `false`.
    pub fn new() -> Self {
        Self {
            completed: false,
            feedback_key: None,
            feedback_args: None,
            output: None,
            output_args: None,
            assignment: None,
            attempted: false,
        }
    }

    /// Pre-configured builder for a solved assignment.
    ///
    /// Sets `completed = true`, marks the attempt as made, and selects the
    /// [`ASSIGNMENT_SOLVED_KEY`] feedback message. Any of these can still be
    /// overridden with further chained calls before [`build`](OutcomeBuilder::build).
    pub fn success(assignment: &'a dyn AssignmentHandler) -> Self {
        Self::new()
            .completed(true)
            .attempted()
            .feedback(ASSIGNMENT_SOLVED_KEY)
            .assignment(assignment)
    }

    /// Pre-configured builder for a failed attempt.
    ///
    /// Sets `completed = false`, marks the attempt as made, and selects the
    /// [`ASSIGNMENT_NOT_SOLVED_KEY`] feedback message. Any of these can still be
    /// overridden with further chained calls before [`build`](OutcomeBuilder::build).
    pub fn failed(assignment: &'a dyn AssignmentHandler) -> Self {
        Self::new()
            .completed(false)
            .attempted()
            .feedback(ASSIGNMENT_NOT_SOLVED_KEY)
            .assignment(assignment)
    }

    /// Pre-configured builder for a purely informational message.
    ///
    /// The outcome does not count as an attempt: `completed` and `attempted` stay `false`, and no
    /// feedback key is selected, so the build-time default applies unless one is chained on.
    pub fn information_message(assignment: &'a dyn AssignmentHandler) -> Self {
        Self::new().assignment(assignment)
    }

    /// Set whether the assignment was completed.
    ///
    /// This shorthand also resets the feedback key to [`LESSON_COMPLETED_KEY`], discarding any
    /// previously chosen key. Use [`completed_with_feedback`](OutcomeBuilder::completed_with_feedback)
    /// to set both fields explicitly.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self.feedback_key = Some(LESSON_COMPLETED_KEY.to_string());
        self
    }

    /// Set whether the assignment was completed, together with an explicit feedback key.
    pub fn completed_with_feedback(
        mut self,
        completed: bool,
        feedback_key: impl Into<String>,
    ) -> Self {
        self.completed = completed;
        self.feedback_key = Some(feedback_key.into());
        self
    }

    /// Set the feedback key alone, leaving `completed` untouched.
    pub fn feedback(mut self, feedback_key: impl Into<String>) -> Self {
        self.feedback_key = Some(feedback_key.into());
        self
    }

    /// Replace the positional argument list for the feedback template.
    pub fn feedback_args(mut self, args: impl IntoIterator<Item = MessageArg>) -> Self {
        self.feedback_args = Some(args.into_iter().collect());
        self
    }

    /// Set the raw output surfaced to the learner.
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Replace the positional argument list for the output template.
    pub fn output_args(mut self, args: impl IntoIterator<Item = MessageArg>) -> Self {
        self.output_args = Some(args.into_iter().collect());
        self
    }

    /// Mark that the learner made a genuine attempt. Idempotent.
    pub fn attempted(mut self) -> Self {
        self.attempted = true;
        self
    }

    /// Attach the assignment handler whose name identifies the produced outcome.
    pub fn assignment(mut self, assignment: &'a dyn AssignmentHandler) -> Self {
        self.assignment = Some(assignment);
        self
    }

    /// Consume the builder and materialize the immutable [`AttemptOutcome`].
    ///
    /// The assignment name is read from the attached handler, and a feedback key that was never set
    /// falls back to [`ASSIGNMENT_NOT_SOLVED_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::MissingAssignment`] if no assignment handler was attached. That is a
    /// programming error in the calling lesson, not a runtime condition: it is reported immediately
    /// and never retried.
    pub fn build(self) -> Result<AttemptOutcome, OutcomeError> {
        let assignment = match self.assignment {
            Some(assignment) => assignment,
            None => {
                warn!("Outcome built without an assignment handler attached");
                return Err(OutcomeError::MissingAssignment);
            }
        };

        let assignment_name = assignment.name().to_string();
        let feedback_key = self
            .feedback_key
            .unwrap_or_else(|| ASSIGNMENT_NOT_SOLVED_KEY.to_string());

        debug!(
            "Assembled outcome for assignment '{}' (completed: {}, attempted: {})",
            assignment_name, self.completed, self.attempted
        );

        Ok(AttemptOutcome::new(
            self.completed,
            feedback_key,
            self.feedback_args,
            self.output,
            self.output_args,
            assignment_name,
            self.attempted,
        ))
    }
}
