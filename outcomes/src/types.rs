//! # Types Module
//!
//! This module defines the core data structures of outcome assembly: the immutable [`AttemptOutcome`]
//! record produced for every evaluated attempt, and the [`MessageArg`] scalar used for positional
//! substitution argument lists.
//!
//! Both types are serializable for the platform's response layer, which renders an outcome to the
//! learner's browser as JSON and resolves `feedback_key`/`output` against its message catalog.

use serde::Serialize;
use std::fmt;

/// A single positional substitution value for a feedback or output template.
///
/// Argument lists are ordered sequences of these scalars. The enum serializes untagged, so a list
/// renders as a plain JSON array (e.g. `["alice", 2, true]`) that the message catalog layer can
/// substitute positionally. `Display` renders the bare scalar for the same purpose outside JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageArg {
    /// A textual argument.
    Text(String),
    /// An integral numeric argument.
    Int(i64),
    /// A floating-point numeric argument.
    Float(f64),
    /// A boolean argument.
    Bool(bool),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Text(value) => write!(f, "{value}"),
            MessageArg::Int(value) => write!(f, "{value}"),
            MessageArg::Float(value) => write!(f, "{value}"),
            MessageArg::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for MessageArg {
    fn from(value: &str) -> Self {
        MessageArg::Text(value.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(value: String) -> Self {
        MessageArg::Text(value)
    }
}

impl From<i32> for MessageArg {
    fn from(value: i32) -> Self {
        MessageArg::Int(i64::from(value))
    }
}

impl From<i64> for MessageArg {
    fn from(value: i64) -> Self {
        MessageArg::Int(value)
    }
}

impl From<f64> for MessageArg {
    fn from(value: f64) -> Self {
        MessageArg::Float(value)
    }
}

impl From<bool> for MessageArg {
    fn from(value: bool) -> Self {
        MessageArg::Bool(value)
    }
}

/// The immutable record describing the result of evaluating one attempt at an assignment.
///
/// Produced exactly once per builder by [`OutcomeBuilder::build`](crate::OutcomeBuilder::build);
/// fields are private with borrow accessors, so the record cannot be mutated after it is built.
///
/// ## JSON Output Example
///
/// When serialized for the response layer, an outcome looks like:
///
/// ```json
/// {
///   "completed": true,
///   "feedback_key": "assignment.solved",
///   "feedback_args": ["alice", 2],
///   "output": "<p>query returned 2 rows</p>",
///   "assignment_name": "SqlInjectionLesson5a",
///   "attempted": true
/// }
/// ```
///
/// Optional fields that were never set are omitted entirely; an argument list that was set to an
/// empty sequence serializes as `[]`. The distinction is deliberate and preserved on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttemptOutcome {
    /// Whether the learner satisfied the assignment's success condition.
    completed: bool,
    /// Catalog key selecting the localized feedback template.
    feedback_key: String,
    /// Positional substitution values for the feedback template.
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback_args: Option<Vec<MessageArg>>,
    /// Raw textual/HTML output surfaced to the learner.
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    /// Positional substitution values for the output template.
    #[serde(skip_serializing_if = "Option::is_none")]
    output_args: Option<Vec<MessageArg>>,
    /// Identifying name of the assignment that produced this outcome.
    assignment_name: String,
    /// Whether the learner made a genuine attempt, as opposed to merely loading the lesson.
    attempted: bool,
}

impl AttemptOutcome {
    pub(crate) fn new(
        completed: bool,
        feedback_key: String,
        feedback_args: Option<Vec<MessageArg>>,
        output: Option<String>,
        output_args: Option<Vec<MessageArg>>,
        assignment_name: String,
        attempted: bool,
    ) -> Self {
        Self {
            completed,
            feedback_key,
            feedback_args,
            output,
            output_args,
            assignment_name,
            attempted,
        }
    }

    /// Whether the assignment's success condition was satisfied.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// The catalog key selecting the localized feedback template.
    pub fn feedback_key(&self) -> &str {
        &self.feedback_key
    }

    /// Positional substitution values for the feedback template, if any were set.
    pub fn feedback_args(&self) -> Option<&[MessageArg]> {
        self.feedback_args.as_deref()
    }

    /// Raw output surfaced to the learner, if any was set.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Positional substitution values for the output template, if any were set.
    pub fn output_args(&self) -> Option<&[MessageArg]> {
        self.output_args.as_deref()
    }

    /// The identifying name of the assignment that produced this outcome.
    pub fn assignment_name(&self) -> &str {
        &self.assignment_name
    }

    /// Whether the learner made a genuine attempt.
    pub fn attempted(&self) -> bool {
        self.attempted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn solved_outcome() -> AttemptOutcome {
        AttemptOutcome::new(
            true,
            "assignment.solved".to_string(),
            Some(vec![MessageArg::from("alice"), MessageArg::from(2)]),
            Some("<p>query returned 2 rows</p>".to_string()),
            None,
            "SqlInjectionLesson5a".to_string(),
            true,
        )
    }

    #[test]
    fn test_outcome_serializes_all_set_fields() {
        let value: Value = serde_json::to_value(solved_outcome()).unwrap();
        assert_eq!(value["completed"], true);
        assert_eq!(value["feedback_key"], "assignment.solved");
        assert_eq!(value["feedback_args"], json!(["alice", 2]));
        assert_eq!(value["output"], "<p>query returned 2 rows</p>");
        assert_eq!(value["assignment_name"], "SqlInjectionLesson5a");
        assert_eq!(value["attempted"], true);
    }

    #[test]
    fn test_unset_optional_fields_are_omitted() {
        let outcome = AttemptOutcome::new(
            false,
            "assignment.not.solved".to_string(),
            None,
            None,
            None,
            "HttpBasicsQuiz".to_string(),
            false,
        );
        let value: Value = serde_json::to_value(outcome).unwrap();
        assert!(value.get("feedback_args").is_none());
        assert!(value.get("output").is_none());
        assert!(value.get("output_args").is_none());
        assert_eq!(value["completed"], false);
        assert_eq!(value["attempted"], false);
    }

    #[test]
    fn test_empty_args_stay_distinct_from_unset() {
        let outcome = AttemptOutcome::new(
            false,
            "assignment.not.solved".to_string(),
            None,
            None,
            Some(Vec::new()),
            "XssReflectedLesson".to_string(),
            true,
        );
        let value: Value = serde_json::to_value(outcome).unwrap();
        assert!(value.get("feedback_args").is_none());
        assert_eq!(value["output_args"], json!([]));
    }

    #[test]
    fn test_message_arg_serializes_untagged() {
        let args = vec![
            MessageArg::from("alice"),
            MessageArg::from(2),
            MessageArg::from(true),
            MessageArg::from(1.5),
        ];
        let value: Value = serde_json::to_value(args).unwrap();
        assert_eq!(value, json!(["alice", 2, true, 1.5]));
    }

    #[test]
    fn test_message_arg_from_conversions() {
        assert_eq!(MessageArg::from("x"), MessageArg::Text("x".to_string()));
        assert_eq!(
            MessageArg::from(String::from("y")),
            MessageArg::Text("y".to_string())
        );
        assert_eq!(MessageArg::from(7), MessageArg::Int(7));
        assert_eq!(MessageArg::from(7i64), MessageArg::Int(7));
        assert_eq!(MessageArg::from(0.5), MessageArg::Float(0.5));
        assert_eq!(MessageArg::from(false), MessageArg::Bool(false));
    }

    #[test]
    fn test_message_arg_display() {
        assert_eq!(MessageArg::from("alice").to_string(), "alice");
        assert_eq!(MessageArg::from(2).to_string(), "2");
        assert_eq!(MessageArg::from(true).to_string(), "true");
        assert_eq!(MessageArg::from(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_round_trip_json() {
        let json = serde_json::to_string(&solved_outcome()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["assignment_name"], "SqlInjectionLesson5a");
        assert_eq!(value["feedback_args"][1], 2);
        assert!(value.get("output_args").is_none());
    }
}
