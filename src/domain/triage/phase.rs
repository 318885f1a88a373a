//! Dialogue phases.
//!
//! A phase is never stored. It is derived from the caller-supplied question
//! counter and the configured question threshold, so it is a pure function
//! of `(question_count, threshold)` and cannot regress while the counter
//! only grows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The phase a triage turn belongs to.
///
/// Phases flow strictly forward:
/// - `Opening` → `FollowUp` → `Final`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// First statement of symptoms. The model asks one clarifying question.
    Opening,

    /// Ongoing questioning with the full history replayed.
    /// The model asks one further question or escalates an emergency.
    FollowUp,

    /// Enough information gathered. The model stops asking and recommends.
    Final,
}

impl Phase {
    /// Classifies a question counter against the threshold.
    ///
    /// `question_count` 0 and 1 are both the opening turn so that zero-based
    /// and one-based callers land on the same prompt. Any counter at or past
    /// `threshold` is final, which takes precedence over the opening rule.
    pub fn classify(question_count: u32, threshold: u32) -> Self {
        if question_count >= threshold {
            Phase::Final
        } else if question_count <= 1 {
            Phase::Opening
        } else {
            Phase::FollowUp
        }
    }

    /// Returns a short label, suitable for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Opening => "opening",
            Phase::FollowUp => "follow_up",
            Phase::Final => "final",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_question_is_opening() {
        assert_eq!(Phase::classify(1, 5), Phase::Opening);
    }

    #[test]
    fn zero_based_first_question_is_opening() {
        assert_eq!(Phase::classify(0, 5), Phase::Opening);
    }

    #[test]
    fn counters_below_threshold_are_follow_up() {
        assert_eq!(Phase::classify(2, 5), Phase::FollowUp);
        assert_eq!(Phase::classify(3, 5), Phase::FollowUp);
        assert_eq!(Phase::classify(4, 5), Phase::FollowUp);
    }

    #[test]
    fn threshold_and_beyond_is_final() {
        assert_eq!(Phase::classify(5, 5), Phase::Final);
        assert_eq!(Phase::classify(6, 5), Phase::Final);
        assert_eq!(Phase::classify(10, 10), Phase::Final);
        assert_eq!(Phase::classify(u32::MAX, 10), Phase::Final);
    }

    #[test]
    fn phase_never_regresses_as_counter_grows() {
        for threshold in 2..=12 {
            let mut previous = Phase::classify(0, threshold);
            for count in 1..=(threshold + 3) {
                let current = Phase::classify(count, threshold);
                assert!(current >= previous, "regressed at {count}/{threshold}");
                previous = current;
            }
        }
    }

    #[test]
    fn phase_serializes_snake_case() {
        let json = serde_json::to_string(&Phase::FollowUp).unwrap();
        assert_eq!(json, "\"follow_up\"");
        assert_eq!(Phase::FollowUp.to_string(), "follow_up");
    }
}
