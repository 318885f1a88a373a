//! Dialogue pacing and generation parameters.

use super::phase::Phase;

/// Tunables the dialogue handlers apply to every session.
///
/// Built once from configuration at startup and handed to the handlers;
/// nothing here is read from the environment at call time.
#[derive(Debug, Clone, PartialEq)]
pub struct DialoguePolicy {
    /// Question counter at which the dialogue switches to final advice.
    pub question_threshold: u32,
    /// Sampling temperature for every generation call.
    pub temperature: f32,
    /// Output cap for opening and follow-up questions.
    pub max_output_tokens: u32,
    /// Output cap for final advice.
    pub final_max_output_tokens: u32,
    /// Output cap for the session summary report.
    pub summary_max_output_tokens: u32,
}

impl DialoguePolicy {
    /// Classifies a counter under this policy's threshold.
    pub fn phase_for(&self, question_count: u32) -> Phase {
        Phase::classify(question_count, self.question_threshold)
    }

    /// Output cap for a turn in the given phase.
    pub fn max_tokens_for(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Opening | Phase::FollowUp => self.max_output_tokens,
            Phase::Final => self.final_max_output_tokens,
        }
    }
}

impl Default for DialoguePolicy {
    fn default() -> Self {
        Self {
            question_threshold: 5,
            temperature: 0.7,
            max_output_tokens: 150,
            final_max_output_tokens: 200,
            summary_max_output_tokens: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_uses_five_questions() {
        let policy = DialoguePolicy::default();
        assert_eq!(policy.question_threshold, 5);
        assert_eq!(policy.phase_for(5), Phase::Final);
        assert_eq!(policy.phase_for(3), Phase::FollowUp);
    }

    #[test]
    fn final_phase_gets_larger_output_cap() {
        let policy = DialoguePolicy::default();
        assert_eq!(policy.max_tokens_for(Phase::Opening), 150);
        assert_eq!(policy.max_tokens_for(Phase::FollowUp), 150);
        assert_eq!(policy.max_tokens_for(Phase::Final), 200);
    }
}
