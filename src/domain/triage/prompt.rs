//! Prompt construction for each dialogue phase.
//!
//! Prompts are plain text. History is replayed as alternating
//! `Patient:` / `AI:` lines in insertion order, so the model backend can
//! stay stateless between calls. Construction is deterministic: the same
//! `(phase, history, input)` always yields byte-identical output.

use super::phase::Phase;
use super::turn::Turn;

/// Fixed escalation text the model is told to emit for emergency symptoms.
///
/// Detection is delegated to the model through the follow-up instruction.
/// Nothing in the engine checks the input for emergency language, so this
/// is a best-effort safety net and not a guarantee.
pub const EMERGENCY_MESSAGE: &str =
    "This may be an emergency. Please call emergency services (911) or go to the nearest hospital immediately.";

const OPENING_INSTRUCTION: &str = "Ask only one relevant follow-up question in a friendly and professional tone to better understand their condition. \
Keep the conversation natural, as if a doctor is speaking to the patient.";

const FOLLOW_UP_INSTRUCTION: &str = "Based on the symptoms so far, ask the next relevant follow-up question in a conversational tone. \
Do not say 'Here is my next follow-up question', just ask naturally as a doctor would. \
If symptoms indicate a medical emergency (such as severe chest pain, difficulty breathing, stroke symptoms), \
IMMEDIATELY stop asking questions and tell the patient:";

const FINAL_INSTRUCTION: &str = "You have now gathered enough information. Based on all the patient's responses, provide a clear final medical recommendation. \
Do not ask any further questions. Be direct and professional. \
Advise whether they should rest, visit urgent care, or consult a specialist. \
If symptoms are life-threatening, remind them to seek emergency care immediately.";

const ADVICE_INSTRUCTION: &str = "Based on the conversation so far, provide a summary and give advice to the patient. \
Make sure the advice is based on the symptoms provided and any relevant medical conditions. \
If the symptoms suggest a serious condition, recommend setting up an appointment with a doctor.";

const REPORT_INSTRUCTION: &str =
    "Create a detailed summary of the patient's responses and symptoms from the following conversation.";

/// Builds the instruction text sent to the generation backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Builds the prompt for a dialogue turn.
    pub fn build(phase: Phase, history: &[Turn], user_input: &str) -> String {
        match phase {
            Phase::Opening => Self::opening(user_input),
            Phase::FollowUp => format!(
                "{}\n{} '{}'",
                transcript(history, Some(user_input)),
                FOLLOW_UP_INSTRUCTION,
                EMERGENCY_MESSAGE
            ),
            Phase::Final => format!(
                "{}\n{}",
                transcript(history, Some(user_input)),
                FINAL_INSTRUCTION
            ),
        }
    }

    /// Builds the advice prompt for a finished session.
    pub fn advice(history: &[Turn]) -> String {
        format!("{}\n{}", transcript(history, None), ADVICE_INSTRUCTION)
    }

    /// Builds the summary report prompt for a finished session.
    pub fn report(history: &[Turn]) -> String {
        format!("{}\n{}", REPORT_INSTRUCTION, transcript(history, None))
    }

    fn opening(user_input: &str) -> String {
        format!(
            "You are an AI assistant conducting a triage assessment for a patient. The patient said: '{}'. {}",
            user_input, OPENING_INSTRUCTION
        )
    }
}

/// Renders stored turns, optionally followed by the pending patient input.
fn transcript(history: &[Turn], pending: Option<&str>) -> String {
    let mut lines: Vec<String> = history
        .iter()
        .map(|turn| format!("Patient: {}\nAI: {}", turn.user_input, turn.ai_response))
        .collect();
    if let Some(input) = pending {
        lines.push(format!("Patient: {}", input));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<Turn> {
        vec![
            Turn::new(1, "I have a headache", "Do you also have nausea?"),
            Turn::new(2, "Yes, a little", "How long has the headache lasted?"),
        ]
    }

    #[test]
    fn opening_prompt_contains_literal_input() {
        let prompt = PromptBuilder::build(Phase::Opening, &[], "I have a headache");
        assert!(prompt.contains("The patient said: 'I have a headache'."));
        assert!(prompt.contains("Ask only one relevant follow-up question"));
        assert!(!prompt.contains("Patient:"));
    }

    #[test]
    fn opening_prompt_ignores_history() {
        let with = PromptBuilder::build(Phase::Opening, &history(), "hello");
        let without = PromptBuilder::build(Phase::Opening, &[], "hello");
        assert_eq!(with, without);
    }

    #[test]
    fn follow_up_prompt_replays_history_in_order() {
        let prompt = PromptBuilder::build(Phase::FollowUp, &history(), "Since yesterday");

        let expected_prefix = "Patient: I have a headache\nAI: Do you also have nausea?\n\
Patient: Yes, a little\nAI: How long has the headache lasted?\n\
Patient: Since yesterday\n";
        assert!(prompt.starts_with(expected_prefix), "got: {prompt}");
    }

    #[test]
    fn follow_up_prompt_carries_emergency_instruction() {
        let prompt = PromptBuilder::build(Phase::FollowUp, &history(), "Since yesterday");
        assert!(prompt.contains("next relevant follow-up question"));
        assert!(prompt.contains("severe chest pain, difficulty breathing, stroke symptoms"));
        assert!(prompt.ends_with(&format!("'{}'", EMERGENCY_MESSAGE)));
    }

    #[test]
    fn final_prompt_asks_for_recommendation_not_question() {
        let prompt = PromptBuilder::build(Phase::Final, &history(), "It is getting worse");
        assert!(prompt.contains("Patient: It is getting worse\n"));
        assert!(prompt.contains("provide a clear final medical recommendation"));
        assert!(prompt.contains("Do not ask any further questions"));
        assert!(prompt.contains("rest, visit urgent care, or consult a specialist"));
        assert!(!prompt.contains("next relevant follow-up question"));
    }

    #[test]
    fn follow_up_with_empty_history_starts_with_pending_input() {
        let prompt = PromptBuilder::build(Phase::FollowUp, &[], "Still dizzy");
        assert!(prompt.starts_with("Patient: Still dizzy\n"));
    }

    #[test]
    fn build_is_deterministic() {
        let h = history();
        for phase in [Phase::Opening, Phase::FollowUp, Phase::Final] {
            let a = PromptBuilder::build(phase, &h, "same input");
            let b = PromptBuilder::build(phase, &h, "same input");
            assert_eq!(a.as_bytes(), b.as_bytes());
        }
    }

    #[test]
    fn advice_prompt_follows_transcript() {
        let prompt = PromptBuilder::advice(&history());
        assert!(prompt.starts_with("Patient: I have a headache\n"));
        assert!(prompt.ends_with(ADVICE_INSTRUCTION));
        assert!(prompt.contains("appointment with a doctor"));
    }

    #[test]
    fn report_prompt_precedes_transcript() {
        let prompt = PromptBuilder::report(&history());
        assert!(prompt.starts_with(REPORT_INSTRUCTION));
        assert!(prompt.ends_with("AI: How long has the headache lasted?"));
    }
}
