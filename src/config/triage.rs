//! Dialogue policy configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::triage::DialoguePolicy;

/// Dialogue policy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TriageConfig {
    /// Count at which the final recommendation is produced
    #[serde(default = "default_question_threshold")]
    pub question_threshold: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Token cap for opening and follow-up turns
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Token cap for the final recommendation and summary advice
    #[serde(default = "default_final_max_output_tokens")]
    pub final_max_output_tokens: u32,

    /// Token cap for the summary report
    #[serde(default = "default_summary_max_output_tokens")]
    pub summary_max_output_tokens: u32,
}

impl TriageConfig {
    /// Builds the domain policy
    pub fn policy(&self) -> DialoguePolicy {
        DialoguePolicy {
            question_threshold: self.question_threshold,
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            final_max_output_tokens: self.final_max_output_tokens,
            summary_max_output_tokens: self.summary_max_output_tokens,
        }
    }

    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_threshold < 2 {
            return Err(ValidationError::InvalidQuestionThreshold);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if self.max_output_tokens == 0 {
            return Err(ValidationError::InvalidTokenCap("max_output_tokens"));
        }
        if self.final_max_output_tokens == 0 {
            return Err(ValidationError::InvalidTokenCap("final_max_output_tokens"));
        }
        if self.summary_max_output_tokens == 0 {
            return Err(ValidationError::InvalidTokenCap("summary_max_output_tokens"));
        }
        Ok(())
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            question_threshold: default_question_threshold(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            final_max_output_tokens: default_final_max_output_tokens(),
            summary_max_output_tokens: default_summary_max_output_tokens(),
        }
    }
}

fn default_question_threshold() -> u32 {
    5
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    150
}

fn default_final_max_output_tokens() -> u32 {
    200
}

fn default_summary_max_output_tokens() -> u32 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_policy() {
        assert_eq!(TriageConfig::default().policy(), DialoguePolicy::default());
    }

    #[test]
    fn test_threshold_below_two_rejected() {
        let config = TriageConfig {
            question_threshold: 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidQuestionThreshold)
        );
    }

    #[test]
    fn test_temperature_range() {
        let config = TriageConfig {
            temperature: 2.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTemperature));
    }

    #[test]
    fn test_zero_token_cap_rejected() {
        let config = TriageConfig {
            summary_max_output_tokens: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTokenCap("summary_max_output_tokens"))
        ));
    }
}
