//! Identifiers for patients and triage sessions.
//!
//! Both identifiers are opaque strings supplied by the caller (an API
//! client, a chat bot's chat id, ...). Uniqueness across front-ends is the
//! caller's responsibility; the only rule enforced here is that an
//! identifier is not blank.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::ValidationError;

/// Patient identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    /// Creates a new PatientId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("patient_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Session identifier, scoped to a patient.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a new SessionId, returning error if blank.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("session_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Composite key of a triage session: `(patient_id, session_id)`.
///
/// The same session id under two different patients names two unrelated
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey {
    pub patient_id: PatientId,
    pub session_id: SessionId,
}

impl SessionKey {
    /// Creates a session key from validated identifiers.
    pub fn new(patient_id: PatientId, session_id: SessionId) -> Self {
        Self {
            patient_id,
            session_id,
        }
    }

    /// Validates raw identifiers and builds a key.
    pub fn parse(
        patient_id: impl Into<String>,
        session_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(PatientId::new(patient_id)?, SessionId::new(session_id)?))
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.patient_id, self.session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_id_accepts_non_empty_string() {
        let id = PatientId::new("patient-123").unwrap();
        assert_eq!(id.as_str(), "patient-123");
    }

    #[test]
    fn patient_id_rejects_blank_string() {
        match PatientId::new("   ") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "patient_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn session_id_rejects_empty_string() {
        match SessionId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "session_id"),
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
    }

    #[test]
    fn session_id_keeps_value_verbatim() {
        let id = SessionId::new(" s-1 ").unwrap();
        assert_eq!(id.as_str(), " s-1 ");
    }

    #[test]
    fn session_key_parse_reports_first_blank_field() {
        let err = SessionKey::parse("", "").unwrap_err();
        assert_eq!(err.field(), "patient_id");

        let err = SessionKey::parse("p1", "").unwrap_err();
        assert_eq!(err.field(), "session_id");
    }

    #[test]
    fn session_keys_differ_by_patient() {
        let a = SessionKey::parse("p1", "s1").unwrap();
        let b = SessionKey::parse("p2", "s1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn session_key_displays_both_parts() {
        let key = SessionKey::parse("p1", "s1").unwrap();
        assert_eq!(key.to_string(), "p1/s1");
    }
}
