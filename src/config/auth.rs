//! API credential configuration

use serde::Deserialize;

use super::error::ValidationError;

/// HTTP Basic credentials guarding the API
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected username
    pub username: String,

    /// Expected password
    pub password: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AuthConfig {
    /// Validate credential configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__USERNAME"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__PASSWORD"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credentials_rejected() {
        let config = AuthConfig {
            username: "nurse".to_string(),
            password: String::new(),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AUTH__PASSWORD"))
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = AuthConfig {
            username: "nurse".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("nurse"));
        assert!(!debug.contains("hunter2"));
    }
}
