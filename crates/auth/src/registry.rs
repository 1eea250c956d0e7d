use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

use sparestock_core::OperatorId;

/// Public view of a registered operator (no credential material).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub id: OperatorId,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("username is already registered")]
    UsernameTaken,

    /// Deliberately the same error for unknown user and wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("credential store unavailable: {0}")]
    Unavailable(String),
}

struct StoredOperator {
    id: OperatorId,
    password_hash: String,
}

/// In-memory operator registry with bcrypt-hashed passwords.
///
/// Keyed by username (unique). Single-warehouse deployments hold a handful of
/// operators, so a map behind a lock is the whole story.
#[derive(Default)]
pub struct OperatorRegistry {
    operators: RwLock<HashMap<String, StoredOperator>>,
}

impl OperatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new operator. Fails on empty fields or a taken username.
    pub fn register(&self, username: &str, password: &str) -> Result<Operator, CredentialError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CredentialError::Validation(
                "username cannot be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(CredentialError::Validation(
                "password cannot be empty".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;

        let mut operators = self
            .operators
            .write()
            .map_err(|_| CredentialError::Unavailable("lock poisoned".to_string()))?;

        if operators.contains_key(username) {
            return Err(CredentialError::UsernameTaken);
        }

        let id = OperatorId::new();
        operators.insert(
            username.to_string(),
            StoredOperator {
                id,
                password_hash,
            },
        );

        Ok(Operator {
            id,
            username: username.to_string(),
        })
    }

    /// Check credentials, returning the operator on success.
    pub fn verify(&self, username: &str, password: &str) -> Result<Operator, CredentialError> {
        let operators = self
            .operators
            .read()
            .map_err(|_| CredentialError::Unavailable("lock poisoned".to_string()))?;

        let stored = operators
            .get(username.trim())
            .ok_or(CredentialError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &stored.password_hash)
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        if !matches {
            return Err(CredentialError::InvalidCredentials);
        }

        Ok(Operator {
            id: stored.id,
            username: username.trim().to_string(),
        })
    }
}
