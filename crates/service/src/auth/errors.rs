use thiserror::Error;

/// Business errors for the login workflow
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email and wrong password are reported the same way.
    #[error("invalid credentials")]
    Unauthorized,
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Unauthorized => 1004,
            AuthError::Repository(_) => 1200,
        }
    }
}
