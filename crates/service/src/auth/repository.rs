use async_trait::async_trait;

use models::usuario;

use super::errors::AuthError;

/// Credential lookup used by [`super::AuthService`].
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// The user whose email and stored password both equal the given values.
    async fn find_by_credentials(&self, correo: &str, contrasena: &str) -> Result<Option<usuario::Model>, AuthError>;
}

/// In-memory repository for tests
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<Vec<usuario::Model>>,
        fail: bool,
    }

    impl MockAuthRepository {
        pub fn with_users(users: Vec<usuario::Model>) -> Self {
            Self { users: Mutex::new(users), fail: false }
        }

        /// Every lookup returns a repository error.
        pub fn failing() -> Self {
            Self { users: Mutex::default(), fail: true }
        }
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_by_credentials(&self, correo: &str, contrasena: &str) -> Result<Option<usuario::Model>, AuthError> {
            if self.fail {
                return Err(AuthError::Repository("store unavailable".into()));
            }
            let users = self.users.lock().map_err(|e| AuthError::Repository(e.to_string()))?;
            Ok(users.iter().find(|u| u.correo == correo && u.contrasena == contrasena).cloned())
        }
    }
}
