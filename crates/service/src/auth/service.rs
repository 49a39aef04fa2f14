use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::usuario;

use super::domain::LoginInput;
use super::errors::AuthError;
use super::repository::AuthRepository;

/// Login service independent of the web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Return the user matching both email and password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, domain::LoginInput, repository::mock::MockAuthRepository};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MockAuthRepository::default()));
    /// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// let res = rt.block_on(svc.login(LoginInput { correo: "x@y.com".into(), contrasena: "z".into() }));
    /// assert!(res.is_err());
    /// ```
    #[instrument(skip(self, input), fields(correo = %input.correo))]
    pub async fn login(&self, input: LoginInput) -> Result<usuario::Model, AuthError> {
        let found = self.repo.find_by_credentials(&input.correo, &input.contrasena).await?;
        match found {
            Some(user) => {
                info!(id_usuario = user.id_usuario, "login_ok");
                Ok(user)
            }
            None => {
                warn!("login_rejected");
                Err(AuthError::Unauthorized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo::SeaOrmAuthRepository;
    use crate::auth::repository::mock::MockAuthRepository;
    use crate::test_support::get_db;
    use crate::usuario_service::create_usuario;
    use models::usuario::UsuarioInput;

    fn user(id: i32, correo: &str, contrasena: &str) -> usuario::Model {
        usuario::Model {
            id_usuario: id,
            correo: correo.into(),
            contrasena: contrasena.into(),
            nombre: "Ana".into(),
            rol: "admin".into(),
        }
    }

    fn login(correo: &str, contrasena: &str) -> LoginInput {
        LoginInput { correo: correo.into(), contrasena: contrasena.into() }
    }

    #[tokio::test]
    async fn login_requires_both_fields_to_match() {
        let repo = Arc::new(MockAuthRepository::with_users(vec![user(1, "ana@acme.com", "s3creta")]));
        let svc = AuthService::new(repo);

        let ok = svc.login(login("ana@acme.com", "s3creta")).await.unwrap();
        assert_eq!(ok.id_usuario, 1);

        assert!(matches!(svc.login(login("ana@acme.com", "otra")).await, Err(AuthError::Unauthorized)));
        assert!(matches!(svc.login(login("nadie@acme.com", "s3creta")).await, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn repository_failure_is_not_unauthorized() {
        let svc = AuthService::new(Arc::new(MockAuthRepository::failing()));
        let err = svc.login(login("a@b.c", "x")).await.unwrap_err();
        assert_eq!(err.code(), 1200);
    }

    #[tokio::test]
    async fn seaorm_repository_matches_plaintext_password() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let created = create_usuario(
            &db,
            UsuarioInput {
                correo: "luis@acme.com".into(),
                contrasena: "clave".into(),
                nombre: "Luis".into(),
                rol: "usuario".into(),
            },
        )
        .await?;

        let svc = AuthService::new(Arc::new(SeaOrmAuthRepository::new(db)));
        let found = svc.login(login("luis@acme.com", "clave")).await?;
        assert_eq!(found, created);
        assert!(matches!(svc.login(login("luis@acme.com", "CLAVE")).await, Err(AuthError::Unauthorized)));
        Ok(())
    }
}
