use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub correo: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
}
