use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROL: &str = "usuario";

/// Passwords are stored and compared as given; nothing hashes them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_usuario: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(255))")]
    pub correo: String,
    #[sea_orm(column_name = "contraseña", column_type = "String(StringLen::N(255))")]
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub rol: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn default_rol() -> String {
    DEFAULT_ROL.to_string()
}

/// Body of `POST /usuarios/` and `PUT /usuarios/{id}`. `rol` falls back to
/// `usuario` when omitted, on update as well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsuarioInput {
    pub correo: String,
    #[serde(rename = "contraseña")]
    pub contrasena: String,
    pub nombre: String,
    #[serde(default = "default_rol")]
    pub rol: String,
}

impl UsuarioInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_usuario: NotSet,
            correo: Set(self.correo),
            contrasena: Set(self.contrasena),
            nombre: Set(self.nombre),
            rol: Set(self.rol),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.correo = Set(self.correo);
        am.contrasena = Set(self.contrasena);
        am.nombre = Set(self.nombre);
        am.rol = Set(self.rol);
    }
}
