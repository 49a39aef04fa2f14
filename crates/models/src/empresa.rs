use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "empresas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_empresa: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub nombre: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub telefono: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /empresas/` and `PUT /empresas/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmpresaInput {
    pub nombre: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

impl EmpresaInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_empresa: NotSet,
            nombre: Set(self.nombre),
            telefono: Set(self.telefono),
        }
    }

    /// Overwrite every column of an existing row.
    pub fn apply(self, am: &mut ActiveModel) {
        am.nombre = Set(self.nombre);
        am.telefono = Set(self.telefono);
    }
}
