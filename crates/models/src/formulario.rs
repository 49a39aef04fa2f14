use chrono::NaiveDate;
use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

/// A survey form. `id_empresa`, `id_usuario` and `id_metodologia` are plain
/// integers; the referenced rows may not exist.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "formulario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_formulario: i32,
    pub id_empresa: i32,
    pub fecha: Date,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub ciudad: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub nombre_software: Option<String>,
    pub id_usuario: i32,
    pub id_metodologia: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormularioInput {
    pub id_empresa: i32,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub ciudad: Option<String>,
    #[serde(default)]
    pub nombre_software: Option<String>,
    pub id_usuario: i32,
    pub id_metodologia: i32,
}

impl FormularioInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_formulario: NotSet,
            id_empresa: Set(self.id_empresa),
            fecha: Set(self.fecha),
            ciudad: Set(self.ciudad),
            nombre_software: Set(self.nombre_software),
            id_usuario: Set(self.id_usuario),
            id_metodologia: Set(self.id_metodologia),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.id_empresa = Set(self.id_empresa);
        am.fecha = Set(self.fecha);
        am.ciudad = Set(self.ciudad);
        am.nombre_software = Set(self.nombre_software);
        am.id_usuario = Set(self.id_usuario);
        am.id_metodologia = Set(self.id_metodologia);
    }
}
