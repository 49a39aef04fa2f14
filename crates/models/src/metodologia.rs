use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "metodologias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_metodologia: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub nombre: String,
    #[sea_orm(column_type = "Text")]
    pub descripcion: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetodologiaInput {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
}

impl MetodologiaInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_metodologia: NotSet,
            nombre: Set(self.nombre),
            descripcion: Set(self.descripcion),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.nombre = Set(self.nombre);
        am.descripcion = Set(self.descripcion);
    }
}
