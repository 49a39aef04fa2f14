use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "objetivos_formulario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_objetivo: i32,
    pub id_formulario: i32,
    #[sea_orm(column_type = "Text")]
    pub descripcion: String,
    // 'general' or 'especifico' by convention; any string is stored
    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub tipo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjetivoInput {
    pub id_formulario: i32,
    pub descripcion: String,
    pub tipo: String,
}

impl ObjetivoInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_objetivo: NotSet,
            id_formulario: Set(self.id_formulario),
            descripcion: Set(self.descripcion),
            tipo: Set(self.tipo),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.id_formulario = Set(self.id_formulario);
        am.descripcion = Set(self.descripcion);
        am.tipo = Set(self.tipo);
    }
}
