use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

/// Someone who took part in a form; `firma` holds the signature as text
/// (usually an encoded image).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "participantes_formulario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_participante: i32,
    pub id_formulario: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub cargo: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub nombre: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub firma: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipanteInput {
    pub id_formulario: i32,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub firma: Option<String>,
}

impl ParticipanteInput {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id_participante: NotSet,
            id_formulario: Set(self.id_formulario),
            cargo: Set(self.cargo),
            nombre: Set(self.nombre),
            firma: Set(self.firma),
        }
    }

    pub fn apply(self, am: &mut ActiveModel) {
        am.id_formulario = Set(self.id_formulario);
        am.cargo = Set(self.cargo);
        am.nombre = Set(self.nombre);
        am.firma = Set(self.firma);
    }
}
