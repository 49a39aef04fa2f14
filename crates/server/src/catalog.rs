//! The three services built from this crate and what each one serves.

use std::fmt;

use axum::Router;
use sea_orm::{DatabaseConnection, DbErr};

use models::schema::{ensure_empresas_schema, ensure_formularios_schema};
use service::{Empresas, Formularios, Metodologias, Objetivos, Participantes, Usuarios};

use crate::routes::{auth, resources::resource_routes};
use crate::session::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    /// Companies, users and login.
    Empresas,
    /// Forms with their objectives, participants and methodologies.
    Formularios,
    /// Evaluation front door; serves the companies/users tables.
    Evaluacion,
}

impl ServiceKind {
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Empresas => "empresas",
            ServiceKind::Formularios => "formularios",
            ServiceKind::Evaluacion => "evaluacion",
        }
    }

    pub fn root_message(self) -> &'static str {
        match self {
            ServiceKind::Empresas => "Microservicio de Empresas funcionando",
            ServiceKind::Formularios => "Microservicio de Formularios funcionando",
            ServiceKind::Evaluacion => "Microservicio de Evaluación funcionando",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::Empresas => 8000,
            ServiceKind::Formularios => 8001,
            ServiceKind::Evaluacion => 8002,
        }
    }

    /// Create this service's tables when missing.
    pub async fn ensure_schema(self, db: &DatabaseConnection) -> Result<(), DbErr> {
        match self {
            ServiceKind::Empresas | ServiceKind::Evaluacion => ensure_empresas_schema(db).await,
            ServiceKind::Formularios => ensure_formularios_schema(db).await,
        }
    }

    /// Resource and login routes; the root route is added by the caller.
    pub fn routes(self) -> Router<AppState> {
        match self {
            ServiceKind::Empresas | ServiceKind::Evaluacion => Router::new()
                .merge(resource_routes::<Empresas>())
                .merge(resource_routes::<Usuarios>())
                .merge(auth::routes()),
            ServiceKind::Formularios => Router::new()
                .merge(resource_routes::<Formularios>())
                .merge(resource_routes::<Objetivos>())
                .merge(resource_routes::<Participantes>())
                .merge(resource_routes::<Metodologias>()),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_do_not_collide() {
        let ports = [ServiceKind::Empresas, ServiceKind::Formularios, ServiceKind::Evaluacion].map(ServiceKind::default_port);
        assert_eq!(ports, [8000, 8001, 8002]);
    }
}
