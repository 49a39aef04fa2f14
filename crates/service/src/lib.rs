//! Data-access operations for every table, on top of the `models` entities.
//! - One module of free functions per table, plus a [`resource::Resource`] impl.
//! - Login lives under [`auth`].

pub mod errors;
pub mod pagination;
pub mod resource;
pub mod auth;

pub mod empresa_service;
pub mod usuario_service;
pub mod formulario_service;
pub mod objetivo_service;
pub mod participante_service;
pub mod metodologia_service;

#[cfg(test)]
pub mod test_support;

pub use empresa_service::Empresas;
pub use formulario_service::Formularios;
pub use metodologia_service::Metodologias;
pub use objetivo_service::Objetivos;
pub use participante_service::Participantes;
pub use usuario_service::Usuarios;
