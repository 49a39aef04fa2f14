//! Login against the `usuarios` table, split into domain, repository and service.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
