pub mod catalog;
pub mod errors;
pub mod extract;
pub mod launcher;
pub mod routes;
pub mod session;
pub mod startup;

pub use catalog::ServiceKind;
pub use startup::{build_app, run};
