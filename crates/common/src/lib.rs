//! Pieces shared by every service binary: log setup and the small wire
//! types that are not tied to a table.

pub mod types;
pub mod utils;
