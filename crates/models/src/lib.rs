//! Table definitions and request shapes.
//!
//! Every entity module holds the sea-orm `Model` (the response shape, with its
//! generated id) and an `*Input` struct (the create/replace shape) that knows
//! how to turn itself into an `ActiveModel` column by column.

pub mod errors;
pub mod db;
pub mod schema;
pub mod empresa;
pub mod usuario;
pub mod formulario;
pub mod objetivo;
pub mod participante;
pub mod metodologia;

#[cfg(test)]
mod tests;
