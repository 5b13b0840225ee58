//! Row structs (`FromRow`) and create DTOs, one module per table.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod route;
