//! Domain types and pure functions shared by the Skyport backend crates.

pub mod error;
pub mod fleet;
pub mod naming;
pub mod roles;
pub mod types;
