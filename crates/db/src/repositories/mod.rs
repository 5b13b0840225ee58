//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod airplane_repo;
pub mod airplane_type_repo;
pub mod airport_repo;
pub mod route_repo;

pub use airplane_repo::AirplaneRepo;
pub use airplane_type_repo::AirplaneTypeRepo;
pub use airport_repo::AirportRepo;
pub use route_repo::RouteRepo;
