pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod route;
