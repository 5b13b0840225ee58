//! Well-known role name constants.
//!
//! These match the `role` claim embedded in access tokens. Staff is the
//! only elevated role; every write endpoint requires it.

pub const ROLE_USER: &str = "user";
pub const ROLE_STAFF: &str = "staff";
