//! Domain types

mod user;

pub use user::{FormField, UserId, UserPatch, UserRecord};
