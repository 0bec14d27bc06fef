//! User Form Core Library
//!
//! Platform-independent logic behind the user create/edit form:
//! - record and patch types
//! - per-field validation
//! - the user store slice (list + form state)
//! - a REST client for the users backend
//! - the form page controller (mount / submit / title)
//!
//! Front ends own a [`UserStore`] and drive a [`UserFormPage`] with it.

pub mod api;
pub mod error;
pub mod form;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use api::{HttpUserApi, UserApi};
pub use error::{ApiError, ApiResult};
pub use form::{Navigator, SubmitOutcome, UserFormPage};
pub use store::{FormState, UserAction, UserStore};
pub use types::{FormField, UserId, UserPatch, UserRecord};
