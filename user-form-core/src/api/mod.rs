//! Users REST backend

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::types::{UserId, UserPatch, UserRecord};

pub use http::{HttpUserApi, DEFAULT_BASE_URL};

/// Operations the client needs from the users backend
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>>;

    /// `GET /users/{id}`; only the keys present in the body are set
    async fn get_user(&self, id: &str) -> ApiResult<UserPatch>;

    /// `POST /users`; returns the stored record with its new id
    async fn create_user(&self, user: &UserRecord) -> ApiResult<UserRecord>;

    /// `PATCH /users/{id}` with the full form values
    async fn update_user(&self, id: &UserId, user: &UserRecord) -> ApiResult<()>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: &UserId) -> ApiResult<()>;
}
