//! Test helpers
//!
//! In-memory [`UserApi`] with call recording and injectable failures.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::api::UserApi;
use crate::error::{ApiError, ApiResult};
use crate::types::{UserId, UserPatch, UserRecord};

/// A request the mock received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List,
    Get(String),
    Create(UserRecord),
    Update(UserId, UserRecord),
    Delete(UserId),
}

pub struct MockUserApi {
    users: RwLock<Vec<UserRecord>>,
    calls: RwLock<Vec<MockCall>>,
    /// When set, every call fails with this error
    failure: RwLock<Option<ApiError>>,
    /// When set, `get_user` answers with this body instead of a stored record
    fetched: RwLock<Option<UserPatch>>,
    next_id: AtomicU64,
}

impl MockUserApi {
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Ids handed out by `create_user` start at `next_id`
    pub fn with_next_id(next_id: u64) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
            fetched: RwLock::new(None),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub async fn insert(&self, user: UserRecord) {
        self.users.write().await.push(user);
    }

    pub async fn fail_with(&self, err: Option<ApiError>) {
        *self.failure.write().await = err;
    }

    pub async fn serve_fetched(&self, patch: UserPatch) {
        *self.fetched.write().await = Some(patch);
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: MockCall) -> ApiResult<()> {
        self.calls.write().await.push(call);
        match self.failure.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserApi for MockUserApi {
    async fn list_users(&self) -> ApiResult<Vec<UserRecord>> {
        self.record(MockCall::List).await?;
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: &str) -> ApiResult<UserPatch> {
        self.record(MockCall::Get(id.to_string())).await?;
        if let Some(patch) = self.fetched.read().await.clone() {
            return Ok(patch);
        }
        self.users
            .read()
            .await
            .iter()
            .find(|u| u.id.as_ref().is_some_and(|uid| uid.to_string() == id))
            .cloned()
            .map(UserPatch::from)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                body: "{}".to_string(),
            })
    }

    async fn create_user(&self, user: &UserRecord) -> ApiResult<UserRecord> {
        self.record(MockCall::Create(user.clone())).await?;
        let mut created = user.clone();
        created.id = Some(UserId::Number(self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.users.write().await.push(created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: &UserId, user: &UserRecord) -> ApiResult<()> {
        self.record(MockCall::Update(id.clone(), user.clone())).await?;
        let mut users = self.users.write().await;
        if let Some(slot) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete_user(&self, id: &UserId) -> ApiResult<()> {
        self.record(MockCall::Delete(id.clone())).await?;
        self.users.write().await.retain(|u| u.id.as_ref() != Some(id));
        Ok(())
    }
}

/// Backend payload for the "Ann" fixture (numeric id and marks)
pub fn ann_json() -> &'static str {
    r#"{"id":42,"name":"Ann","phone":"5551234567","email":"a@b.com","marks1":80,"marks2":90,"marks3":70}"#
}
