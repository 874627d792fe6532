use crate::error::ApiResult;
use crate::models::{BioJob, User, UserDraft, UserId};

use async_trait::async_trait;

/// Calls against the backend's `/users` resource
#[async_trait]
pub trait UserApi: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> ApiResult<Vec<User>>;

    /// `GET /users/{id}`
    async fn get_user(&self, id: UserId) -> ApiResult<User>;

    /// `POST /users`
    async fn create_user(&self, draft: &UserDraft) -> ApiResult<User>;

    /// `PUT /users/{id}`
    async fn update_user(&self, id: UserId, draft: &UserDraft) -> ApiResult<User>;

    /// `DELETE /users/{id}`
    async fn delete_user(&self, id: UserId) -> ApiResult<()>;

    /// `POST /users/{id}/bio`
    async fn request_bio(&self, id: UserId) -> ApiResult<BioJob>;
}
