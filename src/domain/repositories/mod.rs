use async_trait::async_trait;

use crate::domain::models::{User, UserFields, UserId};

/// Persistence collaborator for users. Implementations assign ids on insert.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> anyhow::Result<Vec<User>>;
    async fn find_by_id(&self, id: &UserId) -> anyhow::Result<Option<User>>;
    async fn insert(&self, fields: UserFields) -> anyhow::Result<User>;
    /// Overwrites name and bio. Fails if no record has `id`.
    async fn update(&self, id: &UserId, fields: UserFields) -> anyhow::Result<User>;
    /// Deletes the record and returns it. Fails if no record has `id`.
    async fn remove(&self, id: &UserId) -> anyhow::Result<User>;
}
