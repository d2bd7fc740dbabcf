use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserId},
    repositories::UserRepository,
};

pub struct DeleteUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> Result<User, DomainError> {
        let id: UserId = raw_id.parse()?;
        let existing = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;

        let removed = self.repo.remove(&existing.id).await?;
        tracing::info!(user_id = %removed.id, "user removed");
        Ok(removed)
    }
}
