use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserFields, UserId},
    repositories::UserRepository,
};

pub struct UpdateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct UpdateUserRequest {
    pub id: String,
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl UpdateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Existence is checked before the payload, so an unknown id wins over a bad body.
    pub async fn execute(&self, request: UpdateUserRequest) -> Result<User, DomainError> {
        let id: UserId = request.id.parse()?;
        let existing = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))?;

        let fields = UserFields::parse(request.name, request.bio)?;
        let user = self.repo.update(&existing.id, fields).await?;
        tracing::info!(user_id = %user.id, "user updated");
        Ok(user)
    }
}
