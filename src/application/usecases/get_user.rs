use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserId},
    repositories::UserRepository,
};

pub struct GetUserUseCase {
    repo: Arc<dyn UserRepository>,
}

impl GetUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, raw_id: &str) -> Result<User, DomainError> {
        let id: UserId = raw_id.parse()?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user {id}")))
    }
}
