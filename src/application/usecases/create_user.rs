use std::sync::Arc;

use crate::domain::{
    errors::DomainError,
    models::{User, UserFields},
    repositories::UserRepository,
};

pub struct CreateUserUseCase {
    repo: Arc<dyn UserRepository>,
}

pub struct CreateUserRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
}

impl CreateUserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let fields = UserFields::parse(request.name, request.bio)?;
        let user = self.repo.insert(fields).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }
}
