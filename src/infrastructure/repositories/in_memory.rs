use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{User, UserFields, UserId},
    repositories::UserRepository,
};

#[derive(Default)]
struct Store {
    last_id: i64,
    users: BTreeMap<UserId, User>,
}

#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> anyhow::Result<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(id).cloned())
    }

    async fn insert(&self, fields: UserFields) -> anyhow::Result<User> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let user = fields.into_user(UserId(store.last_id));
        store.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: &UserId, fields: UserFields) -> anyhow::Result<User> {
        let mut store = self.store.write().await;
        let Some(existing) = store.users.get_mut(id) else {
            anyhow::bail!("user {id} does not exist");
        };
        *existing = fields.into_user(*id);
        Ok(existing.clone())
    }

    async fn remove(&self, id: &UserId) -> anyhow::Result<User> {
        let mut store = self.store.write().await;
        store
            .users
            .remove(id)
            .ok_or_else(|| anyhow::anyhow!("user {id} does not exist"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, bio: &str) -> UserFields {
        UserFields::parse(Some(name.to_string()), Some(bio.to_string())).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(fields("Ann", "x")).await.unwrap();
        let second = repo.insert(fields("Bob", "y")).await.unwrap();

        assert_eq!(first.id, UserId(1));
        assert_eq!(second.id, UserId(2));
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let repo = InMemoryUserRepository::new();
        let first = repo.insert(fields("Ann", "x")).await.unwrap();
        repo.remove(&first.id).await.unwrap();

        let next = repo.insert(fields("Bob", "y")).await.unwrap();
        assert_eq!(next.id, UserId(2));
    }

    #[tokio::test]
    async fn update_overwrites_name_and_bio() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(fields("Ann", "x")).await.unwrap();

        let updated = repo.update(&user.id, fields("Ann2", "y")).await.unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.name, "Ann2");
        assert_eq!(updated.bio, "y");
        assert_eq!(repo.find_by_id(&user.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_and_remove_fail_for_unknown_id() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.update(&UserId(7), fields("Ann", "x")).await.is_err());
        assert!(repo.remove(&UserId(7)).await.is_err());
    }

    #[tokio::test]
    async fn remove_returns_the_deleted_record() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(fields("Ann", "x")).await.unwrap();

        let removed = repo.remove(&user.id).await.unwrap();

        assert_eq!(removed, user);
        assert!(repo.find_by_id(&user.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
