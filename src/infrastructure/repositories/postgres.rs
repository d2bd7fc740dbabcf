use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, Pool, Postgres, postgres::PgPoolOptions};

use crate::domain::{
    models::{User, UserFields, UserId},
    repositories::UserRepository,
};

pub type PgPool = Pool<Postgres>;

/// Opens a pool and applies the embedded migrations.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRecord>(r#"SELECT id, name, bio FROM users ORDER BY id"#)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, name, bio FROM users WHERE id = $1"#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn insert(&self, fields: UserFields) -> anyhow::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, bio)
            VALUES ($1, $2)
            RETURNING id, name, bio
            "#,
        )
        .bind(fields.name())
        .bind(fields.bio())
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn update(&self, id: &UserId, fields: UserFields) -> anyhow::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            UPDATE users
            SET name = $2,
                bio = $3
            WHERE id = $1
            RETURNING id, name, bio
            "#,
        )
        .bind(id.0)
        .bind(fields.name())
        .bind(fields.bio())
        .fetch_optional(&self.pool)
        .await?;
        record
            .map(User::from)
            .ok_or_else(|| anyhow::anyhow!("user {id} does not exist"))
    }

    async fn remove(&self, id: &UserId) -> anyhow::Result<User> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"DELETE FROM users WHERE id = $1 RETURNING id, name, bio"#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;
        record
            .map(User::from)
            .ok_or_else(|| anyhow::anyhow!("user {id} does not exist"))
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: i64,
    name: String,
    bio: String,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: UserId(value.id),
            name: value.name,
            bio: value.bio,
        }
    }
}
