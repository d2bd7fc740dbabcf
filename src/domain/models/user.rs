use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Storage-assigned identifier of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<i64>()
            .map(UserId)
            .map_err(|_| DomainError::NotFound(format!("user {value}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub bio: String,
}

/// Name and bio of a user, both guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    bio: String,
}

impl UserFields {
    /// Accepts the raw request values. Missing and empty values are rejected alike.
    pub fn parse(name: Option<String>, bio: Option<String>) -> Result<Self, DomainError> {
        match (non_empty(name), non_empty(bio)) {
            (Some(name), Some(bio)) => Ok(Self { name, bio }),
            _ => Err(DomainError::Validation("name and bio are required".to_string())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            bio: self.bio,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
