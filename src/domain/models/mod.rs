pub mod user;

pub use user::{User, UserFields, UserId};
