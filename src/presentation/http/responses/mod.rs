use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::domain::errors::DomainError;

pub const USER_NOT_FOUND: &str = "The user with the specified ID does not exist";
pub const MISSING_NAME_OR_BIO: &str = "Please provide name and bio for the user";
pub const USERS_NOT_RETRIEVED: &str = "The users information could not be retrieved";
pub const USER_NOT_RETRIEVED: &str = "The user information could not be retrieved";
pub const USER_NOT_SAVED: &str = "There was an error while saving the user to the database";
pub const USER_NOT_MODIFIED: &str = "The user information could not be modified";
pub const USER_NOT_REMOVED: &str = "The user could not be removed";

#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub bio: String,
}

#[derive(Object, Debug)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Body of every 500 response: a fixed message plus the failure's diagnostics.
#[derive(Object, Debug)]
pub struct ErrorDto {
    pub message: String,
    pub err: String,
    pub stack: String,
}

impl ErrorDto {
    pub fn new(message: &str, err: &DomainError) -> Json<Self> {
        let stack = match err {
            DomainError::Other(inner) => format!("{inner:?}"),
            other => format!("{other:?}"),
        };
        Json(Self {
            message: message.to_string(),
            err: err.to_string(),
            stack,
        })
    }
}

#[derive(ApiResponse)]
pub enum ListUsersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<UserDto>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum GetUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 404)]
    NotFound(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum CreateUserResponse {
    #[oai(status = 201)]
    Created(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum UpdateUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 400)]
    BadRequest(Json<MessageDto>),
    #[oai(status = 404)]
    NotFound(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}

#[derive(ApiResponse)]
pub enum DeleteUserResponse {
    #[oai(status = 200)]
    Ok(Json<UserDto>),
    #[oai(status = 404)]
    NotFound(Json<MessageDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorDto>),
}
