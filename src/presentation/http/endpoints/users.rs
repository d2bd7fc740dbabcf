use std::sync::Arc;

use poem::Body;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use crate::{
    application::usecases::{create_user::CreateUserRequest, update_user::UpdateUserRequest},
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_user,
        requests::UserPayloadDto,
        responses::{
            CreateUserResponse, DeleteUserResponse, ErrorDto, GetUserResponse, ListUsersResponse,
            MISSING_NAME_OR_BIO, MessageDto, USER_NOT_FOUND, USER_NOT_MODIFIED, USER_NOT_REMOVED,
            USER_NOT_RETRIEVED, USER_NOT_SAVED, USERS_NOT_RETRIEVED, UpdateUserResponse,
        },
    },
};

#[derive(Clone)]
pub struct UsersEndpoints {
    state: Arc<ApiState>,
}

impl UsersEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl UsersEndpoints {
    #[oai(path = "/users", method = "get", tag = EndpointsTags::Users)]
    pub async fn list_users(&self) -> ListUsersResponse {
        match self.state.list_users_usecase.execute().await {
            Ok(users) => ListUsersResponse::Ok(Json(users.iter().map(map_user).collect())),
            Err(err) => ListUsersResponse::InternalError(internal_error(USERS_NOT_RETRIEVED, &err)),
        }
    }

    #[oai(path = "/users/:id", method = "get", tag = EndpointsTags::Users)]
    pub async fn get_user(&self, id: Path<String>) -> GetUserResponse {
        match self.state.get_user_usecase.execute(&id.0).await {
            Ok(user) => GetUserResponse::Ok(Json(map_user(&user))),
            Err(DomainError::NotFound(_)) => GetUserResponse::NotFound(MessageDto::new(USER_NOT_FOUND)),
            Err(err) => GetUserResponse::InternalError(internal_error(USER_NOT_RETRIEVED, &err)),
        }
    }

    #[oai(path = "/users", method = "post", tag = EndpointsTags::Users)]
    pub async fn create_user(&self, body: Body) -> CreateUserResponse {
        let UserPayloadDto { name, bio } = read_payload(body).await;
        match self
            .state
            .create_user_usecase
            .execute(CreateUserRequest { name, bio })
            .await
        {
            Ok(user) => CreateUserResponse::Created(Json(map_user(&user))),
            Err(DomainError::Validation(_)) => {
                CreateUserResponse::BadRequest(MessageDto::new(MISSING_NAME_OR_BIO))
            }
            Err(err) => CreateUserResponse::InternalError(internal_error(USER_NOT_SAVED, &err)),
        }
    }

    #[oai(path = "/users/:id", method = "put", tag = EndpointsTags::Users)]
    pub async fn update_user(&self, id: Path<String>, body: Body) -> UpdateUserResponse {
        let UserPayloadDto { name, bio } = read_payload(body).await;
        let payload = UpdateUserRequest { id: id.0, name, bio };

        match self.state.update_user_usecase.execute(payload).await {
            Ok(user) => UpdateUserResponse::Ok(Json(map_user(&user))),
            Err(DomainError::NotFound(_)) => {
                UpdateUserResponse::NotFound(MessageDto::new(USER_NOT_FOUND))
            }
            Err(DomainError::Validation(_)) => {
                UpdateUserResponse::BadRequest(MessageDto::new(MISSING_NAME_OR_BIO))
            }
            Err(err) => UpdateUserResponse::InternalError(internal_error(USER_NOT_MODIFIED, &err)),
        }
    }

    #[oai(path = "/users/:id", method = "delete", tag = EndpointsTags::Users)]
    pub async fn delete_user(&self, id: Path<String>) -> DeleteUserResponse {
        match self.state.delete_user_usecase.execute(&id.0).await {
            Ok(user) => DeleteUserResponse::Ok(Json(map_user(&user))),
            Err(DomainError::NotFound(_)) => {
                DeleteUserResponse::NotFound(MessageDto::new(USER_NOT_FOUND))
            }
            Err(err) => DeleteUserResponse::InternalError(internal_error(USER_NOT_REMOVED, &err)),
        }
    }
}

// The body is read in full and decoded leniently, so the use cases decide
// whether an id lookup or the payload check answers first.
async fn read_payload(body: Body) -> UserPayloadDto {
    let bytes = body.into_bytes().await.unwrap_or_default();
    UserPayloadDto::from_bytes(&bytes)
}

fn internal_error(message: &str, err: &DomainError) -> Json<ErrorDto> {
    tracing::error!(error = ?err, "{message}");
    ErrorDto::new(message, err)
}
