use crate::{domain::models::User, presentation::http::responses::UserDto};

pub fn map_user(user: &User) -> UserDto {
    UserDto {
        id: user.id.0,
        name: user.name.clone(),
        bio: user.bio.clone(),
    }
}
