use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{app::util::time, auth::dtos::register_dto::RegisterDto};

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub username_key: String,
    pub displayname: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub email_key: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub updated_at: i64,
    pub created_at: i64,
}

impl User {
    pub fn new(dto: &RegisterDto, hash: String) -> Self {
        let current_time = time::current_time_in_secs();

        Self {
            id: Uuid::new_v4().to_string(),
            username: dto.username.to_string(),
            username_key: dto.username.to_lowercase(),
            displayname: dto.username.to_string(),
            email: dto.email.to_string(),
            email_key: dto.email.to_lowercase(),
            password_hash: hash,
            updated_at: current_time,
            created_at: current_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hides_credentials_when_serialized() {
        let dto = RegisterDto {
            username: "Jane_Doe".to_string(),
            email: "Jane@Example.com".to_string(),
            password: "Sup3r$ecret".to_string(),
        };
        let user = User::new(&dto, "hash".to_string());

        assert_eq!(user.username_key, "jane_doe");
        assert_eq!(user.email_key, "jane@example.com");

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("username_key").is_none());
        assert_eq!(value["displayname"], "Jane_Doe");
    }
}
