use sqlx::PgPool;

use crate::{
    app::{
        errors::DefaultApiError,
        models::api_error::ApiError,
        util::{hasher, sqlx::is_unique_violation},
    },
    auth::{
        dtos::{login_dto::LoginDto, register_dto::RegisterDto},
        errors::AuthApiError,
        jwt::models::claims::Claims,
    },
};

use super::{dtos::edit_user_dto::EditUserDto, errors::UsersApiError, models::user::User};

pub async fn create_user_as_admin(dto: &RegisterDto, pool: &PgPool) -> Result<User, ApiError> {
    let Ok(hash) = hasher::hash(dto.password.to_string()).await else {
        return Err(DefaultApiError::InternalServerError.value());
    };

    let user = User::new(dto, hash);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO users (
            id, username, username_key, displayname,
            email, email_key, password_hash, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ",
    )
    .bind(&user.id)
    .bind(&user.username)
    .bind(&user.username_key)
    .bind(&user.displayname)
    .bind(&user.email)
    .bind(&user.email_key)
    .bind(&user.password_hash)
    .bind(user.updated_at)
    .bind(user.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => Ok(user),
        Err(e) if is_unique_violation(&e) => Err(UsersApiError::UserAlreadyExists.value()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_by_id(id: &str, pool: &PgPool) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT * FROM users WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_user_by_login_dto_as_admin(
    login_dto: &LoginDto,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let (column, value) = match (&login_dto.username, &login_dto.email) {
        (Some(username), _) => ("username_key", username.to_lowercase()),
        (None, Some(email)) => ("email_key", email.to_lowercase()),
        (None, None) => return Err(AuthApiError::MissingCredentials.value()),
    };

    let sql = ["SELECT * FROM users WHERE ", column, " = $1"].concat();
    let sqlx_result = sqlx::query_as::<_, User>(&sql)
        .bind(value)
        .fetch_optional(pool)
        .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(AuthApiError::BadLogin.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_user_by_id(
    dto: &EditUserDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<User, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, User>(&sql);

    if let Some(displayname) = &dto.displayname {
        sqlx = sqlx.bind(displayname.trim());
    }
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
