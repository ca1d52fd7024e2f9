use sqlx::PgPool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::sqlx::is_unique_violation},
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{
        create_category_dto::CreateCategoryDto, edit_category_dto::EditCategoryDto,
        get_categories_filter_dto::GetCategoriesFilterDto,
    },
    errors::CategoriesApiError,
    models::category::Category,
};

pub async fn create_category(
    dto: &CreateCategoryDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let mut categories = insert_categories(vec![Category::new(dto, claims)], pool).await?;

    match categories.pop() {
        Some(category) => Ok(category),
        None => Err(DefaultApiError::InternalServerError.value()),
    }
}

async fn insert_categories(
    categories: Vec<Category>,
    pool: &PgPool,
) -> Result<Vec<Category>, ApiError> {
    let num_properties: usize = 7;

    let mut sql = "
    INSERT INTO categories (
        id, user_id, name, category_type, color, updated_at, created_at
    ) "
    .to_string();

    let mut index: usize = 1;
    for i in 0..categories.len() {
        sql.push_str(if i == 0 { "VALUES (" } else { ", (" });

        let placeholders: Vec<String> = (index..index + num_properties)
            .map(|n| ["$", &n.to_string()].concat())
            .collect();
        sql.push_str(&placeholders.join(", "));
        index += num_properties;

        sql.push(')');
    }

    let mut sqlx = sqlx::query(&sql);

    for c in &categories {
        sqlx = sqlx
            .bind(&c.id)
            .bind(&c.user_id)
            .bind(&c.name)
            .bind(&c.category_type)
            .bind(&c.color)
            .bind(c.updated_at)
            .bind(c.created_at);
    }

    match sqlx.execute(pool).await {
        Ok(_) => Ok(categories),
        Err(e) if is_unique_violation(&e) => {
            Err(CategoriesApiError::CategoryAlreadyExists.value())
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_categories(
    dto: &GetCategoriesFilterDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<Category>, ApiError> {
    let sql = dto.to_sql();

    let mut sqlx = sqlx::query_as::<_, Category>(&sql).bind(&claims.id);

    if let Some(category_type) = &dto.category_type {
        sqlx = sqlx.bind(category_type.value());
    }

    match sqlx.fetch_all(pool).await {
        Ok(categories) => Ok(categories),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_all_categories(claims: &Claims, pool: &PgPool) -> Result<Vec<Category>, ApiError> {
    get_categories(&GetCategoriesFilterDto::default(), claims, pool).await
}

pub async fn get_category_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Category>(
        "
        SELECT * FROM categories WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_category_by_id(
    id: &str,
    dto: &EditCategoryDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Category, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Category>(&sql);

    if let Some(name) = &dto.name {
        sqlx = sqlx.bind(name.trim());
    }
    if let Some(category_type) = &dto.category_type {
        sqlx = sqlx.bind(category_type.value());
    }
    if let Some(color) = &dto.color {
        sqlx = sqlx.bind(color.trim());
    }
    sqlx = sqlx.bind(id);
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(category) => match category {
            Some(category) => Ok(category),
            None => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) if is_unique_violation(&e) => {
            Err(CategoriesApiError::CategoryAlreadyExists.value())
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_category_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM categories WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(CategoriesApiError::CategoryNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Gives an account without categories the default starter set.
pub async fn seed_default_categories(user_id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query_scalar::<_, bool>(
        "
        SELECT EXISTS (SELECT 1 FROM categories WHERE user_id = $1)
        ",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await;

    match sqlx_result {
        Ok(true) => Ok(()),
        Ok(false) => {
            let categories = insert_categories(Category::defaults_for(user_id), pool).await?;
            tracing::info!("seeded {} categories for user {}", categories.len(), user_id);
            Ok(())
        }
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
