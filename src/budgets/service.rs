use chrono::Utc;
use sqlx::{postgres::PgArguments, query::QueryAs, PgPool, Postgres};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::sqlx::is_unique_violation},
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{
        create_budget_dto::CreateBudgetDto, edit_budget_dto::EditBudgetDto,
        get_budgets_filter_dto::GetBudgetsFilterDto,
    },
    enums::budget_period::BudgetPeriod,
    errors::BudgetsApiError,
    models::{
        budget::Budget,
        budget_with_spent::{BudgetSpentRow, BudgetWithSpent, SELECT_BUDGETS_WITH_SPENT_SQL},
        budgets_summary::BudgetsSummary,
    },
};

/// Binds the owner and the current weekly, monthly and yearly windows.
fn bind_windows<'q, O>(
    mut sqlx: QueryAs<'q, Postgres, O, PgArguments>,
    claims: &'q Claims,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    let now = Utc::now();

    sqlx = sqlx.bind(&claims.id);

    for period in BudgetPeriod::ALL {
        let window = period.current_window(now);
        sqlx = sqlx.bind(window.start).bind(window.end);
    }

    sqlx
}

pub async fn create_budget(
    dto: &CreateBudgetDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<BudgetWithSpent, ApiError> {
    let budget = Budget::new(dto, claims);

    let sqlx_result = sqlx::query(
        "
        INSERT INTO budgets (
            id, user_id, category, amount_limit, period, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(&budget.id)
    .bind(&budget.user_id)
    .bind(&budget.category)
    .bind(budget.amount_limit)
    .bind(&budget.period)
    .bind(budget.updated_at)
    .bind(budget.created_at)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(_) => get_budget_by_id(&budget.id, claims, pool).await,
        Err(e) if is_unique_violation(&e) => Err(BudgetsApiError::BudgetAlreadyExists.value()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_budgets(
    dto: &GetBudgetsFilterDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<BudgetWithSpent>, ApiError> {
    let sql = dto.to_sql();

    let mut sqlx = bind_windows(sqlx::query_as::<_, BudgetSpentRow>(&sql), claims);

    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category.trim());
    }
    if let Some(period) = &dto.period {
        sqlx = sqlx.bind(period.value());
    }

    match sqlx.fetch_all(pool).await {
        Ok(rows) => Ok(rows.into_iter().map(BudgetWithSpent::from).collect()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_budget_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<BudgetWithSpent, ApiError> {
    let sql = [SELECT_BUDGETS_WITH_SPENT_SQL, " AND budgets.id = $8"].concat();

    let sqlx_result = bind_windows(sqlx::query_as::<_, BudgetSpentRow>(&sql), claims)
        .bind(id)
        .fetch_optional(pool)
        .await;

    match sqlx_result {
        Ok(row) => match row {
            Some(row) => Ok(BudgetWithSpent::from(row)),
            None => Err(BudgetsApiError::BudgetNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_budget_by_id(
    id: &str,
    dto: &EditBudgetDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<BudgetWithSpent, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Budget>(&sql);

    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category.trim());
    }
    if let Some(amount_limit) = dto.amount_limit {
        sqlx = sqlx.bind(amount_limit);
    }
    if let Some(period) = &dto.period {
        sqlx = sqlx.bind(period.value());
    }
    sqlx = sqlx.bind(id);
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(budget) => match budget {
            Some(budget) => get_budget_by_id(&budget.id, claims, pool).await,
            None => Err(BudgetsApiError::BudgetNotFound.value()),
        },
        Err(e) if is_unique_violation(&e) => Err(BudgetsApiError::BudgetAlreadyExists.value()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_budget_by_id(id: &str, claims: &Claims, pool: &PgPool) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM budgets WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(BudgetsApiError::BudgetNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_budgets_summary(claims: &Claims, pool: &PgPool) -> Result<BudgetsSummary, ApiError> {
    let budgets = get_budgets(&GetBudgetsFilterDto::default(), claims, pool).await?;

    Ok(BudgetsSummary::from_budgets(&budgets))
}
