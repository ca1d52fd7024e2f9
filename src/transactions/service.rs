use axum::http::StatusCode;
use chrono::Utc;
use sqlx::{postgres::PgArguments, query::QueryAs, PgPool, Postgres};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
};

use super::{
    dtos::{
        create_transaction_dto::CreateTransactionDto,
        edit_transaction_dto::EditTransactionDto,
        get_transactions_filter_dto::{GetTransactionsFilterDto, TransactionsFilter},
    },
    enums::{stats_period::StatsPeriod, transaction_type::TransactionType},
    errors::TransactionsApiError,
    models::{
        transaction::Transaction,
        transaction_stat::{StatsRow, TransactionStat},
        transactions_page::{CategoryBreakdown, TransactionsPage, TypeTotal},
    },
};

pub static MAX_BULK_TRANSACTIONS: usize = 500;

pub async fn create_transaction(
    dto: &CreateTransactionDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let mut transactions = insert_transactions(vec![Transaction::new(dto, claims)], pool).await?;

    match transactions.pop() {
        Some(transaction) => Ok(transaction),
        None => Err(DefaultApiError::InternalServerError.value()),
    }
}

pub async fn create_bulk_transactions(
    dtos: &[CreateTransactionDto],
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<Transaction>, ApiError> {
    if dtos.is_empty() {
        return Err(TransactionsApiError::EmptyBulk.value());
    }
    if dtos.len() > MAX_BULK_TRANSACTIONS {
        return Err(TransactionsApiError::BulkTooLarge.value());
    }

    let transactions = dtos
        .iter()
        .map(|dto| Transaction::new(dto, claims))
        .collect();

    insert_transactions(transactions, pool).await
}

/// Multi-row `INSERT` with one placeholder group per transaction.
fn insert_transactions_sql(count: usize) -> String {
    let num_properties: usize = 11;

    let mut sql = "INSERT INTO transactions (\
        id, user_id, party, category, transaction_type, currency, \
        amount, description, payment_method, updated_at, created_at\
    ) "
    .to_string();

    let mut index: usize = 1;
    for i in 0..count {
        if i == 0 {
            sql.push_str("VALUES (");
        } else {
            sql.push_str(", (");
        }

        for j in 0..num_properties {
            sql.push_str(&["$", &index.to_string()].concat());
            index += 1;

            if j != num_properties - 1 {
                sql.push_str(", ");
            }
        }

        sql.push_str(")");
    }

    sql
}

/// Inserts every row in a single statement.
async fn insert_transactions(
    transactions: Vec<Transaction>,
    pool: &PgPool,
) -> Result<Vec<Transaction>, ApiError> {
    let sql = insert_transactions_sql(transactions.len());

    let mut sqlx = sqlx::query(&sql);

    for t in &transactions {
        sqlx = sqlx.bind(&t.id);
        sqlx = sqlx.bind(&t.user_id);
        sqlx = sqlx.bind(&t.party);
        sqlx = sqlx.bind(&t.category);
        sqlx = sqlx.bind(&t.transaction_type);
        sqlx = sqlx.bind(&t.currency);
        sqlx = sqlx.bind(t.amount);
        sqlx = sqlx.bind(&t.description);
        sqlx = sqlx.bind(&t.payment_method);
        sqlx = sqlx.bind(t.updated_at);
        sqlx = sqlx.bind(t.created_at);
    }

    match sqlx.execute(pool).await {
        Ok(_) => Ok(transactions),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

fn bind_filter<'q, O>(
    mut sqlx: QueryAs<'q, Postgres, O, PgArguments>,
    filter: &'q TransactionsFilter,
    include_type: bool,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    sqlx = sqlx.bind(&filter.user_id);

    if let Some(category) = &filter.category {
        sqlx = sqlx.bind(category);
    }
    if include_type {
        if let Some(transaction_type) = &filter.transaction_type {
            sqlx = sqlx.bind(transaction_type.value());
        }
    }
    if let Some(party_pattern) = &filter.party_pattern {
        sqlx = sqlx.bind(party_pattern);
    }
    if let Some(amount) = filter.amount {
        sqlx = sqlx.bind(amount);
    }
    if let Some(payment_methods) = &filter.payment_methods {
        sqlx = sqlx.bind(payment_methods);
    }
    if let Some(from) = filter.from {
        sqlx = sqlx.bind(from);
    }
    if let Some(to) = filter.to {
        sqlx = sqlx.bind(to);
    }

    sqlx
}

pub async fn get_transactions(
    dto: &GetTransactionsFilterDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<TransactionsPage, ApiError> {
    let filter = dto.to_filter(claims)?;

    let page_sql = filter.page_sql();
    let totals_sql = filter.totals_sql();
    let income_sql = filter.breakdown_sql(TransactionType::Income);
    let expenditure_sql = filter.breakdown_sql(TransactionType::Expenditure);

    let results = bind_filter(sqlx::query_as::<_, Transaction>(&page_sql), &filter, true)
        .fetch_all(pool);
    let totals =
        bind_filter(sqlx::query_as::<_, TypeTotal>(&totals_sql), &filter, true).fetch_all(pool);
    let income_breakdown = bind_filter(
        sqlx::query_as::<_, CategoryBreakdown>(&income_sql),
        &filter,
        false,
    )
    .fetch_all(pool);
    let expenditure_breakdown = bind_filter(
        sqlx::query_as::<_, CategoryBreakdown>(&expenditure_sql),
        &filter,
        false,
    )
    .fetch_all(pool);

    match futures::try_join!(results, totals, income_breakdown, expenditure_breakdown) {
        Ok((results, totals, income_breakdown, expenditure_breakdown)) => Ok(TransactionsPage::new(
            results,
            filter.page,
            filter.limit,
            &totals,
            income_breakdown,
            expenditure_breakdown,
        )),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let sqlx_result = sqlx::query_as::<_, Transaction>(
        "
        SELECT * FROM transactions WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn edit_transaction_by_id(
    id: &str,
    dto: &EditTransactionDto,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Transaction, ApiError> {
    let sql = dto.to_sql()?;

    let mut sqlx = sqlx::query_as::<_, Transaction>(&sql);

    if let Some(party) = &dto.party {
        sqlx = sqlx.bind(party.trim());
    }
    if let Some(category) = &dto.category {
        sqlx = sqlx.bind(category.trim());
    }
    if let Some(transaction_type) = &dto.transaction_type {
        sqlx = sqlx.bind(transaction_type.value());
    }
    if let Some(currency) = &dto.currency {
        sqlx = sqlx.bind(currency.trim().to_uppercase());
    }
    if let Some(amount) = dto.amount {
        sqlx = sqlx.bind(amount);
    }
    if let Some(payment_method) = &dto.payment_method {
        sqlx = sqlx.bind(payment_method.value());
    }
    if let Some(description) = &dto.description {
        sqlx = sqlx.bind(description);
    }
    if let Some(created_at) = &dto.created_at {
        let Some(created_at) = time::parse_iso_to_secs(created_at) else {
            return Err(ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "created_at must be an ISO 8601 date.".to_string(),
            });
        };
        sqlx = sqlx.bind(created_at);
    }
    sqlx = sqlx.bind(id);
    sqlx = sqlx.bind(&claims.id);

    match sqlx.fetch_optional(pool).await {
        Ok(transaction) => match transaction {
            Some(transaction) => Ok(transaction),
            None => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn delete_transaction_by_id(
    id: &str,
    claims: &Claims,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let sqlx_result = sqlx::query(
        "
        DELETE FROM transactions WHERE id = $1 AND user_id = $2
        ",
    )
    .bind(id)
    .bind(&claims.id)
    .execute(pool)
    .await;

    match sqlx_result {
        Ok(result) => match result.rows_affected() > 0 {
            true => Ok(()),
            false => Err(TransactionsApiError::TransactionNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub async fn get_transaction_stats(
    period: StatsPeriod,
    claims: &Claims,
    pool: &PgPool,
) -> Result<Vec<TransactionStat>, ApiError> {
    let window_start = period.window_start(Utc::now()).timestamp();

    let sql = period.stats_sql();

    let sqlx_result = sqlx::query_as::<_, StatsRow>(&sql)
        .bind(&claims.id)
        .bind(window_start)
        .fetch_all(pool)
        .await;

    match sqlx_result {
        Ok(rows) => Ok(TransactionStat::from_rows(rows)),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
