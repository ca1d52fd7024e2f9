use sqlx::error::DatabaseError;

#[non_exhaustive]
pub struct SqlStateCodes;

impl SqlStateCodes {
    pub const UNIQUE_VIOLATION: &'static str = "23505";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    db_err.code().map(|code| code.into_owned())
}

/// True when the error is a Postgres unique-constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    match get_code_from_db_err(db_err) {
        Some(code) => code == SqlStateCodes::UNIQUE_VIOLATION,
        None => false,
    }
}
