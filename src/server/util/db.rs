use sea_orm::{DbErr, SqlErr};

/// Whether the database rejected a write because of a unique constraint or index
///
/// Recognizes both the PostgreSQL & SQLite error codes through SeaORM's [`SqlErr`].
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
