//! Database repositories.

pub mod notification;

pub use notification::{NotificationCreate, NotificationRepository};

use openpledge_common::AppError;
use sea_orm::{DbErr, SqlErr};

/// Map a database error to the application error surface.
///
/// Constraint violations keep their own error kinds so callers can tell
/// a bad reference apart from an unavailable engine.
pub(crate) fn map_db_err(err: DbErr) -> AppError {
    map_sql_err(err.sql_err(), &err)
}

fn map_sql_err(sql_err: Option<SqlErr>, err: &DbErr) -> AppError {
    match sql_err {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => AppError::ForeignKeyViolation(msg),
        Some(SqlErr::UniqueConstraintViolation(msg)) => AppError::Conflict(msg),
        _ => AppError::Database(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_key_violation_keeps_its_kind() {
        let err = DbErr::Custom("insert failed".to_string());
        let mapped = map_sql_err(
            Some(SqlErr::ForeignKeyConstraintViolation(
                "fk_notifications_pledge".to_string(),
            )),
            &err,
        );

        match mapped {
            AppError::ForeignKeyViolation(msg) => assert_eq!(msg, "fk_notifications_pledge"),
            other => panic!("expected ForeignKeyViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let err = DbErr::Custom("insert failed".to_string());
        let mapped = map_sql_err(
            Some(SqlErr::UniqueConstraintViolation("pk".to_string())),
            &err,
        );

        assert!(matches!(mapped, AppError::Conflict(_)));
    }

    #[test]
    fn test_other_errors_map_to_database() {
        let err = DbErr::Custom("connection reset".to_string());
        let mapped = map_sql_err(None, &err);

        match mapped {
            AppError::Database(msg) => assert!(msg.contains("connection reset")),
            other => panic!("expected Database, got {other:?}"),
        }
    }
}
