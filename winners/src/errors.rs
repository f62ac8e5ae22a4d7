use std::fmt;

use actix::MailboxError;
use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Storage constraint that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

impl Constraint {
    /// Classifies a diesel database error, `None` when it is not a constraint rejection.
    pub fn from_database_error(kind: &DatabaseErrorKind) -> Option<Constraint> {
        match kind {
            DatabaseErrorKind::UniqueViolation => Some(Constraint::Unique),
            DatabaseErrorKind::ForeignKeyViolation => Some(Constraint::ForeignKey),
            DatabaseErrorKind::NotNullViolation => Some(Constraint::NotNull),
            DatabaseErrorKind::CheckViolation => Some(Constraint::Check),
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Constraint::Unique => "unique",
            Constraint::ForeignKey => "foreign key",
            Constraint::NotNull => "not null",
            Constraint::Check => "check",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Fail)]
pub enum StorageError {
    #[fail(display = "{} constraint rejected the winner solution", constraint)]
    ConstraintViolation { constraint: Constraint },
    #[fail(display = "Unable to get a database connection from the pool")]
    Pool { #[cause] cause: PoolError },
    #[fail(display = "Error while querying winner solutions")]
    Query { #[cause] cause: DieselError },
    #[fail(display = "Error while applying migrations : {}", message)]
    Migration { message: String },
    #[fail(display = "Database executor unavailable")]
    Mailbox { #[cause] cause: MailboxError },
}

impl From<PoolError> for StorageError {
    fn from(cause: PoolError) -> Self {
        StorageError::Pool { cause }
    }
}

impl From<DieselError> for StorageError {
    fn from(cause: DieselError) -> Self {
        let constraint = match &cause {
            DieselError::DatabaseError(kind, _) => Constraint::from_database_error(kind),
            _ => None,
        };
        match constraint {
            Some(constraint) => StorageError::ConstraintViolation { constraint },
            None => StorageError::Query { cause },
        }
    }
}

impl From<MailboxError> for StorageError {
    fn from(cause: MailboxError) -> Self {
        StorageError::Mailbox { cause }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("constraint failed".to_string()))
    }

    #[test]
    fn test_constraint_classification() {
        assert_eq!(Constraint::from_database_error(&DatabaseErrorKind::UniqueViolation), Some(Constraint::Unique));
        assert_eq!(Constraint::from_database_error(&DatabaseErrorKind::ForeignKeyViolation), Some(Constraint::ForeignKey));
        assert_eq!(Constraint::from_database_error(&DatabaseErrorKind::NotNullViolation), Some(Constraint::NotNull));
        assert_eq!(Constraint::from_database_error(&DatabaseErrorKind::CheckViolation), Some(Constraint::Check));
        assert_eq!(Constraint::from_database_error(&DatabaseErrorKind::SerializationFailure), None);
    }

    #[test]
    fn test_diesel_error_conversion() {
        let actual: StorageError = database_error(DatabaseErrorKind::ForeignKeyViolation).into();
        assert_matches!(actual, StorageError::ConstraintViolation { constraint: Constraint::ForeignKey });

        let actual: StorageError = database_error(DatabaseErrorKind::SerializationFailure).into();
        assert_matches!(actual, StorageError::Query { .. });

        let actual: StorageError = DieselError::NotFound.into();
        assert_matches!(actual, StorageError::Query { cause: DieselError::NotFound });
    }

    #[test]
    fn test_display() {
        let error = StorageError::ConstraintViolation { constraint: Constraint::ForeignKey };
        assert_eq!(format!("{}", error), "foreign key constraint rejected the winner solution");
    }
}
