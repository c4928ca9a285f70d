/**
 * User Store
 *
 * Database operations for the users table. Each function issues a single
 * statement; uniqueness of `user_name` and `email` is backed by unique
 * constraints in the schema.
 */

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A user row. `password` holds the bcrypt hash, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-assigned id, immutable.
    pub id: i32,
    /// Unique username, immutable after creation.
    pub user_name: String,
    /// Unique email address.
    pub email: String,
    /// Bcrypt password hash.
    pub password: String,
}

/// Insert a new user and return the created row.
pub async fn insert_user(
    pool: &PgPool,
    user_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (user_name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, user_name, email, password
        "#,
    )
    .bind(user_name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Look up a user by username.
pub async fn get_user_by_user_name(
    pool: &PgPool,
    user_name: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_name, email, password
        FROM users
        WHERE user_name = $1
        "#,
    )
    .bind(user_name)
    .fetch_optional(pool)
    .await
}

/// Look up a user by email.
pub async fn get_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, user_name, email, password
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Whether an error is a unique-constraint violation (SQLSTATE 23505) on
/// the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().is_some_and(|code| code.as_ref() == "23505")
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakeDbError {
        code: &'static str,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "duplicate key value violates unique constraint")
        }
    }

    impl StdError for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "duplicate key value violates unique constraint"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { code, constraint }))
    }

    #[test]
    fn test_unique_violation_matches_named_constraint() {
        let err = db_error("23505", Some("users_user_name_key"));
        assert!(is_unique_violation(&err, "users_user_name_key"));
        assert!(!is_unique_violation(&err, "users_email_key"));
    }

    #[test]
    fn test_other_sqlstate_is_not_unique_violation() {
        // Foreign-key violation carries a constraint but the wrong code.
        let err = db_error("23503", Some("patterns_user_id_fkey"));
        assert!(!is_unique_violation(&err, "patterns_user_id_fkey"));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound, "users_user_name_key"));
    }
}
