/**
 * Pattern Store
 *
 * Database operations for the patterns table. `pattern_data` is stored
 * as JSONB and treated as opaque: updates replace it whole, there is no
 * partial merge.
 */

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;

/// A pattern row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pattern {
    /// Store-assigned id.
    pub id: i32,
    pub title: String,
    /// Opaque sequencer data (tempo plus note events).
    pub pattern_data: Value,
    /// Owner; set once at creation, never reassigned.
    pub user_id: i32,
}

/// Insert a new pattern owned by `user_id` and return the created row.
pub async fn insert_pattern(
    pool: &PgPool,
    title: &str,
    pattern_data: &Value,
    user_id: i32,
) -> Result<Pattern, sqlx::Error> {
    sqlx::query_as::<_, Pattern>(
        r#"
        INSERT INTO patterns (title, pattern_data, user_id)
        VALUES ($1, $2, $3)
        RETURNING id, title, pattern_data, user_id
        "#,
    )
    .bind(title)
    .bind(pattern_data)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Load a pattern by id.
pub async fn get_pattern_by_id(
    pool: &PgPool,
    id: i32,
) -> Result<Option<Pattern>, sqlx::Error> {
    sqlx::query_as::<_, Pattern>(
        r#"
        SELECT id, title, pattern_data, user_id
        FROM patterns
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// All patterns owned by a user, in creation (id) order.
pub async fn get_patterns_by_user(
    pool: &PgPool,
    user_id: i32,
) -> Result<Vec<Pattern>, sqlx::Error> {
    sqlx::query_as::<_, Pattern>(
        r#"
        SELECT id, title, pattern_data, user_id
        FROM patterns
        WHERE user_id = $1
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Write the supplied fields of a pattern. `None` leaves a field
/// untouched; `pattern_data` is replaced whole when supplied.
pub async fn update_pattern(
    pool: &PgPool,
    id: i32,
    title: Option<&str>,
    pattern_data: Option<&Value>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE patterns
        SET title = COALESCE($1, title),
            pattern_data = COALESCE($2, pattern_data)
        WHERE id = $3
        "#,
    )
    .bind(title)
    .bind(pattern_data)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a pattern row.
pub async fn remove_pattern(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM patterns WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
