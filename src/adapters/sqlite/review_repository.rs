//! SQLite implementation of ReviewRepository.
//!
//! Persists Review records to the `reviews` table.

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::domain::foundation::{ContactId, ReviewId, Timestamp, ValidationError};
use crate::domain::review::{Review, ReviewDraft};
use crate::ports::{ReviewRepository, StorageError};

/// SQLite implementation of ReviewRepository.
#[derive(Clone)]
pub struct SqliteReviewRepository {
    pool: SqlitePool,
}

impl SqliteReviewRepository {
    /// Creates a new SqliteReviewRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for SqliteReviewRepository {
    async fn create(&self, draft: ReviewDraft) -> Result<Review, StorageError> {
        // Stored with fixed microsecond precision so text order is time order.
        let created_at = Timestamp::from_datetime(Utc::now().trunc_subsecs(6));

        let result = sqlx::query(
            r#"
            INSERT INTO reviews (
                contact_number, user_name, product_name, review_text, created_at
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(draft.contact_number().as_str())
        .bind(draft.user_name())
        .bind(draft.product_name())
        .bind(draft.review_text())
        .bind(format_timestamp(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert review", e))?;

        let id = ReviewId::from_i64(result.last_insert_rowid());
        Ok(Review::from_draft(id, draft, created_at))
    }

    async fn list(&self) -> Result<Vec<Review>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, contact_number, user_name, product_name, review_text, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("fetch reviews", e))?;

        rows.into_iter().map(row_to_review).collect()
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ping database", e))?;
        Ok(())
    }
}

fn format_timestamp(ts: &Timestamp) -> String {
    ts.as_datetime()
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string()
}

fn parse_timestamp(raw: &str) -> Result<Timestamp, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Timestamp::from_datetime(dt.with_timezone(&Utc)))
        .map_err(|e| StorageError::Database(format!("Invalid created_at '{}': {}", raw, e)))
}

fn row_to_review(row: SqliteRow) -> Result<Review, StorageError> {
    let column = |e: sqlx::Error| map_sqlx_error("read review row", e);

    let id: i64 = row.try_get("id").map_err(column)?;
    let contact_number: String = row.try_get("contact_number").map_err(column)?;
    let user_name: String = row.try_get("user_name").map_err(column)?;
    let product_name: String = row.try_get("product_name").map_err(column)?;
    let review_text: String = row.try_get("review_text").map_err(column)?;
    let created_at: String = row.try_get("created_at").map_err(column)?;

    let invalid =
        |e: ValidationError| StorageError::Database(format!("Invalid review row {}: {}", id, e));
    let contact = ContactId::new(contact_number).map_err(invalid)?;
    let draft =
        ReviewDraft::new(contact, user_name, product_name, review_text).map_err(invalid)?;

    Ok(Review::from_draft(
        ReviewId::from_i64(id),
        draft,
        parse_timestamp(&created_at)?,
    ))
}

fn map_sqlx_error(action: &str, err: sqlx::Error) -> StorageError {
    match err {
        sqlx::Error::PoolTimedOut => {
            StorageError::Unavailable(format!("Failed to {}: connection pool timed out", action))
        }
        sqlx::Error::PoolClosed => {
            StorageError::Unavailable(format!("Failed to {}: connection pool closed", action))
        }
        other => StorageError::Database(format!("Failed to {}: {}", action, other)),
    }
}
