//! Comment Store
//!
//! SQLite persistence for comment records through `sqlx`. Records keep the
//! order in which they were inserted; `list_all` returns them in that order.
//! There are no transactions across calls, so every operation is written to
//! be safe when interleaved with the same operation from another request.

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Comment, CommentDraft, CommentPatch, DurableId};

/// Maximum pooled connections for file-backed stores
const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS comments (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    author TEXT,
    text TEXT,
    created_at TEXT NOT NULL
)
"#;

/// Errors raised by the comment store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The targeted comment does not exist
    #[error("comment {0} not found")]
    NotFound(DurableId),

    /// The database rejected or failed the operation
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handle to the comment collection
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct CommentStore {
    pool: SqlitePool,
}

impl CommentStore {
    /// Open (or create) a file-backed store
    ///
    /// `database_url` is a sqlx SQLite URL such as `sqlite://comments.db`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    /// Open a private in-memory store
    ///
    /// Each SQLite memory connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Persist a new comment and assign its durable id
    pub async fn create(&self, draft: CommentDraft) -> Result<Comment, StoreError> {
        let id = DurableId::new(Uuid::new_v4().to_string());

        sqlx::query("INSERT INTO comments (id, author, text, created_at) VALUES (?, ?, ?, ?)")
            .bind(id.as_str())
            .bind(draft.author.as_deref())
            .bind(draft.text.as_deref())
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        tracing::debug!("Stored comment {}", id);

        Ok(Comment {
            id,
            author: draft.author,
            text: draft.text,
        })
    }

    /// Every stored comment, oldest first
    pub async fn list_all(&self) -> Result<Vec<Comment>, StoreError> {
        let rows: Vec<(String, Option<String>, Option<String>)> =
            sqlx::query_as("SELECT id, author, text FROM comments ORDER BY seq")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(id, author, text)| Comment {
                id: DurableId::new(id),
                author,
                text,
            })
            .collect())
    }

    /// Apply a sparse patch
    ///
    /// Fields that are `None` keep their stored value; `Some("")` stores an
    /// empty string.
    pub async fn update_by_id(&self, id: &DurableId, patch: CommentPatch) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE comments SET author = COALESCE(?, author), text = COALESCE(?, text) WHERE id = ?",
        )
        .bind(patch.author.as_deref())
        .bind(patch.text.as_deref())
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }

    /// Remove a comment, reporting whether it existed
    pub async fn delete_by_id(&self, id: &DurableId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Close the pool; later operations fail with a database error
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    async fn store() -> CommentStore {
        CommentStore::in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = store().await;
        let first = store.create(CommentDraft::new("Ann", "first")).await.unwrap();
        let second = store.create(CommentDraft::new("Bo", "second")).await.unwrap();
        let third = store.create(CommentDraft::new("Cy", "third")).await.unwrap();

        let listed = store.list_all().await.unwrap();
        assert_eq!(listed, vec![first, second, third]);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = store().await;
        let a = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();
        let b = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_allows_missing_fields() {
        let store = store().await;
        let created = store.create(CommentDraft::default()).await.unwrap();
        assert_eq!(created.author, None);
        assert_eq!(created.text, None);
        assert_eq!(store.list_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_sparse_patch_changes_only_given_field() {
        let store = store().await;
        let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();

        store
            .update_by_id(&created.id, CommentPatch::new().author("Bo"))
            .await
            .unwrap();

        let listed = store.list_all().await.unwrap();
        assert_eq!(listed[0].author.as_deref(), Some("Bo"));
        assert_eq!(listed[0].text.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_sparse_patch_explicit_empty_text() {
        let store = store().await;
        let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();

        store
            .update_by_id(&created.id, CommentPatch::new().text(""))
            .await
            .unwrap();

        let listed = store.list_all().await.unwrap();
        assert_eq!(listed[0].author.as_deref(), Some("Ann"));
        assert_eq!(listed[0].text.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_empty_patch_on_existing_comment_is_ok() {
        let store = store().await;
        let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();
        store.update_by_id(&created.id, CommentPatch::new()).await.unwrap();
        assert_eq!(store.list_all().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let store = store().await;
        let missing = DurableId::new("missing");
        let err = store
            .update_by_id(&missing, CommentPatch::new().text("x"))
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::NotFound(id) if id == missing);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = store().await;
        let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();

        assert!(store.delete_by_id(&created.id).await.unwrap());
        assert!(!store.delete_by_id(&created.id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_deletes_both_resolve() {
        let store = store().await;
        let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();

        let (a, b) = tokio::join!(
            store.delete_by_id(&created.id),
            store.delete_by_id(&created.id)
        );
        let outcomes = [a.unwrap(), b.unwrap()];
        assert_eq!(outcomes.iter().filter(|deleted| **deleted).count(), 1);
    }

    #[tokio::test]
    async fn test_closed_store_reports_database_error() {
        let store = store().await;
        store.close().await;
        assert_matches!(store.list_all().await, Err(StoreError::Database(_)));
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("comments.db").display());

        let created = {
            let store = CommentStore::connect(&url).await.unwrap();
            let created = store.create(CommentDraft::new("Ann", "hi")).await.unwrap();
            store.close().await;
            created
        };

        let reopened = CommentStore::connect(&url).await.unwrap();
        assert_eq!(reopened.list_all().await.unwrap(), vec![created]);
    }
}
