//! Quote persistence on SQLite.
//!
//! One table, append-only:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS cotacoes (id INTEGER PRIMARY KEY, cotacao TEXT)
//! ```
//!
//! The schema is created once when the store is opened. Each insert is bounded
//! by its own budget and runs in a single-statement transaction, so an insert
//! abandoned at its deadline is rolled back instead of landing later. COMMIT is
//! only issued while the budget still has time left. A COMMIT already handed to
//! the SQLite worker runs to completion even if the deadline passes meanwhile,
//! so in that narrow window the caller sees `Timeout` while the row is stored.
use std::path::Path;
use std::time::Duration;

use log::info;
use quote_common::{Quote, QuoteError, Result, Scope};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS cotacoes (id INTEGER PRIMARY KEY, cotacao TEXT)";
const INSERT_QUOTE: &str = "INSERT INTO cotacoes (cotacao) VALUES (?)";
const SELECT_QUOTES: &str = "SELECT id, cotacao FROM cotacoes ORDER BY id";

/// A persisted quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    pub id: i64,
    pub value: Quote,
}

/// Pooled handle to the quote database, shared by all request handlers.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    budget: Duration,
}

fn storage_error(err: sqlx::Error) -> QuoteError {
    QuoteError::Storage(err.to_string())
}

impl SqliteStore {
    /// Open (creating if missing) the database at `path` and ensure the schema exists.
    pub async fn open(path: &Path, budget: Duration) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(storage_error)?;
        info!("Quote database ready at {}", path.display());

        Ok(Self { pool, budget })
    }

    /// Append one record under a child of `scope` and return its id.
    pub async fn insert(&self, scope: &Scope, quote: &Quote) -> Result<i64> {
        let scope = scope.child(self.budget);
        scope
            .run(async {
                let mut tx = self.pool.begin().await.map_err(storage_error)?;
                let done = sqlx::query(INSERT_QUOTE)
                    .bind(quote.as_str())
                    .execute(&mut *tx)
                    .await
                    .map_err(storage_error)?;
                scope.ensure_live()?;
                tx.commit().await.map_err(storage_error)?;
                Ok(done.last_insert_rowid())
            })
            .await
    }

    /// All records in insertion order.
    pub async fn records(&self) -> Result<Vec<QuoteRecord>> {
        let rows = sqlx::query_as::<_, (i64, String)>(SELECT_QUOTES)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows
            .into_iter()
            .map(|(id, value)| QuoteRecord {
                id,
                value: Quote::new(value),
            })
            .collect())
    }

    /// Close every pooled connection. Pending inserts fail with `Storage`.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
