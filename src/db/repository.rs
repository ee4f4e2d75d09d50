//! Signup store backed by SQLite.
//!
//! Handlers acquire one [`SignupStore`] per request. It holds a single pooled
//! connection, which goes back to the pool when the handle is dropped.

use sqlx::pool::PoolConnection;
use sqlx::{Row, Sqlite, SqlitePool};

use crate::errors::AppError;
use crate::models::{Level, NewSignup, Player, Signup};

/// Owner of the connection pool.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Check out a request-scoped store handle.
    pub async fn acquire(&self) -> Result<SignupStore, AppError> {
        let conn = self.pool.acquire().await?;
        Ok(SignupStore { conn })
    }
}

/// Store handle bound to one pooled connection.
pub struct SignupStore {
    conn: PoolConnection<Sqlite>,
}

impl SignupStore {
    /// Players of one level in join order.
    pub async fn list_by_level(&mut self, level: Level) -> Result<Vec<Player>, AppError> {
        let rows = sqlx::query(
            "SELECT id, first_name, last_name FROM signups WHERE level = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(level.as_str())
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    /// Insert a validated signup and return its id.
    pub async fn insert(&mut self, signup: &NewSignup) -> Result<i64, AppError> {
        let result =
            sqlx::query("INSERT INTO signups (first_name, last_name, level) VALUES (?, ?, ?)")
                .bind(&signup.first_name)
                .bind(&signup.last_name)
                .bind(signup.level.as_str())
                .execute(&mut *self.conn)
                .await?;

        Ok(result.last_insert_rowid())
    }

    /// Get a signup by ID.
    pub async fn get(&mut self, id: i64) -> Result<Option<Signup>, AppError> {
        let row = sqlx::query(
            "SELECT id, first_name, last_name, level, created_at FROM signups WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        row.as_ref().map(signup_from_row).transpose()
    }

    /// Remove every signup. Returns the number of deleted rows.
    pub async fn delete_all(&mut self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM signups")
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }
}

// Helper functions for row conversion

fn player_from_row(row: &sqlx::sqlite::SqliteRow) -> Player {
    let first_name: String = row.get("first_name");
    let last_name: String = row.get("last_name");
    Player {
        id: row.get("id"),
        name: format!("{} {}", first_name, last_name),
    }
}

fn signup_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Signup, AppError> {
    let level: String = row.get("level");
    let level = Level::parse(&level)
        .ok_or_else(|| AppError::Internal(format!("Unknown level {:?} in database", level)))?;

    Ok(Signup {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        level,
        created_at: row.get("created_at"),
    })
}
