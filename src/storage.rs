// src/storage.rs
use crate::errors::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};
use std::path::PathBuf;

/// Injected persistence for the user's prompt text. The only state this
/// application persists is one prompt string per storage key.
#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>>;
    async fn save(&self, key: &str, body: &str) -> Result<()>;
}

/// SQLite-backed prompt store.
pub struct SqlitePromptStore {
    pool: SqlitePool,
}

impl SqlitePromptStore {
    /// Opens (creating if needed) the database and runs migrations.
    ///
    /// The path comes from `DATABASE_URL` (`sqlite:...`) or defaults to a
    /// per-user data directory.
    pub async fn init() -> std::result::Result<Self, sqlx::Error> {
        let db_path = get_db_path()?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }

        let absolute_path = if db_path.is_relative() {
            std::env::current_dir()
                .map_err(sqlx::Error::Io)?
                .join(&db_path)
        } else {
            db_path.clone()
        };

        let db_url = format!("sqlite://{}?mode=rwc", absolute_path.display());
        log::info!("Opening prompt store at {}", absolute_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }
}

fn get_db_path() -> std::result::Result<PathBuf, sqlx::Error> {
    if let Ok(db_url) = std::env::var("DATABASE_URL") {
        let db_path_str = db_url.strip_prefix("sqlite:").ok_or_else(|| {
            sqlx::Error::Configuration("DATABASE_URL must start with 'sqlite:'".into())
        })?;
        return Ok(PathBuf::from(db_path_str));
    }

    let base = dirs::data_dir().ok_or_else(|| {
        sqlx::Error::Configuration("No data directory available; set DATABASE_URL".into())
    })?;
    Ok(base.join("sketchlab").join("sketchlab.db"))
}

#[async_trait]
impl PromptStore for SqlitePromptStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT body FROM prompts WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get(0)))
    }

    async fn save(&self, key: &str, body: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO prompts (key, body, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(body)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
