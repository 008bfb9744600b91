use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

pub mod migrator;
pub mod repositories;

use crate::models::anime::{Anime, AnimeDraft};

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if let Some(path_str) = db_url.strip_prefix("sqlite:") {
            if !path_str.starts_with(":memory:") && !path_str.is_empty() {
                if let Some(parent) = Path::new(path_str).parent() {
                    tokio::fs::create_dir_all(parent).await.ok();
                }
                if !Path::new(path_str).exists() {
                    std::fs::File::create(path_str)?;
                }
            }
        }

        // A pooled ":memory:" database is one database per connection; cap
        // the pool so every statement sees the same data.
        let (max_connections, min_connections) = if db_url.contains(":memory:") {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        // Schema creation is not fatal: on failure the service still comes
        // up and every statement against the missing table errors per
        // request instead.
        match migrator::Migrator::up(&conn, None).await {
            Ok(()) => info!(
                "Database connected & schema ensured (pool: {min_connections}-{max_connections})"
            ),
            Err(e) => error!("Failed to ensure schema: {e}"),
        }

        Ok(Self { conn })
    }

    fn anime_repo(&self) -> repositories::anime::AnimeRepository {
        repositories::anime::AnimeRepository::new(self.conn.clone())
    }

    pub async fn list_animes(&self) -> Result<Vec<Anime>> {
        self.anime_repo().list_all().await
    }

    pub async fn add_anime(&self, draft: &AnimeDraft) -> Result<Anime> {
        self.anime_repo().insert(draft).await
    }

    pub async fn overwrite_anime(&self, id: i32, draft: &AnimeDraft) -> Result<()> {
        self.anime_repo().overwrite(id, draft).await
    }

    pub async fn remove_anime(&self, id: i32) -> Result<()> {
        self.anime_repo().remove(id).await
    }

    pub async fn seed_samples(&self) -> Result<u64> {
        self.anime_repo().seed_samples().await
    }
}
