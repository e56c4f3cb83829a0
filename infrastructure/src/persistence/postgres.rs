//! PostgreSQL goal store
//!
//! Implements the [`GoalStore`] port on top of a `sqlx` connection pool.
//! The schema lives in `infrastructure/migrations/` and is embedded into the
//! binary at compile time.

use crate::config::FileDatabaseConfig;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inorbit_application::{GoalStore, GoalStoreError};
use inorbit_domain::{Goal, GoalId, GoalTitle, WeeklyFrequency};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Row shape of the `goals` table
#[derive(Debug, Clone, sqlx::FromRow)]
struct GoalRow {
    id: Uuid,
    title: String,
    desired_weekly_frequency: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<GoalRow> for Goal {
    type Error = GoalStoreError;

    fn try_from(row: GoalRow) -> Result<Self, Self::Error> {
        let title =
            GoalTitle::parse(row.title).map_err(|e| GoalStoreError::Corrupt(e.to_string()))?;
        let desired_weekly_frequency = WeeklyFrequency::try_from(row.desired_weekly_frequency)
            .map_err(|e| GoalStoreError::Corrupt(e.to_string()))?;

        Ok(Goal {
            id: GoalId::from_uuid(row.id),
            title,
            desired_weekly_frequency,
            created_at: row.created_at,
        })
    }
}

fn map_sqlx_error(error: sqlx::Error) -> GoalStoreError {
    match error {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Configuration(_) => GoalStoreError::Unavailable(error.to_string()),
        other => GoalStoreError::Query(other.to_string()),
    }
}

/// Goal store backed by PostgreSQL
#[derive(Clone)]
pub struct PgGoalStore {
    pool: PgPool,
}

impl PgGoalStore {
    /// Wrap an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a connection pool against `url`
    pub async fn connect(url: &str, config: &FileDatabaseConfig) -> Result<Self, GoalStoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect(url)
            .await
            .map_err(map_sqlx_error)?;

        info!(
            "Connected to database (max {} connections)",
            config.max_connections
        );
        Ok(Self::new(pool))
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<(), GoalStoreError> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| GoalStoreError::Query(format!("migration failed: {}", e)))?;
        info!("Database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl GoalStore for PgGoalStore {
    async fn insert(&self, goal: &Goal) -> Result<(), GoalStoreError> {
        sqlx::query(
            r#"
            INSERT INTO goals (id, title, desired_weekly_frequency, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(*goal.id.as_uuid())
        .bind(goal.title.as_str())
        .bind(i32::from(goal.desired_weekly_frequency.get()))
        .bind(goal.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        debug!("Inserted goal {}", goal.id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Goal>, GoalStoreError> {
        let rows = sqlx::query_as::<_, GoalRow>(
            r#"
            SELECT id, title, desired_weekly_frequency, created_at
            FROM goals
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        rows.into_iter().map(Goal::try_from).collect()
    }
}
