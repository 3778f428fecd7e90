use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::weight_log::repo_types::WeightLogEntry;

/// Append-only weight history.
#[async_trait]
pub trait WeightLogRepository: Send + Sync {
    async fn create(&self, user_id: Uuid, weight: f64, date: Date)
        -> anyhow::Result<WeightLogEntry>;

    /// Newest first.
    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<WeightLogEntry>>;

    async fn latest_for_user(&self, user_id: Uuid) -> anyhow::Result<Option<WeightLogEntry>>;
}

#[derive(Clone)]
pub struct PgWeightLogRepository {
    db: PgPool,
}

impl PgWeightLogRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WeightLogRepository for PgWeightLogRepository {
    async fn create(
        &self,
        user_id: Uuid,
        weight: f64,
        date: Date,
    ) -> anyhow::Result<WeightLogEntry> {
        let row = sqlx::query_as::<_, WeightLogEntry>(
            r#"
            INSERT INTO weight_logs (id, user_id, weight, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, weight, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(weight)
        .bind(date)
        .fetch_one(&self.db)
        .await
        .context("insert weight log")?;
        Ok(row)
    }

    async fn list_for_user(&self, user_id: Uuid) -> anyhow::Result<Vec<WeightLogEntry>> {
        let rows = sqlx::query_as::<_, WeightLogEntry>(
            r#"
            SELECT id, user_id, weight, date, created_at
            FROM weight_logs
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .context("list weight logs")?;
        Ok(rows)
    }

    async fn latest_for_user(&self, user_id: Uuid) -> anyhow::Result<Option<WeightLogEntry>> {
        let row = sqlx::query_as::<_, WeightLogEntry>(
            r#"
            SELECT id, user_id, weight, date, created_at
            FROM weight_logs
            WHERE user_id = $1
            ORDER BY date DESC, created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .context("latest weight log")?;
        Ok(row)
    }
}
