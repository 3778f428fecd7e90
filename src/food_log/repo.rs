use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::food_log::repo_types::{Food, FoodLogEntry, NewFoodLogEntry};

#[async_trait]
pub trait FoodLogRepository: Send + Sync {
    async fn create(&self, entry: NewFoodLogEntry) -> anyhow::Result<FoodLogEntry>;

    /// Entries for `user_id`, restricted to `date` when given. Newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        date: Option<Date>,
    ) -> anyhow::Result<Vec<FoodLogEntry>>;
}

#[async_trait]
pub trait FoodCatalog: Send + Sync {
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Food>>;

    /// Case-insensitive substring match on the name.
    async fn search(&self, name: &str, limit: i64) -> anyhow::Result<Vec<Food>>;
}

#[derive(Clone)]
pub struct PgFoodLogRepository {
    db: PgPool,
}

impl PgFoodLogRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodLogRepository for PgFoodLogRepository {
    async fn create(&self, e: NewFoodLogEntry) -> anyhow::Result<FoodLogEntry> {
        let row = sqlx::query_as::<_, FoodLogEntry>(
            r#"
            INSERT INTO food_logs (id, user_id, food, food_id, quantity_in_grams, calories, date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, food, food_id, quantity_in_grams, calories, date, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(e.user_id)
        .bind(&e.food)
        .bind(e.food_id)
        .bind(e.quantity_in_grams)
        .bind(e.calories)
        .bind(e.date)
        .fetch_one(&self.db)
        .await
        .context("insert food log")?;
        Ok(row)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        date: Option<Date>,
    ) -> anyhow::Result<Vec<FoodLogEntry>> {
        let rows = sqlx::query_as::<_, FoodLogEntry>(
            r#"
            SELECT id, user_id, food, food_id, quantity_in_grams, calories, date, created_at
            FROM food_logs
            WHERE user_id = $1 AND ($2::date IS NULL OR date = $2)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(&self.db)
        .await
        .context("list food logs")?;
        Ok(rows)
    }
}

#[derive(Clone)]
pub struct PgFoodCatalog {
    db: PgPool,
}

impl PgFoodCatalog {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FoodCatalog for PgFoodCatalog {
    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Food>> {
        let food = sqlx::query_as::<_, Food>(
            r#"SELECT id, name, calories_per_100g FROM foods WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .context("select food")?;
        Ok(food)
    }

    async fn search(&self, name: &str, limit: i64) -> anyhow::Result<Vec<Food>> {
        let pattern = format!(
            "%{}%",
            name.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
        );
        let foods = sqlx::query_as::<_, Food>(
            r#"
            SELECT id, name, calories_per_100g
            FROM foods
            WHERE name ILIKE $1
            ORDER BY name ASC
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.db)
        .await
        .context("search foods")?;
        Ok(foods)
    }
}
