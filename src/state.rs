use std::sync::Arc;

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::auth::repo::{PgUserRepository, UserRepository};
use crate::config::AppConfig;
use crate::estimation::gateway::{CalorieEstimationGateway, OpenRouterClient};
use crate::food_log::repo::{FoodCatalog, FoodLogRepository, PgFoodCatalog, PgFoodLogRepository};
use crate::profiles::repo::{PgProfileRepository, ProfileRepository};
use crate::weight_log::repo::{PgWeightLogRepository, WeightLogRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub food_logs: Arc<dyn FoodLogRepository>,
    pub foods: Arc<dyn FoodCatalog>,
    pub weights: Arc<dyn WeightLogRepository>,
    pub estimator: Arc<dyn CalorieEstimationGateway>,
}

impl AppState {
    /// Connect to Postgres, run migrations and wire the real collaborators.
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;

        if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
            tracing::warn!(error = %e, "migration failed; continuing");
        }

        let estimator = Arc::new(OpenRouterClient::new(config.openrouter.clone()))
            as Arc<dyn CalorieEstimationGateway>;

        Ok(Self::from_pool(db, config, estimator))
    }

    pub fn from_pool(
        db: PgPool,
        config: Arc<AppConfig>,
        estimator: Arc<dyn CalorieEstimationGateway>,
    ) -> Self {
        Self {
            config,
            users: Arc::new(PgUserRepository::new(db.clone())),
            profiles: Arc::new(PgProfileRepository::new(db.clone())),
            food_logs: Arc::new(PgFoodLogRepository::new(db.clone())),
            foods: Arc::new(PgFoodCatalog::new(db.clone())),
            weights: Arc::new(PgWeightLogRepository::new(db)),
            estimator,
        }
    }
}
