use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::ProfileDefaults;
use crate::profiles::repo_types::{Profile, ProfileRow};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>>;

    /// Create the profile from `defaults`; returns the existing one untouched
    /// if the user already has a profile.
    async fn create_default(
        &self,
        user_id: Uuid,
        defaults: &ProfileDefaults,
    ) -> anyhow::Result<Profile>;

    async fn save(&self, profile: &Profile) -> anyhow::Result<Profile>;
}

#[derive(Clone)]
pub struct PgProfileRepository {
    db: PgPool,
}

impl PgProfileRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

const PROFILE_COLUMNS: &str = "user_id, age, gender, height, current_weight, target_weight, \
                               activity_level, goal, updated_at";

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn get_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .context("select profile")?;
        Ok(row.map(Profile::from))
    }

    async fn create_default(
        &self,
        user_id: Uuid,
        defaults: &ProfileDefaults,
    ) -> anyhow::Result<Profile> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            INSERT INTO profiles (user_id, age, gender, height, current_weight,
                                  target_weight, activity_level, goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(i32::try_from(defaults.age).unwrap_or(i32::MAX))
        .bind(defaults.gender.as_key())
        .bind(defaults.height)
        .bind(defaults.current_weight)
        .bind(defaults.target_weight)
        .bind(defaults.activity_level.as_key())
        .bind(defaults.goal.as_key())
        .fetch_one(&self.db)
        .await
        .context("insert default profile")?;
        Ok(row.into())
    }

    async fn save(&self, p: &Profile) -> anyhow::Result<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(&format!(
            r#"
            INSERT INTO profiles (user_id, age, gender, height, current_weight,
                                  target_weight, activity_level, goal)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id) DO UPDATE SET
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                height = EXCLUDED.height,
                current_weight = EXCLUDED.current_weight,
                target_weight = EXCLUDED.target_weight,
                activity_level = EXCLUDED.activity_level,
                goal = EXCLUDED.goal,
                updated_at = now()
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(p.user_id)
        .bind(i32::try_from(p.age).unwrap_or(i32::MAX))
        .bind(p.gender.as_key())
        .bind(p.height)
        .bind(p.current_weight)
        .bind(p.target_weight)
        .bind(p.activity_level.as_key())
        .bind(p.goal.as_key())
        .fetch_one(&self.db)
        .await
        .context("upsert profile")?;
        Ok(row.into())
    }
}
