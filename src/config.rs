use crate::goals::calculator::DEFAULT_DURATION_DAYS;
use crate::profiles::repo_types::{ActivityLevel, Gender, Goal};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub referer: String,
}

/// Values a profile starts with before the user edits it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDefaults {
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl ProfileDefaults {
    /// Profile created alongside a new account.
    pub const fn registration() -> Self {
        Self {
            age: 25,
            gender: Gender::Male,
            height: 170.0,
            current_weight: 70.0,
            target_weight: 60.0,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    /// Profile created lazily for an account that somehow has none.
    pub const fn first_visit() -> Self {
        Self {
            target_weight: 65.0,
            ..Self::registration()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileDefaultsConfig {
    pub registration: ProfileDefaults,
    pub first_visit: ProfileDefaults,
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            registration: ProfileDefaults::registration(),
            first_visit: ProfileDefaults::first_visit(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub openrouter: OpenRouterConfig,
    pub profile_defaults: ProfileDefaultsConfig,
    pub goal_duration_days: i64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse_or(key: &str, default: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: env_or("JWT_ISSUER", "caltrack"),
            audience: env_or("JWT_AUDIENCE", "caltrack-users"),
            ttl_minutes: env_parse_or("JWT_TTL_MINUTES", 60),
            refresh_ttl_minutes: env_parse_or("JWT_REFRESH_TTL_MINUTES", 60 * 24 * 14),
        };
        let openrouter = OpenRouterConfig {
            api_key: std::env::var("OPENROUTER_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: env_or("OPENROUTER_BASE_URL", "https://openrouter.ai/api/v1"),
            model: env_or("OPENROUTER_MODEL", "mistralai/mixtral-8x7b-instruct"),
            referer: env_or("OPENROUTER_REFERER", "http://localhost"),
        };
        Ok(Self {
            database_url,
            jwt,
            openrouter,
            profile_defaults: ProfileDefaultsConfig::default(),
            goal_duration_days: env_parse_or("GOAL_DURATION_DAYS", DEFAULT_DURATION_DAYS),
        })
    }
}
