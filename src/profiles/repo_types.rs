use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_key(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// little or no exercise
    #[default]
    Sedentary,
    /// light exercise 1-3 days/week
    Light,
    /// 3-5 days/week
    Moderate,
    /// 6-7 days/week
    Active,
    /// intense exercise daily
    VeryActive,
}

impl ActivityLevel {
    pub fn as_key(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    pub fn as_key(self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "lose" => Some(Goal::Lose),
            "maintain" => Some(Goal::Maintain),
            "gain" => Some(Goal::Gain),
            _ => None,
        }
    }
}

/// A user's body metrics and weight goal. One per user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Profile {
    pub user_id: Uuid,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,         // cm
    pub current_weight: f64, // kg
    pub target_weight: f64,  // kg
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Profile row as stored; enum columns are plain text.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub current_weight: f64,
    pub target_weight: f64,
    pub activity_level: String,
    pub goal: String,
    pub updated_at: OffsetDateTime,
}

impl From<ProfileRow> for Profile {
    fn from(r: ProfileRow) -> Self {
        // Unrecognised stored values decode to the variant the goal formulas
        // would have used for them anyway.
        Self {
            user_id: r.user_id,
            age: u32::try_from(r.age).unwrap_or(0),
            gender: Gender::from_key(&r.gender).unwrap_or(Gender::Female),
            height: r.height,
            current_weight: r.current_weight,
            target_weight: r.target_weight,
            activity_level: ActivityLevel::from_key(&r.activity_level).unwrap_or_default(),
            goal: Goal::from_key(&r.goal).unwrap_or_default(),
            updated_at: r.updated_at,
        }
    }
}
