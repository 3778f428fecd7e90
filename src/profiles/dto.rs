use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::goals::GoalBreakdown;
use crate::profiles::repo_types::{ActivityLevel, Gender, Goal, Profile};

/// Durations offered for reaching the target weight.
pub const DURATION_CHOICES: [i64; 3] = [30, 90, 180];

fn default_duration() -> i64 {
    30
}

pub(crate) fn positive(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("must_be_positive"))
    }
}

fn duration_choice(days: i64) -> Result<(), ValidationError> {
    if DURATION_CHOICES.contains(&days) {
        Ok(())
    } else {
        Err(ValidationError::new("duration_must_be_30_90_or_180"))
    }
}

/// Full profile edit; every field is required.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(range(min = 1, max = 150))]
    pub age: u32,
    pub gender: Gender,
    #[validate(custom = "positive")]
    pub height: f64,
    #[validate(custom = "positive")]
    pub current_weight: f64,
    #[validate(custom = "positive")]
    pub target_weight: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default = "default_duration")]
    #[validate(custom = "duration_choice")]
    pub duration_days: i64,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Profile,
    /// Flat ±500 kcal goal.
    pub daily_calorie_goal: f64,
}

#[derive(Debug, Serialize)]
pub struct UpdatedProfileResponse {
    pub profile: Profile,
    pub daily_calorie_goal: f64,
    pub duration_days: i64,
    /// Goal for reaching the target weight within `duration_days`.
    pub plan: GoalBreakdown,
}
