use serde::Serialize;

use crate::profiles::repo_types::{ActivityLevel, Gender, Goal, Profile};

/// Energy content of one kilogram of body fat, in kcal.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Flat daily adjustment applied for lose/gain goals.
pub const FLAT_ADJUSTMENT_KCAL: f64 = 500.0;

pub const DEFAULT_DURATION_DAYS: i64 = 30;

/// Everything the goal formulas read from a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalInputs {
    pub gender: Gender,
    pub current_weight: f64,
    pub height: f64,
    pub age: u32,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub target_weight: f64,
}

impl From<&Profile> for GoalInputs {
    fn from(p: &Profile) -> Self {
        Self {
            gender: p.gender,
            current_weight: p.current_weight,
            height: p.height,
            age: p.age,
            activity_level: p.activity_level,
            goal: p.goal,
            target_weight: p.target_weight,
        }
    }
}

/// Result of a goal computation, in kcal/day, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalBreakdown {
    pub bmr: f64,
    pub maintenance: f64,
    pub goal: f64,
}

/// Integer-rounded figures for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayGoal {
    pub bmr: i64,
    pub maintenance: i64,
    pub goal: i64,
}

impl GoalBreakdown {
    pub fn display(&self) -> DisplayGoal {
        DisplayGoal {
            bmr: self.bmr.round() as i64,
            maintenance: self.maintenance.round() as i64,
            goal: self.goal.round() as i64,
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Basal metabolic rate, Mifflin-St Jeor:
/// `10 * weight + 6.25 * height - 5 * age + s`, with `s = +5` for men and
/// `s = -161` for women.
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

fn bmr_and_maintenance(inputs: &GoalInputs) -> (f64, f64) {
    let bmr = bmr(
        inputs.gender,
        inputs.current_weight,
        inputs.height,
        inputs.age,
    );
    (bmr, bmr * activity_multiplier(inputs.activity_level))
}

/// Goal that closes the gap to `target_weight` within `duration_days`.
///
/// The daily change is `(target - current) * 7700 / duration_days`, or 0 when
/// `duration_days <= 0`. A `maintain` goal always yields maintenance.
pub fn compute_duration_adjusted_goal(inputs: &GoalInputs, duration_days: i64) -> GoalBreakdown {
    let (bmr, maintenance) = bmr_and_maintenance(inputs);

    let weight_diff = inputs.target_weight - inputs.current_weight;
    let total_change = weight_diff * KCAL_PER_KG;
    let daily_change = if duration_days > 0 {
        total_change / duration_days as f64
    } else {
        0.0
    };

    let goal = match inputs.goal {
        Goal::Maintain => maintenance,
        Goal::Lose | Goal::Gain => maintenance + daily_change,
    };

    GoalBreakdown {
        bmr: round2(bmr),
        maintenance: round2(maintenance),
        goal: round2(goal),
    }
}

/// Goal with a fixed ±500 kcal/day adjustment; ignores target weight.
pub fn compute_flat_adjusted_goal(inputs: &GoalInputs) -> GoalBreakdown {
    let (bmr, maintenance) = bmr_and_maintenance(inputs);
    let adjustment = match inputs.goal {
        Goal::Lose => -FLAT_ADJUSTMENT_KCAL,
        Goal::Gain => FLAT_ADJUSTMENT_KCAL,
        Goal::Maintain => 0.0,
    };

    GoalBreakdown {
        bmr: round2(bmr),
        maintenance: round2(maintenance),
        goal: round2(maintenance + adjustment),
    }
}
