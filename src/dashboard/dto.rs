use serde::{Deserialize, Serialize};
use time::Date;

use crate::food_log::repo_types::FoodLogEntry;
use crate::profiles::repo_types::Profile;
use crate::weight_log::repo_types::WeightLogEntry;

/// `duration_days` is kept as text so a malformed value falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub duration_days: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub today: Date,
    pub profile: Profile,
    pub duration_days: i64,
    pub bmr: i64,
    pub maintenance: i64,
    pub goal: i64,
    pub goal_message: String,
    pub logs: Vec<FoodLogEntry>,
    pub total: f64,
    pub remaining: f64,
    pub latest_weight_log: Option<WeightLogEntry>,
}

#[derive(Debug, Serialize)]
pub struct DashboardEntryResponse {
    pub entry: FoodLogEntry,
    pub message: String,
    pub dashboard: DashboardSummary,
}
