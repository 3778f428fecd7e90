use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::food_log::repo_types::{Food, FoodLogEntry};
use crate::profiles::positive;

/// Food entry form. Exactly one of `food` (free text, estimated by the
/// model) or `food_id` (catalog item) must be given.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogFoodRequest {
    #[validate(length(min = 1, max = 255))]
    pub food: Option<String>,
    pub food_id: Option<Uuid>,
    #[validate(custom = "positive")]
    pub quantity_in_grams: f64,
    /// Only read by the dashboard form. Kept raw so a bad value falls back
    /// to the default instead of rejecting the entry.
    pub duration_days: Option<serde_json::Value>,
}

pub enum FoodSelection<'a> {
    FreeText(&'a str),
    Catalog(Uuid),
}

impl LogFoodRequest {
    pub fn selection(&self) -> Option<FoodSelection<'_>> {
        match (self.food.as_deref().map(str::trim), self.food_id) {
            (Some(text), None) if !text.is_empty() => Some(FoodSelection::FreeText(text)),
            (None, Some(id)) => Some(FoodSelection::Catalog(id)),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoggedFoodResponse {
    pub entry: FoodLogEntry,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct FoodLogList {
    pub logs: Vec<FoodLogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FoodSearch {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}
fn default_limit() -> i64 {
    20
}

#[derive(Debug, Serialize)]
pub struct FoodList {
    pub foods: Vec<Food>,
}
