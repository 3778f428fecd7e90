use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

/// Catalog food, managed outside this service.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Food {
    pub id: Uuid,
    pub name: String,
    pub calories_per_100g: f64,
}

/// One logged food item. `food` is always the description shown to the
/// user; `food_id` is set when the item came from the catalog.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct FoodLogEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub food: String,
    pub food_id: Option<Uuid>,
    pub quantity_in_grams: f64,
    pub calories: f64,
    pub date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewFoodLogEntry {
    pub user_id: Uuid,
    pub food: String,
    pub food_id: Option<Uuid>,
    pub quantity_in_grams: f64,
    pub calories: f64,
    pub date: Date,
}
