use time::{Date, OffsetDateTime};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    estimation::{extract::ExtractionStrategy, services::estimate_calories},
    food_log::{
        dto::{FoodSelection, LogFoodRequest, LoggedFoodResponse},
        repo_types::{FoodLogEntry, NewFoodLogEntry},
    },
    goals::round2,
    state::AppState,
};

/// Calendar day entries are filed under (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn total_calories(entries: &[FoodLogEntry]) -> f64 {
    entries.iter().map(|e| e.calories).sum()
}

/// Calories still available today; never negative.
pub fn remaining_calories(goal: f64, total: f64) -> f64 {
    (goal - total).max(0.0)
}

pub fn catalog_calories(quantity_in_grams: f64, calories_per_100g: f64) -> f64 {
    round2(quantity_in_grams / 100.0 * calories_per_100g)
}

/// Resolve the calories for a food entry and store it under today's date.
/// Nothing is written unless a calorie value was obtained.
#[instrument(skip(state, req), fields(quantity = req.quantity_in_grams))]
pub async fn log_food(
    state: &AppState,
    user_id: Uuid,
    req: &LogFoodRequest,
    strategy: ExtractionStrategy,
) -> AppResult<LoggedFoodResponse> {
    if let Err(e) = req.validate() {
        warn!(%user_id, error = %e, "invalid food entry");
        return Err(e.into());
    }
    let selection = req.selection().ok_or_else(|| {
        AppError::Validation("provide exactly one of food or food_id".into())
    })?;

    let quantity = req.quantity_in_grams;
    let (food, food_id, calories) = match selection {
        FoodSelection::Catalog(id) => {
            let item = state
                .foods
                .get(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Food not found".into()))?;
            let calories = catalog_calories(quantity, item.calories_per_100g);
            (item.name, Some(item.id), calories)
        }
        FoodSelection::FreeText(text) => {
            let calories =
                estimate_calories(state.estimator.as_ref(), strategy, text, quantity).await?;
            (text.to_string(), None, calories)
        }
    };

    let entry = state
        .food_logs
        .create(NewFoodLogEntry {
            user_id,
            food,
            food_id,
            quantity_in_grams: quantity,
            calories,
            date: today(),
        })
        .await?;
    info!(%user_id, entry_id = %entry.id, calories, "food logged");

    let message = format!(
        "{} ({:?}g) contains {:?} calories. Entry added to your calorie tracker.",
        entry.food, entry.quantity_in_grams, entry.calories
    );
    Ok(LoggedFoodResponse { entry, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(calories: f64) -> FoodLogEntry {
        FoodLogEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            food: "x".into(),
            food_id: None,
            quantity_in_grams: 100.0,
            calories,
            date: today(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    #[test]
    fn totals_sum_calories() {
        let entries = vec![entry(100.0), entry(250.75), entry(0.0)];
        assert_eq!(total_calories(&entries), 350.75);
        assert_eq!(total_calories(&[]), 0.0);
    }

    #[test]
    fn remaining_is_clamped_at_zero() {
        assert_eq!(remaining_calories(2000.0, 2500.0), 0.0);
        assert_eq!(remaining_calories(2000.0, 1500.5), 499.5);
    }

    #[test]
    fn catalog_calories_scale_per_100g() {
        assert_eq!(catalog_calories(150.0, 89.0), 133.5);
        assert_eq!(catalog_calories(33.0, 52.0), 17.16);
        assert_eq!(catalog_calories(100.0, 0.0), 0.0);
    }
}
