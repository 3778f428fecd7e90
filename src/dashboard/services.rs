use std::cmp::Ordering;

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::{
    dashboard::dto::DashboardSummary,
    food_log::services::{remaining_calories, today, total_calories},
    goals::{compute_duration_adjusted_goal, round2, GoalInputs},
    profiles::services::get_or_create,
    state::AppState,
};

/// Parse a user-supplied duration, falling back to `default` when it is
/// missing or not an integer.
pub fn parse_duration(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}

/// Same leniency for a JSON form field, which may arrive as a number or a
/// string.
pub fn parse_duration_value(raw: Option<&Value>, default: i64) -> i64 {
    match raw {
        Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
        Some(Value::String(s)) => parse_duration(Some(s), default),
        _ => default,
    }
}

pub fn goal_message(weight_diff: f64, goal: i64, duration_days: i64) -> String {
    match weight_diff.partial_cmp(&0.0) {
        Some(Ordering::Less) => format!(
            "To lose weight, consume approx. {goal} kcal/day over {duration_days} days"
        ),
        Some(Ordering::Greater) => format!(
            "To gain weight, consume approx. {goal} kcal/day over {duration_days} days"
        ),
        _ => format!("To maintain weight, consume approx. {goal} kcal/day"),
    }
}

pub async fn build_summary(
    state: &AppState,
    user_id: Uuid,
    duration_days: i64,
) -> anyhow::Result<DashboardSummary> {
    let profile = get_or_create(
        state.profiles.as_ref(),
        user_id,
        &state.config.profile_defaults.first_visit,
    )
    .await?;

    let breakdown = compute_duration_adjusted_goal(&GoalInputs::from(&profile), duration_days);
    let display = breakdown.display();

    let today = today();
    let logs = state.food_logs.list_for_user(user_id, Some(today)).await?;
    let total = total_calories(&logs);
    let remaining = remaining_calories(breakdown.goal, total);
    let latest_weight_log = state.weights.latest_for_user(user_id).await?;

    let weight_diff = profile.target_weight - profile.current_weight;
    debug!(%user_id, duration_days, goal = breakdown.goal, total, "dashboard computed");

    Ok(DashboardSummary {
        today,
        goal_message: goal_message(weight_diff, display.goal, duration_days),
        profile,
        duration_days,
        bmr: display.bmr,
        maintenance: display.maintenance,
        goal: display.goal,
        logs,
        total: round2(total),
        remaining: round2(remaining),
        latest_weight_log,
    })
}
