use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(length(min = 1, max = 500, message = "food_input must be 1-500 characters"))]
    pub food_input: String,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    pub food_input: String,
    pub estimated_calories: String,
    /// First number in the answer, if any.
    pub calories: Option<f64>,
}
