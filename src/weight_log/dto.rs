use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::profiles::positive;
use crate::weight_log::repo_types::WeightLogEntry;

#[derive(Debug, Deserialize, Validate)]
pub struct LogWeightRequest {
    #[validate(custom = "positive")]
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct WeightLogList {
    pub weights: Vec<WeightLogEntry>,
}
