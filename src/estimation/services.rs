use tracing::{debug, instrument, warn};

use super::error::{EstimationError, GatewayError};
use super::extract::ExtractionStrategy;
use super::gateway::CalorieEstimationGateway;

pub fn quantity_prompt(food: &str, quantity_in_grams: f64) -> String {
    format!("How many calories in {quantity_in_grams:?} grams of {food}? Only return a number.")
}

pub fn estimator_prompt(food_input: &str) -> String {
    format!("Estimate calories for: {food_input}")
}

/// Ask the model for the calories in `quantity_in_grams` of `food` and parse
/// its answer with `strategy`.
#[instrument(skip(gateway))]
pub async fn estimate_calories(
    gateway: &dyn CalorieEstimationGateway,
    strategy: ExtractionStrategy,
    food: &str,
    quantity_in_grams: f64,
) -> Result<f64, EstimationError> {
    let answer = gateway.ask(&quantity_prompt(food, quantity_in_grams)).await?;
    match strategy.extract(&answer) {
        Ok(calories) => {
            debug!(calories, "calories estimated");
            Ok(calories)
        }
        Err(e) => {
            warn!(error = %e, "model answer had no usable number");
            Err(e.into())
        }
    }
}

/// Free-form estimate for the calorie estimator page; the raw answer is
/// returned as-is.
pub async fn estimate_description(
    gateway: &dyn CalorieEstimationGateway,
    food_input: &str,
) -> Result<String, GatewayError> {
    gateway.ask(&estimator_prompt(food_input)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::error::ExtractionError;
    use crate::testing::ScriptedGateway;

    #[test]
    fn prompts_match_expected_wording() {
        assert_eq!(
            quantity_prompt("banana", 120.5),
            "How many calories in 120.5 grams of banana? Only return a number."
        );
        assert_eq!(estimator_prompt("2 eggs"), "Estimate calories for: 2 eggs");
    }

    #[tokio::test]
    async fn estimate_uses_strategy() {
        let gw = ScriptedGateway::replying("Approximately 250.5 kcal");
        let v = estimate_calories(&gw, ExtractionStrategy::FirstNumber, "rice", 200.0)
            .await
            .unwrap();
        assert_eq!(v, 250.5);
        assert_eq!(
            gw.prompts(),
            vec!["How many calories in 200.0 grams of rice? Only return a number.".to_string()]
        );
    }

    #[tokio::test]
    async fn gateway_failure_is_typed() {
        let gw = ScriptedGateway::failing(503, "upstream busy");
        let err = estimate_calories(&gw, ExtractionStrategy::DigitFilter, "rice", 200.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EstimationError::Gateway(GatewayError::Status { status: 503, .. })
        ));
        assert_eq!(err.to_string(), "503 - upstream busy");
    }

    #[tokio::test]
    async fn unparsable_answer_is_extraction_error() {
        let gw = ScriptedGateway::replying("I cannot say");
        let err = estimate_calories(&gw, ExtractionStrategy::FirstNumber, "air", 1.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EstimationError::Extraction(ExtractionError::NoNumberFound(_))
        ));
    }
}
