use crate::domain::model::PredictionResponse;
use crate::domain::ports::Predictor;
use crate::utils::error::{AppError, Result};
use std::sync::Arc;

/// Runs the collaborator and turns its probability into a labeled response.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn Predictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    pub async fn predict(&self, text: &str) -> Result<PredictionResponse> {
        let probability = self.predictor.predict(text).await?;

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(AppError::prediction(format!(
                "model returned probability {} outside [0, 1]",
                probability
            )));
        }

        let response = PredictionResponse::from_probability(probability);
        tracing::debug!(
            "Prediction: raw={}, fake_probability={}, label={}",
            probability,
            response.fake_probability,
            response.label
        );
        Ok(response)
    }
}
