use serde::{Deserialize, Serialize};
use std::fmt;

/// Probabilities at or above this value are labeled [`Label::Fake`].
pub const FAKE_THRESHOLD: f64 = 0.5;

/// Number of decimal digits kept in `fake_probability`.
pub const PROBABILITY_DECIMALS: usize = 4;

pub const HEALTH_MESSAGE: &str = "Fake News Detection API is running";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    /// Threshold labeling. The boundary is inclusive: exactly 0.5 is `Fake`.
    #[inline]
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability >= FAKE_THRESHOLD {
            Label::Fake
        } else {
            Label::Real
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fake => write!(f, "Fake"),
            Self::Real => write!(f, "Real"),
        }
    }
}

/// Rounds the exact stored value to [`PROBABILITY_DECIMALS`] places.
///
/// Goes through decimal formatting instead of `(p * 10^4).round()`: the
/// multiplication can push a value sitting just below a tie (0.00035 is
/// stored as 3.4999...e-4) over it.
#[must_use]
pub fn round_probability(probability: f64) -> f64 {
    format!("{:.*}", PROBABILITY_DECIMALS, probability)
        .parse()
        .unwrap_or(probability)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub fake_probability: f64,
    pub label: Label,
}

impl PredictionResponse {
    /// Labels on the raw probability, then rounds it for the response.
    pub fn from_probability(probability: f64) -> Self {
        Self {
            fake_probability: round_probability(probability),
            label: Label::from_probability(probability),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Fake News Detection API".to_string(),
            description: "Hybrid BERT + GNN + Fusion model for Fake News Detection".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_threshold() {
        assert_eq!(Label::from_probability(0.9123456), Label::Fake);
        assert_eq!(Label::from_probability(1.0), Label::Fake);
        assert_eq!(Label::from_probability(0.12), Label::Real);
        assert_eq!(Label::from_probability(0.0), Label::Real);
    }

    #[test]
    fn test_label_boundary_is_inclusive() {
        assert_eq!(Label::from_probability(0.5), Label::Fake);
        assert_eq!(Label::from_probability(0.49999), Label::Real);
        assert_eq!(Label::from_probability(FAKE_THRESHOLD), Label::Fake);
    }

    #[test]
    fn test_label_uses_unrounded_probability() {
        // 0.49996 rounds to 0.5 but is still below the threshold
        let response = PredictionResponse::from_probability(0.49996);
        assert_eq!(response.fake_probability, 0.5);
        assert_eq!(response.label, Label::Real);
    }

    #[test]
    fn test_round_probability() {
        assert_eq!(round_probability(0.9123456), 0.9123);
        assert_eq!(round_probability(0.12), 0.12);
        assert_eq!(round_probability(0.00004), 0.0);
        assert_eq!(round_probability(1.0), 1.0);
        assert_eq!(round_probability(0.0), 0.0);

        for p in [0.1, 0.33333333, 0.5, 0.987654321, 0.24449] {
            let once = round_probability(p);
            assert_eq!(round_probability(once), once);
        }
    }

    #[test]
    fn test_round_probability_near_ties() {
        // 期望值與 Python round(p, 4) 一致
        assert_eq!(round_probability(0.00035), 0.0003);
        assert_eq!(round_probability(0.00155), 0.0015);
        assert_eq!(round_probability(0.12345), 0.1235);
        assert_eq!(round_probability(0.49996), 0.5);
        assert_eq!(round_probability(0.987654), 0.9877);
    }

    #[test]
    fn test_response_serialization() {
        let response = PredictionResponse::from_probability(0.9123456);
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fake_probability": 0.9123, "label": "Fake"})
        );
    }

    #[test]
    fn test_health_message_is_fixed() {
        assert_eq!(
            HealthResponse::default().message,
            "Fake News Detection API is running"
        );
    }
}
