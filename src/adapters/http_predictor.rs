use crate::domain::ports::{ConfigProvider, Predictor};
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct InferenceResponse {
    fake_probability: f64,
}

/// Reaches the model over HTTP: `POST {"text": ...}` returning `{"fake_probability": ...}`.
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: Client,
    endpoint: String,
}

impl HttpPredictor {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_options(endpoint, None, &HashMap::new())
    }

    pub fn with_options(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
        headers: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                AppError::InvalidConfigValueError {
                    field: "predictor.headers".to_string(),
                    value: key.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                AppError::InvalidConfigValueError {
                    field: format!("predictor.headers.{}", key),
                    value: "<redacted>".to_string(),
                    reason: format!("Invalid header value: {}", e),
                }
            })?;
            default_headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let endpoint = config
            .predictor_endpoint()
            .ok_or_else(|| AppError::MissingConfigError {
                field: "predictor.endpoint".to_string(),
            })?;
        Self::with_options(
            endpoint,
            config.predictor_timeout(),
            config.predictor_headers(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, text: &str) -> Result<f64> {
        tracing::debug!("Sending {} characters to model at {}", text.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::prediction(format!(
                "model service returned {}: {}",
                status, body
            )));
        }

        let bytes = response.bytes().await?;
        let parsed: InferenceResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed.fake_probability)
    }
}
