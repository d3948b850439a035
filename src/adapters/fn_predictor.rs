use crate::domain::ports::Predictor;
use crate::utils::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Wraps an in-process, blocking inference function.
///
/// Each call runs on tokio's blocking pool, so a slow model does not stall
/// the request-handling threads.
pub struct FnPredictor<F> {
    func: Arc<F>,
}

impl<F> FnPredictor<F>
where
    F: Fn(&str) -> Result<f64> + Send + Sync + 'static,
{
    pub fn new(func: F) -> Self {
        Self {
            func: Arc::new(func),
        }
    }
}

#[async_trait]
impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&str) -> Result<f64> + Send + Sync + 'static,
{
    async fn predict(&self, text: &str) -> Result<f64> {
        let func = Arc::clone(&self.func);
        let text = text.to_owned();

        tokio::task::spawn_blocking(move || func(&text))
            .await
            .map_err(|e| AppError::prediction(format!("inference task aborted: {}", e)))?
    }
}
