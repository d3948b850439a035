use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// The prediction collaborator: turns article text into a fake-probability in [0, 1].
///
/// Implementations own their latency and thread-safety; callers add no
/// timeout or retry on top.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, text: &str) -> Result<f64>;
}

pub trait ConfigProvider: Send + Sync {
    /// Host and port; resolved by the listener when it binds.
    fn bind_address(&self) -> (&str, u16);
    fn static_dir(&self) -> &Path;
    fn predictor_endpoint(&self) -> Option<&str>;
    fn predictor_timeout(&self) -> Option<Duration>;
    fn predictor_headers(&self) -> &HashMap<String, String>;
}
