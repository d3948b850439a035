use crate::core::service::PredictionService;
use crate::domain::model::ApiInfo;
use crate::domain::ports::Predictor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    service: PredictionService,
    static_dir: Arc<PathBuf>,
    api_info: Arc<ApiInfo>,
}

impl AppState {
    pub fn new(predictor: Arc<dyn Predictor>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            service: PredictionService::new(predictor),
            static_dir: Arc::new(static_dir.into()),
            api_info: Arc::new(ApiInfo::default()),
        }
    }

    pub fn with_api_info(mut self, api_info: ApiInfo) -> Self {
        self.api_info = Arc::new(api_info);
        self
    }

    pub fn service(&self) -> &PredictionService {
        &self.service
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    pub fn api_info(&self) -> &ApiInfo {
        &self.api_info
    }
}
