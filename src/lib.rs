pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{FnPredictor, HttpPredictor};
pub use config::{CliConfig, ServerSettings};
pub use crate::core::service::PredictionService;
pub use domain::model::{Label, PredictRequest, PredictionResponse};
pub use domain::ports::Predictor;
pub use server::{create_router, AppState};
pub use utils::error::{AppError, Result};
