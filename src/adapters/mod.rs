// Adapters layer: concrete prediction collaborators (remote model service, in-process function).

pub mod fn_predictor;
pub mod http_predictor;

pub use fn_predictor::FnPredictor;
pub use http_predictor::HttpPredictor;
