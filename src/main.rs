use clap::Parser;
use fake_news_api::domain::ports::ConfigProvider;
use fake_news_api::utils::error::{AppError, ErrorCategory};
use fake_news_api::utils::{logger, validation::Validate};
use fake_news_api::{server, AppState, CliConfig, HttpPredictor, ServerSettings};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match ServerSettings::load(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            // 日誌尚未初始化，直接輸出到 stderr
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    logger::init_server_logger(settings.verbose, settings.json_logs);

    if let Err(e) = run(settings).await {
        tracing::error!(
            "❌ Server failed: {} (Category: {:?})",
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

async fn run(settings: ServerSettings) -> fake_news_api::Result<()> {
    tracing::info!(
        "Starting {} v{}",
        settings.api_info.title,
        settings.api_info.version
    );
    tracing::debug!(
        "Settings: bind={}:{}, static_dir={}, predictor_timeout={:?}, extra_headers={}",
        settings.host,
        settings.port,
        settings.static_dir().display(),
        settings.predictor_timeout_seconds,
        settings.predictor_headers.len()
    );

    settings.validate()?;

    let predictor = HttpPredictor::from_config(&settings)?;
    tracing::info!("🔗 Prediction model at {}", predictor.endpoint());

    let state = AppState::new(Arc::new(predictor), settings.static_dir())
        .with_api_info(settings.api_info.clone());

    server::serve(&settings, state).await
}

fn exit_code(error: &AppError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration => 2,
        ErrorCategory::Network | ErrorCategory::Prediction => 1,
        ErrorCategory::System => 3,
    }
}
