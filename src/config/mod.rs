pub mod toml_config;

use crate::domain::model::ApiInfo;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fake-news-api")]
#[command(about = "HTTP front-end for the fake news detection model")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding index.html and the other static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// URL of the model service that returns fake probabilities
    #[arg(long)]
    pub predictor_endpoint: Option<String>,

    /// Request timeout for the model service in seconds (no timeout when unset)
    #[arg(long)]
    pub predictor_timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

/// Effective settings after merging CLI flags over the TOML file over defaults.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub predictor_endpoint: Option<String>,
    pub predictor_timeout_seconds: Option<u64>,
    pub predictor_headers: HashMap<String, String>,
    pub api_info: ApiInfo,
    pub verbose: bool,
    pub json_logs: bool,
}

impl ServerSettings {
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &CliConfig, file: TomlConfig) -> Self {
        let json_logs = cli.json_logs || file.json_logs();

        let mut api_info = ApiInfo::default();
        if let Some(api) = file.api {
            if let Some(title) = api.title {
                api_info.title = title;
            }
            if let Some(description) = api.description {
                api_info.description = description;
            }
            if let Some(version) = api.version {
                api_info.version = version;
            }
        }

        Self {
            host: cli
                .host
                .clone()
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            static_dir: cli
                .static_dir
                .clone()
                .or_else(|| file.static_files.dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            predictor_endpoint: cli
                .predictor_endpoint
                .clone()
                .or(file.predictor.endpoint),
            predictor_timeout_seconds: cli
                .predictor_timeout
                .or(file.predictor.timeout_seconds),
            predictor_headers: file.predictor.headers.unwrap_or_default(),
            api_info,
            verbose: cli.verbose,
            json_logs,
        }
    }
}

impl ConfigProvider for ServerSettings {
    fn bind_address(&self) -> (&str, u16) {
        (&self.host, self.port)
    }

    fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    fn predictor_endpoint(&self) -> Option<&str> {
        self.predictor_endpoint.as_deref()
    }

    fn predictor_timeout(&self) -> Option<Duration> {
        self.predictor_timeout_seconds.map(Duration::from_secs)
    }

    fn predictor_headers(&self) -> &HashMap<String, String> {
        &self.predictor_headers
    }
}

impl Validate for ServerSettings {
    fn validate(&self) -> Result<()> {
        let endpoint =
            validation::validate_required_field("predictor.endpoint", &self.predictor_endpoint)?;
        validation::validate_url("predictor.endpoint", endpoint)?;

        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_positive_number("server.port", u64::from(self.port), 1)?;
        validation::validate_path(
            "static_files.dir",
            &self.static_dir.to_string_lossy(),
        )?;

        if let Some(timeout) = self.predictor_timeout_seconds {
            validation::validate_positive_number("predictor.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
