use crate::utils::error::{AppError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> AppError {
    AppError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The model service must be reachable over plain HTTP(S) and have a host.
pub fn validate_url(field: &str, raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(invalid(field, raw, "URL cannot be empty"));
    }

    let url = Url::parse(raw).map_err(|e| invalid(field, raw, format!("Invalid URL format: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            raw,
            format!("Unsupported URL scheme: {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, raw, "URL has no host"));
    }

    Ok(url)
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    match path {
        "" => Err(invalid(field, path, "Path cannot be empty")),
        p if p.contains('\0') => Err(invalid(field, p, "Path contains null bytes")),
        _ => Ok(()),
    }
}

pub fn validate_positive_number(field: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| AppError::MissingConfigError {
        field: field.to_string(),
    })
}

pub fn validate_non_empty_string(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        let url = validate_url("predictor.endpoint", "https://example.com/predict").unwrap();
        assert_eq!(url.path(), "/predict");
        assert!(validate_url("predictor.endpoint", "http://127.0.0.1:9000").is_ok());
        assert!(validate_url("predictor.endpoint", "").is_err());
        assert!(validate_url("predictor.endpoint", "   ").is_err());
        assert!(validate_url("predictor.endpoint", "invalid-url").is_err());
        assert!(validate_url("predictor.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.port", 8000, 1).is_ok());
        assert!(validate_positive_number("server.port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("static_files.dir", "./static").is_ok());
        assert!(validate_path("static_files.dir", "").is_err());
        assert!(validate_path("static_files.dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("http://localhost:9000".to_string());
        let missing: Option<String> = None;

        assert!(validate_required_field("predictor.endpoint", &present).is_ok());
        assert!(matches!(
            validate_required_field("predictor.endpoint", &missing),
            Err(AppError::MissingConfigError { .. })
        ));
    }
}
