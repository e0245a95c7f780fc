// utils/validation.rs
use validator::ValidationError;

/// Valider une URL HTTP(S) absolue avec un hôte
pub fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    let parsed = url::Url::parse(value).map_err(|_| url_error("url must be a valid URL"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(url_error("url scheme must be http or https"));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(url_error("url must have a host"));
    }

    Ok(())
}

fn url_error(message: &'static str) -> ValidationError {
    let mut err = ValidationError::new("url");
    err.message = Some(message.into());
    err
}
