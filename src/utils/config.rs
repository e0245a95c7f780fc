// utils/config.rs
use crate::utils::error::{AppError, AppResult};
use dotenv::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    // Environnement et serveur
    pub run_mode: String,
    pub server_host: String,
    pub server_port: u16,
    pub workers: usize,

    // Logging
    pub log_level: String,
    pub logging_format: String,
}

impl Config {
    /// Charger la configuration depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        // Charger le fichier .env si présent
        let _ = dotenv().ok();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Charger la configuration depuis une source de clés quelconque
    pub fn from_source<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            run_mode: lookup("RUN_MODE").unwrap_or_else(|| "development".to_string()),
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: parse_or(&lookup, "SERVER_PORT", 8080)?,
            workers: parse_or(&lookup, "WORKERS", 4)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            logging_format: lookup("LOGGING_FORMAT").unwrap_or_else(|| "json".to_string()),
        };

        if config.server_port == 0 {
            return Err(AppError::ConfigurationError(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        if config.workers == 0 {
            return Err(AppError::ConfigurationError(
                "WORKERS must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Vérifier si on est en production
    pub fn is_production(&self) -> bool {
        self.run_mode == "production"
    }

    /// Adresse d'écoute du serveur HTTP
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigurationError(format!("{} must be a number", key))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_source(source(&[])).unwrap();
        assert_eq!(config.run_mode, "development");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.workers, 4);
        assert_eq!(config.logging_format, "json");
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_source(source(&[
            ("RUN_MODE", "production"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("WORKERS", "2"),
        ]))
        .unwrap();

        assert!(config.is_production());
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_source(source(&[("SERVER_PORT", "http")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        assert!(Config::from_source(source(&[("SERVER_PORT", "0")])).is_err());
        assert!(Config::from_source(source(&[("WORKERS", "0")])).is_err());
    }
}
