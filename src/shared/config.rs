use std::env;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_ENDPOINT: &str = "https://www.ratemyprofessors.com/graphql";
const DEFAULT_SCHOOL_ID: &str = "U2Nob29sLTE4ODQ2";
const DEFAULT_REQUESTS_PER_SECOND: f64 = 2.0;

/// Connection settings for the remote profile directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub endpoint: String,
    pub auth_token: Option<String>,
    pub school_id: String,
    pub requests_per_second: f64,
}

impl DirectoryConfig {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let endpoint =
            env::var("PROFMATCH_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let auth_token = env::var("PROFMATCH_AUTH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        let school_id =
            env::var("PROFMATCH_SCHOOL_ID").unwrap_or_else(|_| DEFAULT_SCHOOL_ID.to_string());
        let requests_per_second = match env::var("PROFMATCH_REQUESTS_PER_SECOND") {
            Ok(raw) => raw.parse::<f64>().map_err(|e| {
                AppError::ConfigError(format!(
                    "PROFMATCH_REQUESTS_PER_SECOND must be a number: {}",
                    e
                ))
            })?,
            Err(_) => DEFAULT_REQUESTS_PER_SECOND,
        };

        let config = Self {
            endpoint,
            auth_token,
            school_id,
            requests_per_second,
        };
        config.validate()?;

        log::info!(
            "Directory endpoint: {} (school {}, {} req/s, auth: {})",
            config.endpoint,
            config.school_id,
            config.requests_per_second,
            if config.auth_token.is_some() { "yes" } else { "no" }
        );

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(AppError::ConfigError(format!(
                "Directory endpoint must be an http(s) URL, got '{}'",
                self.endpoint
            )));
        }

        if self.school_id.trim().is_empty() {
            return Err(AppError::ConfigError("School id must not be empty".to_string()));
        }

        if !(self.requests_per_second > 0.0) {
            return Err(AppError::ConfigError(format!(
                "Requests per second must be positive, got {}",
                self.requests_per_second
            )));
        }

        Ok(())
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_token: None,
            school_id: DEFAULT_SCHOOL_ID.to_string(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
        }
    }
}
