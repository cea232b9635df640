use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP listener binds to.
    pub bind_address: String,

    /// Origins allowed by CORS. Empty allows any origin without credentials.
    pub cors_origins: Vec<String>,

    /// Marks the session cookie `Secure`.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or_default(),
            session_secure: match std::env::var("SESSION_SECURE") {
                Ok(value) => parse_bool("SESSION_SECURE", &value)?,
                Err(_) => false,
            },
        })
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_origins() {
        let origins = parse_origins("http://localhost:3000, https://boards.example.com ,,");

        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "https://boards.example.com".to_string()
            ]
        );
    }

    #[test]
    fn rejects_non_boolean_flag() {
        assert!(parse_bool("SESSION_SECURE", " true ").unwrap());
        assert!(matches!(
            parse_bool("SESSION_SECURE", "yes"),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
    }
}
