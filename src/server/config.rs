use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_VERIFICATION_CODE: &str = "123456";

/// Value of `VERIFICATION_CODE` that switches to random codes.
const RANDOM_VERIFICATION_CODE: &str = "random";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Firebase project whose ID tokens are accepted by phone login.
    pub firebase_project_id: String,

    /// Fixed code issued for every phone number, or `None` for random codes.
    pub verification_code: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let verification_code = match std::env::var("VERIFICATION_CODE") {
            Ok(code) if code.eq_ignore_ascii_case(RANDOM_VERIFICATION_CODE) => None,
            Ok(code) => Some(parse_verification_code(code)?),
            Err(_) => Some(DEFAULT_VERIFICATION_CODE.to_string()),
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            firebase_project_id: std::env::var("FIREBASE_PROJECT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("FIREBASE_PROJECT_ID".to_string()))?,
            verification_code,
        })
    }
}

/// Fixed codes follow the same shape as random ones: six ASCII digits.
fn parse_verification_code(code: String) -> Result<String, ConfigError> {
    if code.len() == 6 && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(code)
    } else {
        Err(ConfigError::InvalidEnvVar {
            name: "VERIFICATION_CODE".to_string(),
            reason: "expected six digits or \"random\"".to_string(),
        })
    }
}
