use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REMINDER_HOUR: u32 = 16;

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub port: u16,

    pub jwt_secret: String,

    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,

    pub storage_url: String,
    pub storage_bucket: String,
    pub storage_token: String,

    /// AI provider settings; meal suggestion routes stay disabled when unset.
    pub ai_api_url: Option<String>,
    pub ai_api_key: Option<String>,

    /// Local hour at which attendance reminders go out.
    pub reminder_hour: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            app_url: require("APP_URL")?,
            port: optional("PORT")
                .map(|p| p.parse())
                .transpose()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?
                .unwrap_or(DEFAULT_PORT),
            jwt_secret: require("JWT_SECRET")?,
            mail_api_url: require("MAIL_API_URL")?,
            mail_api_key: require("MAIL_API_KEY")?,
            mail_from: require("MAIL_FROM")?,
            storage_url: require("STORAGE_URL")?,
            storage_bucket: require("STORAGE_BUCKET")?,
            storage_token: require("STORAGE_TOKEN")?,
            ai_api_url: optional("AI_API_URL"),
            ai_api_key: optional("AI_API_KEY"),
            reminder_hour: optional("REMINDER_HOUR")
                .map(|h| h.parse())
                .transpose()
                .map_err(|_| ConfigError::InvalidEnvVar("REMINDER_HOUR".to_string()))?
                .unwrap_or(DEFAULT_REMINDER_HOUR),
        })
    }
}

fn require(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

fn optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
