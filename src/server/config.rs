use crate::server::{
    error::{config::ConfigError, AppError},
    i18n::Locale,
};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub jwt_secret_key: String,
    pub bind_address: String,
    pub default_locale: Locale,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET_KEY` unset
    /// - `Err(ConfigError::InvalidValue)` - `DEFAULT_LOCALE` is not a supported locale
    pub fn from_env() -> Result<Self, AppError> {
        let default_locale = match std::env::var("DEFAULT_LOCALE") {
            Ok(tag) => Locale::from_tag(&tag).ok_or_else(|| ConfigError::InvalidValue {
                var: "DEFAULT_LOCALE".to_string(),
                value: tag.clone(),
            })?,
            Err(_) => Locale::default(),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            default_locale,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
