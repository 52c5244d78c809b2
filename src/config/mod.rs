use serde::{Deserialize, Serialize};
use std::env;
use std::ops::RangeInclusive;

// bcrypt принимает только такие значения cost
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub catalog: CatalogConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    /// `text` or `json`.
    pub log_format: String,
}

// Настройки авторизации
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub bcrypt_cost: u32,
}

// Настройки каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub seats_per_screen: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            rust_log: "cinema_booking=warn".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seats_per_screen: 10 }
    }
}

impl Config {
    /// Builds the configuration from defaults, `CINEMA__SECTION__KEY`
    /// environment variables and `RUST_LOG`, in increasing priority.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Config::default())?)
            .add_source(
                config::Environment::with_prefix("CINEMA")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.rust_log", env::var("RUST_LOG").ok())?
            .build()?
            .try_deserialize::<Self>()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would only fail later, mid-session.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !BCRYPT_COST_RANGE.contains(&self.auth.bcrypt_cost) {
            return Err(config::ConfigError::Message(format!(
                "auth.bcrypt_cost must be in {}..={}, got {}",
                BCRYPT_COST_RANGE.start(),
                BCRYPT_COST_RANGE.end(),
                self.auth.bcrypt_cost
            )));
        }
        if self.catalog.seats_per_screen == 0 {
            return Err(config::ConfigError::Message(
                "catalog.seats_per_screen must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.app.log_format.eq_ignore_ascii_case("json")
    }
}
