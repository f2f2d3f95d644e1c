use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub service: ServiceConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки сервиса бронирования
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the reservation service. Resolved once at startup,
    /// never re-read afterwards.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_reservation=info".to_string()),
            },
            service: ServiceConfig {
                base_url: env::var("RESERVATION_SERVICE_URL")
                    .expect("RESERVATION_SERVICE_URL must be set"),
                timeout_seconds: env::var("SERVICE_TIMEOUT_SECONDS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .expect("SERVICE_TIMEOUT_SECONDS must be a valid number"),
            },
        }
    }
}
