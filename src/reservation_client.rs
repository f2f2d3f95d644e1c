//! reservation_client.rs
//!
//! Клиент для взаимодействия с внешним сервисом бронирования мест.
//!
//! The service owns all seat allocation, locking and conflict resolution;
//! this client only issues the two REST calls of its contract and checks
//! that responses have the promised shape before handing them to the view.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};
use validator::Validate;

use crate::config::ServiceConfig;
use crate::models::{ReservedSeat, Seat};

/// Ошибки при обращении к сервису бронирования.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The seat-map endpoint returned something other than an array of
    /// seats. Surfaced verbatim to the user.
    #[error("Invalid data format: Expected an array of seats.")]
    InvalidFormat,
    /// The service rejected the request with an error body, optionally
    /// carrying a human-readable message.
    #[error("{}", .message.as_deref().unwrap_or("reservation request rejected"))]
    Rejected {
        status: reqwest::StatusCode,
        message: Option<String>,
    },
    /// Network-level failure (connect, timeout, decode).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Запрос на бронирование мест.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ReserveSeatsRequest {
    #[serde(rename = "numSeats")]
    #[validate(range(min = 1, max = 7))]
    pub num_seats: i64,
}

/// Ответ сервиса на успешное бронирование.
#[derive(Debug, Deserialize)]
pub struct ReserveSeatsResponse {
    pub seats: Vec<ReservedSeat>,
}

/// Error body the service may attach to a rejected request.
#[derive(Debug, Default, Deserialize)]
struct ServiceErrorBody {
    message: Option<String>,
}

/// Клиент для API сервиса бронирования.
#[derive(Clone)]
pub struct ReservationClient {
    /// Базовый URL сервиса.
    base_url: String,
    /// Асинхронный HTTP-клиент.
    http_client: reqwest::Client,
}

impl ReservationClient {
    /// Создает и конфигурирует клиент на основе настроек приложения.
    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Fetches the full seat map. Any non-array body is a contract
    /// violation reported as `ServiceError::InvalidFormat`.
    pub async fn get_seats(&self) -> Result<Vec<Seat>, ServiceError> {
        let body: serde_json::Value = self
            .http_client
            .get(format!("{}/getseats", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !body.is_array() {
            warn!("getseats returned a non-array body");
            return Err(ServiceError::InvalidFormat);
        }

        let seats: Vec<Seat> =
            serde_json::from_value(body).map_err(|_| ServiceError::InvalidFormat)?;
        info!("Fetched seat map: {} seats", seats.len());
        Ok(seats)
    }

    /// Submits a reservation for `request.num_seats` seats and returns the
    /// seats the service assigned. The caller is responsible for validating
    /// the request before it reaches the network.
    pub async fn reserve_seats(
        &self,
        request: &ReserveSeatsRequest,
    ) -> Result<Vec<ReservedSeat>, ServiceError> {
        info!("Reserving {} seats", request.num_seats);

        let response = self
            .http_client
            .post(format!("{}/reserve-seats", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ServiceErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            warn!("reserve-seats rejected: status={}, message={:?}", status, message);
            return Err(ServiceError::Rejected { status, message });
        }

        let body = response.json::<ReserveSeatsResponse>().await?;
        info!("Service assigned {} seats", body.seats.len());
        Ok(body.seats)
    }
}
