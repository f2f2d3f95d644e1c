//! Seat-count input handling. The raw value arrives as free text and goes
//! through a single parse-and-validate step before any network call; the
//! bound is enforced on submit only, there is no live clamping.

use validator::Validate;

use crate::reservation_client::ReserveSeatsRequest;

pub const MIN_SEATS: i64 = 1;
pub const MAX_SEATS: i64 = 7;

/// Why a raw seat-count value was rejected. Both variants surface the same
/// user-facing message; the distinction exists for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatCountError {
    #[error("Please enter a valid number of seats between 1 and 7.")]
    NotANumber,
    #[error("Please enter a valid number of seats between 1 and 7.")]
    OutOfRange(i64),
}

/// Coerces the raw input to an integer and enforces the [1, 7] contract.
pub fn parse_seat_count(raw: &str) -> Result<ReserveSeatsRequest, SeatCountError> {
    let num_seats: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SeatCountError::NotANumber)?;

    let request = ReserveSeatsRequest { num_seats };
    request
        .validate()
        .map_err(|_| SeatCountError::OutOfRange(num_seats))?;
    Ok(request)
}
