use serde::{Deserialize, Serialize};

/// One seat in the fetched seat map. `(row, seat_number)` pairs are unique
/// within a single response; the client never mutates a seat locally, it
/// refetches the whole map instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub row: i32,
    #[serde(rename = "seatNumber")]
    pub seat_number: i32,
    #[serde(rename = "isBooked")]
    pub is_booked: bool,
}

/// Seat reference as returned by a reserve call. The service may attach
/// extra fields here; only the position matters to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedSeat {
    pub row: i32,
    #[serde(rename = "seatNumber")]
    pub seat_number: i32,
}
