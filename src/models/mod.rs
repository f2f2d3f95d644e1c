pub mod seat;

pub use seat::{ReservedSeat, Seat};
