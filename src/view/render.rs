//! Text rendering of the view state. Pure functions: identical state always
//! produces identical output, and nothing here touches the network or the
//! state itself.

use crate::models::{ReservedSeat, Seat};
use crate::view::ViewState;

/// Renders the whole view: title, seat layout (or error / placeholder), and
/// the reserved-seats panel when a reservation result is present. The panel
/// is independent of the error state and the grid.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    out.push_str("Seat Reservation System\n\n");
    out.push_str("Seat Layout\n");
    out.push_str(&render_seats(state));

    if let Some(panel) = render_reserved(&state.reserved) {
        out.push('\n');
        out.push_str(&panel);
    }
    out
}

/// The grid section. An error message replaces the grid entirely, even when
/// a stale seat map is still in memory.
pub fn render_seats(state: &ViewState) -> String {
    if let Some(error) = &state.error {
        return format!("{error}\n");
    }

    if state.seats.is_empty() {
        // Safety fallback, in case no seat data has arrived yet.
        return "No seats available\n".to_string();
    }

    let mut out = String::new();
    let mut current_row = None;
    for seat in &state.seats {
        match current_row {
            Some(row) if row == seat.row => out.push(' '),
            Some(_) => out.push('\n'),
            None => {}
        }
        current_row = Some(seat.row);
        out.push_str(&seat_cell(seat));
    }
    out.push('\n');
    out
}

/// One grid cell: `"{row}-{seatNumber}"` tagged booked or available.
fn seat_cell(seat: &Seat) -> String {
    let tag = if seat.is_booked { "booked" } else { "available" };
    format!("[{}-{} {}]", seat.row, seat.seat_number, tag)
}

/// The reserved-seats panel: `"Row {row}, Seat {seatNumber}"` joined by
/// `", "`. `None` when no reservation result is held.
pub fn render_reserved(reserved: &[ReservedSeat]) -> Option<String> {
    if reserved.is_empty() {
        return None;
    }

    let listing = reserved
        .iter()
        .map(|seat| format!("Row {}, Seat {}", seat.row, seat.seat_number))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("Seats reserved:\n{listing}\n"))
}
