//! The reservation client view: an explicit state record updated only
//! through `reduce`, driven by `ReservationView` which issues the two
//! service calls and feeds their outcomes back as actions.
//!
//! Overlapping requests are fenced with a request generation: every issued
//! request captures the generation at issue time, and a completion whose
//! generation is older than the latest issued one is discarded instead of
//! clobbering newer state.

pub mod input;
pub mod render;

use tracing::{debug, error, info};

use crate::models::{ReservedSeat, Seat};
use crate::reservation_client::{ReservationClient, ServiceError};

/* ---------- state ---------- */

/// Lifecycle of the view with respect to the seat map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Full view state. Rendering is a pure function of this record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub phase: Phase,
    /// Last successfully fetched seat map. Kept stale-but-present across
    /// failures; replaced wholesale on every successful fetch.
    pub seats: Vec<Seat>,
    /// Seats assigned by the most recent successful reservation. Only ever
    /// replaced by a later successful reservation, never cleared on error.
    pub reserved: Vec<ReservedSeat>,
    /// Single user-visible failure message, cleared by the next successful
    /// operation. While set, the grid is suppressed in rendering.
    pub error: Option<String>,
}

/* ---------- transitions ---------- */

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchStarted,
    SeatsLoaded(Vec<Seat>),
    FetchFailed(String),
    SeatsReserved(Vec<ReservedSeat>),
    ReserveFailed(String),
}

/// Pure transition function. Every state mutation of the view goes through
/// here.
pub fn reduce(state: &ViewState, action: Action) -> ViewState {
    let mut next = state.clone();
    match action {
        Action::FetchStarted => {
            next.phase = Phase::Loading;
        }
        Action::SeatsLoaded(seats) => {
            next.phase = Phase::Loaded;
            next.seats = seats;
            next.error = None;
        }
        Action::FetchFailed(message) => {
            // Previous seat map stays in memory; the grid is suppressed by
            // the renderer while the error holds.
            next.phase = Phase::Error;
            next.error = Some(message);
        }
        Action::SeatsReserved(reserved) => {
            next.phase = Phase::Loaded;
            next.reserved = reserved;
            next.error = None;
        }
        Action::ReserveFailed(message) => {
            next.phase = Phase::Error;
            next.error = Some(message);
        }
    }
    next
}

/* ---------- orchestration ---------- */

pub struct ReservationView {
    client: ReservationClient,
    state: ViewState,
    /// Generation of the most recently issued request.
    generation: u64,
}

impl ReservationView {
    pub fn new(client: ReservationClient) -> Self {
        Self {
            client,
            state: ViewState::default(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Issues a new request generation.
    fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Applies an action unless a newer request has been issued since
    /// `generation` was captured.
    fn apply(&mut self, generation: u64, action: Action) {
        if generation < self.generation {
            debug!(
                "Discarding stale response: generation {} < {}",
                generation, self.generation
            );
            return;
        }
        self.state = reduce(&self.state, action);
    }

    /// Fetches the seat map and replaces the current one. Invoked once at
    /// startup and again after every successful reservation.
    pub async fn load_seats(&mut self) {
        let generation = self.begin_request();
        self.apply(generation, Action::FetchStarted);

        match self.client.get_seats().await {
            Ok(seats) => self.apply(generation, Action::SeatsLoaded(seats)),
            Err(e) => {
                error!("Error fetching seats: {e}");
                self.apply(generation, Action::FetchFailed(fetch_error_message(&e)));
            }
        }
    }

    /// Parses and validates the raw seat-count input, then submits the
    /// reservation. Invalid input never reaches the network. A successful
    /// reservation stores the assigned seats first and then triggers a full
    /// seat-map refresh whose own outcome does not touch the stored result.
    pub async fn reserve_seats(&mut self, raw: &str) {
        let request = match input::parse_seat_count(raw) {
            Ok(request) => request,
            Err(e) => {
                let generation = self.begin_request();
                self.apply(generation, Action::ReserveFailed(e.to_string()));
                return;
            }
        };

        let generation = self.begin_request();
        match self.client.reserve_seats(&request).await {
            Ok(reserved) => {
                info!("Reservation succeeded: {} seats", reserved.len());
                self.apply(generation, Action::SeatsReserved(reserved));
                self.load_seats().await;
            }
            Err(e) => {
                error!("Error reserving seats: {e}");
                self.apply(generation, Action::ReserveFailed(reserve_error_message(&e)));
            }
        }
    }
}

/* ---------- error messages ---------- */

fn fetch_error_message(error: &ServiceError) -> String {
    let message = error.to_string();
    if message.is_empty() {
        "Error fetching seat data".to_string()
    } else {
        message
    }
}

/// The service-provided message wins; everything else (transport failures,
/// messageless rejections) collapses to the generic message.
fn reserve_error_message(error: &ServiceError) -> String {
    match error {
        ServiceError::Rejected {
            message: Some(message),
            ..
        } => message.clone(),
        _ => "Error reserving seats".to_string(),
    }
}
