//! Request/response layer between the console and the services.
//!
//! Every menu action becomes a [`Request`]; [`handle`] routes it to the
//! owning controller and returns a [`Response`] the console can render.

pub mod auth;
pub mod bookings;
pub mod shows;

use crate::{
    error::AppError,
    models::{Booking, Seat},
    services::{BookingOutcome, Credentials, ShowSummary},
    AppState,
};

/// Who is logged in on this console.
#[derive(Debug, Default, Clone)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    fn require_user(&self) -> Result<&str, AppError> {
        self.username().ok_or(AppError::NotLoggedIn)
    }
}

#[derive(Debug, Clone)]
pub enum Request {
    Register(Credentials),
    Login(Credentials),
    ListShows,
    /// 1-based show number, as typed by the user.
    ListSeats { show: usize },
    BookTicket { show: usize, seats: Vec<u32> },
    ViewBookings,
    /// 1-based booking number from the bookings listing.
    CancelBooking { booking: usize },
}

#[derive(Debug, Clone)]
pub enum Response {
    Registered { username: String },
    LoggedIn { username: String },
    Shows(Vec<ShowSummary>),
    Seats(Vec<Seat>),
    Booked(BookingOutcome),
    Bookings(Vec<Booking>),
    Cancelled(Booking),
}

pub fn handle(
    state: &mut AppState,
    session: &mut Session,
    request: Request,
) -> Result<Response, AppError> {
    match request {
        Request::Register(creds) => auth::register(state, session, &creds),
        Request::Login(creds) => auth::login(state, session, &creds),
        Request::ListShows => Ok(shows::list_shows(state)),
        Request::ListSeats { show } => shows::list_seats(state, show),
        Request::BookTicket { show, seats } => {
            bookings::book_ticket(state, session.require_user()?, show, &seats)
        }
        Request::ViewBookings => bookings::view_bookings(state, session.require_user()?),
        Request::CancelBooking { booking } => {
            bookings::cancel_booking(state, session.require_user()?, booking)
        }
    }
}

/// Converts a 1-based menu number to a 0-based index; `0` maps past the end.
fn menu_index(number: usize) -> usize {
    number.checked_sub(1).unwrap_or(usize::MAX)
}
