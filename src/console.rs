//! Text menu front end.
//!
//! Reads menu choices and prompts from any [`BufRead`], turns them into
//! [`Request`]s and writes rendered [`Response`]s to any [`Write`]. Bad input
//! is reported and the menu is shown again; end of input ends the session.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::{
    controllers::{self, Request, Response, Session},
    error::AppError,
    services::Credentials,
    AppState,
};

const AUTH_MENU: &str = "\n1. Register\n2. Login\nChoose: ";
const MAIN_MENU: &str =
    "\n1. View Shows\n2. Book Ticket\n3. View My Bookings\n4. Exit\n5. Cancel Booking\nChoose: ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

/// Runs a full session: authentication first, then the main menu until the
/// user exits or input runs out.
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    output: W,
) -> Result<(), AppError> {
    Console::new(input, output).run(state)
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run(&mut self, state: &mut AppState) -> Result<(), AppError> {
        let mut session = Session::default();

        if self.authenticate(state, &mut session)? {
            self.main_menu(state, &mut session)?;
        }

        info!("Console session ended");
        self.output.flush()?;
        Ok(())
    }

    /// Returns `false` if input ended before anyone logged in.
    fn authenticate(
        &mut self,
        state: &mut AppState,
        session: &mut Session,
    ) -> Result<bool, AppError> {
        while !session.is_logged_in() {
            let Some(choice) = self.prompt(AUTH_MENU)? else {
                return Ok(false);
            };
            let register = match choice.trim() {
                "1" => true,
                "2" => false,
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };

            let Some(username) = self.prompt("Username: ")? else {
                return Ok(false);
            };
            let Some(password) = self.prompt("Password: ")? else {
                return Ok(false);
            };

            let creds = Credentials::new(username, password);
            let request = if register {
                Request::Register(creds)
            } else {
                Request::Login(creds)
            };
            self.dispatch(state, session, request)?;
        }
        Ok(true)
    }

    fn main_menu(&mut self, state: &mut AppState, session: &mut Session) -> Result<(), AppError> {
        loop {
            let Some(choice) = self.prompt(MAIN_MENU)? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };
            debug!("Main menu choice: {:?}", choice.trim());

            match choice.trim() {
                "1" => {
                    self.dispatch(state, session, Request::ListShows)?;
                }
                "2" => self.book_ticket(state, session)?,
                "3" => {
                    self.dispatch(state, session, Request::ViewBookings)?;
                }
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                "5" => self.cancel_booking(state, session)?,
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn book_ticket(&mut self, state: &mut AppState, session: &mut Session) -> Result<(), AppError> {
        self.dispatch(state, session, Request::ListShows)?;

        let Some(line) = self.prompt("Choose a show: ")? else {
            return Ok(());
        };
        let Ok(show) = line.trim().parse::<usize>() else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };

        if !self.dispatch(state, session, Request::ListSeats { show })? {
            return Ok(());
        }

        let Some(line) = self.prompt("Enter seat numbers (comma separated): ")? else {
            return Ok(());
        };
        let seats = self.parse_seats(&line)?;

        self.dispatch(state, session, Request::BookTicket { show, seats })?;
        Ok(())
    }

    fn cancel_booking(
        &mut self,
        state: &mut AppState,
        session: &mut Session,
    ) -> Result<(), AppError> {
        self.dispatch(state, session, Request::ViewBookings)?;

        let Some(line) = self.prompt("Choose a booking to cancel: ")? else {
            return Ok(());
        };
        let Ok(booking) = line.trim().parse::<usize>() else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };

        self.dispatch(state, session, Request::CancelBooking { booking })?;
        Ok(())
    }

    /// Tokens that are not seat numbers are reported and dropped; empty
    /// tokens are ignored.
    fn parse_seats(&mut self, line: &str) -> Result<Vec<u32>, AppError> {
        let mut seats = Vec::new();
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.parse::<u32>() {
                Ok(n) => seats.push(n),
                Err(_) => writeln!(self.output, "Invalid seat: {token}")?,
            }
        }
        Ok(seats)
    }

    /// Returns `Ok(true)` when the request succeeded. Non-fatal errors are
    /// printed and swallowed.
    fn dispatch(
        &mut self,
        state: &mut AppState,
        session: &mut Session,
        request: Request,
    ) -> Result<bool, AppError> {
        match controllers::handle(state, session, request) {
            Ok(response) => {
                self.render(&response)?;
                Ok(true)
            }
            Err(e) => {
                e.log();
                if e.is_fatal() {
                    return Err(e);
                }
                writeln!(self.output, "{e}")?;
                Ok(false)
            }
        }
    }

    fn render(&mut self, response: &Response) -> Result<(), AppError> {
        let out = &mut self.output;
        match response {
            Response::Registered { .. } => writeln!(out, "User registered successfully.")?,
            Response::LoggedIn { .. } => writeln!(out, "Login successful!")?,
            Response::Shows(shows) => {
                writeln!(out, "\nAvailable Shows:")?;
                for show in shows {
                    writeln!(out, "{show}")?;
                }
            }
            Response::Seats(seats) => {
                writeln!(out, "\nAvailable Seats:")?;
                for seat in seats {
                    writeln!(out, "{seat}")?;
                }
            }
            Response::Booked(outcome) => {
                for rejection in &outcome.rejected {
                    writeln!(out, "{rejection}")?;
                }
                match &outcome.booking {
                    Some(booking) => writeln!(out, "Booking Confirmed:\n{booking}")?,
                    None => writeln!(out, "No seats booked.")?,
                }
            }
            Response::Bookings(bookings) if bookings.is_empty() => {
                writeln!(out, "No bookings yet.")?
            }
            Response::Bookings(bookings) => {
                for (idx, booking) in bookings.iter().enumerate() {
                    writeln!(out, "{}. {booking}", idx + 1)?;
                    let booked_at = booking.booked_at.format("%Y-%m-%d %H:%M UTC");
                    writeln!(out, "Booked at: {booked_at}")?;
                }
            }
            Response::Cancelled(booking) => writeln!(out, "Booking cancelled:\n{booking}")?,
        }
        Ok(())
    }

    /// Writes `text`, then reads one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
