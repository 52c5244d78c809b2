//! Seat booking workflow.
//!
//! A seat's availability flag on its screen is the only source of truth: a
//! seat is selectable iff it is available, booking flips it, cancelling a
//! booking flips it back. Each requested seat is decided on its own, so a
//! partially valid request still books the valid seats.

use std::fmt;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::models::{show::ShowId, Booking, Seat, User};

/// One line of the show listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowSummary {
    /// 1-based, as shown in the menu.
    pub number: usize,
    pub label: String,
    pub available_seats: usize,
    pub capacity: usize,
}

impl fmt::Display for ShowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} ({}/{} seats available)",
            self.number, self.label, self.available_seats, self.capacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatRejection {
    OutOfRange(u32),
    AlreadyBooked(u32),
}

impl fmt::Display for SeatRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatRejection::OutOfRange(n) => write!(f, "Invalid seat: {n}"),
            SeatRejection::AlreadyBooked(n) => write!(f, "Seat {n} already booked."),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingOutcome {
    /// `None` when no requested seat could be booked.
    pub booking: Option<Booking>,
    pub rejected: Vec<SeatRejection>,
}

pub fn list_shows(catalog: &Catalog) -> Vec<ShowSummary> {
    catalog
        .shows()
        .iter()
        .enumerate()
        .map(|(idx, show)| {
            let (available_seats, capacity) = catalog
                .screen(show.screen_number)
                .map(|s| (s.available_count(), s.capacity()))
                .unwrap_or_default();
            ShowSummary {
                number: idx + 1,
                label: show.to_string(),
                available_seats,
                capacity,
            }
        })
        .collect()
}

pub fn list_seats(catalog: &Catalog, show_id: ShowId) -> Result<Vec<Seat>, AppError> {
    let show = catalog.show(show_id).ok_or(AppError::ShowNotFound(show_id))?;
    let screen = catalog
        .screen(show.screen_number)
        .ok_or(AppError::ShowNotFound(show_id))?;
    Ok(screen.seats().to_vec())
}

pub fn book_ticket(
    catalog: &mut Catalog,
    user: &mut User,
    show_id: ShowId,
    seat_numbers: &[u32],
) -> Result<BookingOutcome, AppError> {
    let show = catalog
        .show(show_id)
        .cloned()
        .ok_or(AppError::ShowNotFound(show_id))?;
    let screen = catalog
        .screen_mut(show.screen_number)
        .ok_or(AppError::ShowNotFound(show_id))?;

    let mut selected = Vec::new();
    let mut rejected = Vec::new();

    for &number in seat_numbers {
        match screen.seat_mut(number) {
            None => rejected.push(SeatRejection::OutOfRange(number)),
            Some(seat) if !seat.is_available() => {
                rejected.push(SeatRejection::AlreadyBooked(number))
            }
            Some(seat) => {
                seat.book();
                selected.push(number);
            }
        }
    }

    for r in &rejected {
        debug!("{}: {}", user.username, r);
    }

    if selected.is_empty() {
        return Ok(BookingOutcome { booking: None, rejected });
    }

    let booking = Booking::new(show, selected);
    info!(
        "Booking {} confirmed for {}: {} seats on screen {}",
        booking.id,
        user.username,
        booking.seats.len(),
        booking.show.screen_number
    );
    user.add_booking(booking.clone());

    Ok(BookingOutcome {
        booking: Some(booking),
        rejected,
    })
}

/// Releases every seat of the user's booking at `index` (0-based) and drops
/// it from their history.
pub fn cancel_booking(
    catalog: &mut Catalog,
    user: &mut User,
    index: usize,
) -> Result<Booking, AppError> {
    if index >= user.bookings.len() {
        return Err(AppError::BookingNotFound(index + 1));
    }
    let booking = user.bookings.remove(index);

    if let Some(screen) = catalog.screen_mut(booking.show.screen_number) {
        for &number in &booking.seats {
            if let Some(seat) = screen.seat_mut(number) {
                seat.release();
            }
        }
    }

    info!(
        "Booking {} cancelled by {}, {} seats released",
        booking.id,
        user.username,
        booking.seats.len()
    );
    Ok(booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn setup() -> (Catalog, User) {
        let catalog = Catalog::seed(10).unwrap();
        let user = User::new("tester".to_string(), String::new());
        (catalog, user)
    }

    fn is_available(catalog: &Catalog, show_id: ShowId, number: u32) -> bool {
        list_seats(catalog, show_id).unwrap()[number as usize - 1].is_available()
    }

    #[test]
    fn booking_marks_seats_unavailable() {
        let (mut catalog, mut user) = setup();

        let outcome = book_ticket(&mut catalog, &mut user, 0, &[1, 2]).unwrap();
        let booking = outcome.booking.unwrap();

        assert_eq!(booking.seats, vec![1, 2]);
        assert!(outcome.rejected.is_empty());
        assert!(!is_available(&catalog, 0, 1));
        assert!(!is_available(&catalog, 0, 2));
        assert!(is_available(&catalog, 0, 3));
    }

    #[test]
    fn booking_same_seat_again_is_rejected() {
        let (mut catalog, mut user) = setup();
        book_ticket(&mut catalog, &mut user, 0, &[5]).unwrap();

        let outcome = book_ticket(&mut catalog, &mut user, 0, &[5]).unwrap();

        assert!(outcome.booking.is_none());
        assert_eq!(outcome.rejected, vec![SeatRejection::AlreadyBooked(5)]);
        assert_eq!(user.bookings.len(), 1);
    }

    #[test]
    fn duplicate_seat_in_one_request_books_once() {
        let (mut catalog, mut user) = setup();

        let outcome = book_ticket(&mut catalog, &mut user, 1, &[3, 3]).unwrap();

        assert_eq!(outcome.booking.unwrap().seats, vec![3]);
        assert_eq!(outcome.rejected, vec![SeatRejection::AlreadyBooked(3)]);
    }

    #[test]
    fn mixed_request_books_only_valid_seats() {
        let (mut catalog, mut user) = setup();

        let outcome = book_ticket(&mut catalog, &mut user, 0, &[0, 4, 11]).unwrap();

        assert_eq!(outcome.booking.unwrap().seats, vec![4]);
        assert_eq!(
            outcome.rejected,
            vec![SeatRejection::OutOfRange(0), SeatRejection::OutOfRange(11)]
        );
    }

    #[test]
    fn confirmed_booking_appears_in_history_once() {
        let (mut catalog, mut user) = setup();

        let booking = book_ticket(&mut catalog, &mut user, 1, &[7, 8])
            .unwrap()
            .booking
            .unwrap();

        let matches = user.bookings.iter().filter(|b| b.id == booking.id).count();
        assert_eq!(matches, 1);
        assert_eq!(user.bookings.len(), 1);
    }

    #[test]
    fn unknown_show_is_rejected_before_touching_seats() {
        let (mut catalog, mut user) = setup();

        let err = book_ticket(&mut catalog, &mut user, 7, &[1]).unwrap_err();

        assert!(matches!(err, AppError::ShowNotFound(7)));
        assert!(list_shows(&catalog).iter().all(|s| s.available_seats == 10));
    }

    #[test]
    fn shows_on_other_screens_are_independent() {
        let (mut catalog, mut user) = setup();
        book_ticket(&mut catalog, &mut user, 0, &[1]).unwrap();
        assert!(is_available(&catalog, 1, 1));
    }

    #[test]
    fn listing_reports_free_seats() {
        let (mut catalog, mut user) = setup();
        book_ticket(&mut catalog, &mut user, 0, &[1, 2, 3]).unwrap();

        let shows = list_shows(&catalog);
        assert_eq!(shows.len(), 2);
        assert_eq!(
            shows[0].to_string(),
            "1. Inception at 5:00 PM on Screen 1 (7/10 seats available)"
        );
        assert_eq!(shows[1].available_seats, 10);
    }

    #[test]
    fn cancelling_releases_seats_and_drops_booking() {
        let (mut catalog, mut user) = setup();
        book_ticket(&mut catalog, &mut user, 0, &[2, 9]).unwrap();

        let cancelled = cancel_booking(&mut catalog, &mut user, 0).unwrap();

        assert_eq!(cancelled.seats, vec![2, 9]);
        assert!(user.bookings.is_empty());
        assert!(is_available(&catalog, 0, 2));
        assert!(is_available(&catalog, 0, 9));
    }

    #[test]
    fn cancelling_unknown_booking_changes_nothing() {
        let (mut catalog, mut user) = setup();
        book_ticket(&mut catalog, &mut user, 0, &[6]).unwrap();

        let err = cancel_booking(&mut catalog, &mut user, 3).unwrap_err();

        assert!(matches!(err, AppError::BookingNotFound(4)));
        assert_eq!(user.bookings.len(), 1);
        assert!(!is_available(&catalog, 0, 6));
    }

    proptest! {
        #[test]
        fn out_of_range_seats_have_no_side_effects(
            seats in prop::collection::vec(prop_oneof![Just(0u32), 11u32..10_000], 1..8)
        ) {
            let (mut catalog, mut user) = setup();

            let outcome = book_ticket(&mut catalog, &mut user, 0, &seats).unwrap();

            prop_assert!(outcome.booking.is_none());
            prop_assert_eq!(outcome.rejected.len(), seats.len());
            prop_assert!(user.bookings.is_empty());
            prop_assert!(list_shows(&catalog).iter().all(|s| s.available_seats == 10));
        }
    }
}
