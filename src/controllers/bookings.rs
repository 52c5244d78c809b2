use super::{menu_index, Response};
use crate::{error::AppError, services::booking, AppState};

pub fn book_ticket(
    state: &mut AppState,
    username: &str,
    show: usize,
    seats: &[u32],
) -> Result<Response, AppError> {
    let AppState { catalog, users, .. } = state;
    let user = users.get_mut(username).ok_or(AppError::NotLoggedIn)?;
    let outcome = booking::book_ticket(catalog, user, menu_index(show), seats)?;
    Ok(Response::Booked(outcome))
}

pub fn view_bookings(state: &AppState, username: &str) -> Result<Response, AppError> {
    let user = state.users.get(username).ok_or(AppError::NotLoggedIn)?;
    Ok(Response::Bookings(user.bookings.clone()))
}

pub fn cancel_booking(
    state: &mut AppState,
    username: &str,
    number: usize,
) -> Result<Response, AppError> {
    let AppState { catalog, users, .. } = state;
    let user = users.get_mut(username).ok_or(AppError::NotLoggedIn)?;
    if number == 0 {
        return Err(AppError::BookingNotFound(number));
    }
    let cancelled = booking::cancel_booking(catalog, user, number - 1)?;
    Ok(Response::Cancelled(cancelled))
}
