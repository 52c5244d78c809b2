use super::{menu_index, Response};
use crate::{error::AppError, services::booking, AppState};

pub fn list_shows(state: &AppState) -> Response {
    Response::Shows(booking::list_shows(&state.catalog))
}

pub fn list_seats(state: &AppState, show: usize) -> Result<Response, AppError> {
    let seats = booking::list_seats(&state.catalog, menu_index(show))?;
    Ok(Response::Seats(seats))
}
