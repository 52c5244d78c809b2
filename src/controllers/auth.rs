use super::{Response, Session};
use crate::{error::AppError, services::Credentials, AppState};

pub fn register(
    state: &mut AppState,
    session: &mut Session,
    creds: &Credentials,
) -> Result<Response, AppError> {
    let user = state.users.register(creds)?;
    session.username = Some(user.username.clone());
    Ok(Response::Registered {
        username: user.username.clone(),
    })
}

pub fn login(
    state: &mut AppState,
    session: &mut Session,
    creds: &Credentials,
) -> Result<Response, AppError> {
    let user = state.users.login(creds)?;
    session.username = Some(user.username.clone());
    Ok(Response::LoggedIn {
        username: user.username.clone(),
    })
}
