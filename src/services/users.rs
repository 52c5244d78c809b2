//! In-memory user registry: registration and login by username + password.
//!
//! Passwords never leave this module in plain form; each user keeps a bcrypt
//! hash produced with the configured cost.

use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::models::User;

#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, max = 32))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    bcrypt_cost: u32,
}

impl UserStore {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { users: Vec::new(), bcrypt_cost }
    }

    /// Creates a user, failing if the username is already taken.
    pub fn register(&mut self, credentials: &Credentials) -> Result<&mut User, AppError> {
        credentials.validate()?;

        if self.users.iter().any(|u| u.username == credentials.username) {
            return Err(AppError::UsernameTaken(credentials.username.clone()));
        }

        let hash = bcrypt::hash(&credentials.password, self.bcrypt_cost)?;
        self.users.push(User::new(credentials.username.clone(), hash));
        info!("User {} registered", credentials.username);

        let idx = self.users.len() - 1;
        Ok(&mut self.users[idx])
    }

    /// Unknown username and wrong password are indistinguishable to the caller.
    pub fn login(&mut self, credentials: &Credentials) -> Result<&mut User, AppError> {
        let Some(user) = self
            .users
            .iter_mut()
            .find(|u| u.username == credentials.username)
        else {
            return Err(AppError::InvalidCredentials);
        };

        if !user.verify_password(&credentials.password)? {
            return Err(AppError::InvalidCredentials);
        }

        info!("User {} logged in", user.username);
        Ok(user)
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username == username)
    }
}
