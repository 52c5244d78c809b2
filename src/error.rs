use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Username already exists.")]
    UsernameTaken(String),

    #[error("Invalid credentials.")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Please log in first.")]
    NotLoggedIn,

    #[error("Invalid choice.")]
    ShowNotFound(usize),

    #[error("No booking with number {0}.")]
    BookingNotFound(usize),

    #[error("Password hashing failed")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Invalid show time in seed data")]
    InvalidShowTime(#[from] chrono::ParseError),

    #[error("Configuration error")]
    Config(#[from] config::ConfigError),

    #[error("Console I/O error")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Fatal errors end the session; everything else is a bad request that
    /// the console reports before prompting again.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::PasswordHash(_)
                | AppError::InvalidShowTime(_)
                | AppError::Config(_)
                | AppError::Io(_)
        )
    }

    pub fn log(&self) {
        match self {
            AppError::PasswordHash(e) => error!(error = ?e, "Password hashing error"),
            AppError::InvalidShowTime(e) => error!(error = ?e, "Seed data error"),
            AppError::Config(e) => error!(error = ?e, "Configuration error"),
            AppError::Io(e) => error!(error = ?e, "Console I/O error"),
            other => warn!(error = %other, "Request rejected"),
        }
    }
}
