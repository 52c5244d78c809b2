pub mod booking;
pub mod users;

pub use booking::{BookingOutcome, SeatRejection, ShowSummary};
pub use users::{Credentials, UserStore};
