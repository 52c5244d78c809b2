pub mod user;
pub mod movie;
pub mod seat;
pub mod screen;
pub mod show;
pub mod booking;

pub use user::User;
pub use movie::Movie;
pub use seat::Seat;
pub use screen::Screen;
pub use show::Show;
pub use booking::Booking;
