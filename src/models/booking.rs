use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use super::Show;

#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub show: Show,
    pub seats: Vec<u32>,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(show: Show, seats: Vec<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            show,
            seats,
            booked_at: Utc::now(),
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seats: Vec<String> = self.seats.iter().map(u32::to_string).collect();
        write!(f, "Booking for {}\nSeats: {}", self.show, seats.join(" "))
    }
}
