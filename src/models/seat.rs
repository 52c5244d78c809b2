use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub number: u32,
    available: bool,
}

impl Seat {
    pub fn new(number: u32) -> Self {
        Self { number, available: true }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn book(&mut self) {
        self.available = false;
    }

    pub fn release(&mut self) {
        self.available = true;
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available { "Available" } else { "Booked" };
        write!(f, "Seat {} - {}", self.number, status)
    }
}
