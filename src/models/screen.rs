use super::Seat;

#[derive(Debug, Clone)]
pub struct Screen {
    pub number: u32,
    seats: Vec<Seat>,
}

impl Screen {
    /// Seats are numbered `1..=total_seats` in order.
    pub fn new(number: u32, total_seats: u32) -> Self {
        Self {
            number,
            seats: (1..=total_seats).map(Seat::new).collect(),
        }
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_available()).count()
    }

    pub fn seat_mut(&mut self, number: u32) -> Option<&mut Seat> {
        self.seats.get_mut(Self::slot(number)?)
    }

    // Номер места 1-based, 0 - невалидный
    fn slot(number: u32) -> Option<usize> {
        usize::try_from(number).ok()?.checked_sub(1)
    }
}
