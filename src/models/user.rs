use super::Booking;

#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    password_hash: String,
    pub bookings: Vec<Booking>,
}

impl User {
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            bookings: Vec::new(),
        }
    }

    // Проверить пароль по bcrypt хешу
    pub fn verify_password(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(password, &self.password_hash)
    }

    pub fn add_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }
}
