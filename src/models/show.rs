use chrono::NaiveTime;
use std::fmt;
use std::sync::Arc;

use super::Movie;

/// Position of a show in the catalog listing, 0-based.
pub type ShowId = usize;

#[derive(Debug, Clone)]
pub struct Show {
    pub movie: Arc<Movie>,
    pub screen_number: u32,
    pub time: NaiveTime,
}

impl Show {
    pub fn new(movie: Arc<Movie>, screen_number: u32, time: NaiveTime) -> Self {
        Self { movie, screen_number, time }
    }

    /// 12-hour clock without a leading zero, e.g. `5:00 PM`.
    pub fn display_time(&self) -> String {
        self.time.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} on Screen {}",
            self.movie.title,
            self.display_time(),
            self.screen_number
        )
    }
}
