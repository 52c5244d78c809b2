use chrono::NaiveTime;
use std::sync::Arc;
use tracing::info;

use crate::error::AppError;
use crate::models::{show::ShowId, Movie, Screen, Show};

// Сид-данные: (название, длительность, жанр)
const MOVIES: &[(&str, u32, &str)] = &[
    ("Inception", 148, "Sci-Fi"),
    ("Titanic", 195, "Romance"),
];

const SCREENS: &[u32] = &[1, 2];

// (индекс фильма, номер зала, время "HH:MM")
const SHOWS: &[(usize, u32, &str)] = &[(0, 1, "17:00"), (1, 2, "20:00")];

/// Movies, screens and shows. Only seat availability changes after seeding.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Arc<Movie>>,
    screens: Vec<Screen>,
    shows: Vec<Show>,
}

impl Catalog {
    pub fn new(movies: Vec<Arc<Movie>>, screens: Vec<Screen>, shows: Vec<Show>) -> Self {
        Self { movies, screens, shows }
    }

    /// Builds the fixed startup catalog.
    pub fn seed(seats_per_screen: u32) -> Result<Self, AppError> {
        let movies: Vec<Arc<Movie>> = MOVIES
            .iter()
            .map(|&(title, duration, genre)| Arc::new(Movie::new(title, duration, genre)))
            .collect();

        let screens = SCREENS
            .iter()
            .map(|&number| Screen::new(number, seats_per_screen))
            .collect();

        let shows = SHOWS
            .iter()
            .map(|&(movie, screen, time)| -> Result<Show, AppError> {
                let time = NaiveTime::parse_from_str(time, "%H:%M")?;
                Ok(Show::new(movies[movie].clone(), screen, time))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let catalog = Self::new(movies, screens, shows);
        info!(
            "Catalog seeded: {} movies, {} screens, {} shows",
            catalog.movies.len(),
            catalog.screens.len(),
            catalog.shows.len()
        );
        Ok(catalog)
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn show(&self, id: ShowId) -> Option<&Show> {
        self.shows.get(id)
    }

    pub fn screen(&self, number: u32) -> Option<&Screen> {
        self.screens.iter().find(|s| s.number == number)
    }

    pub fn screen_mut(&mut self, number: u32) -> Option<&mut Screen> {
        self.screens.iter_mut().find(|s| s.number == number)
    }
}
