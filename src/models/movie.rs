#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub title: String,
    pub duration_mins: u32,
    pub genre: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, duration_mins: u32, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration_mins,
            genre: genre.into(),
        }
    }
}
