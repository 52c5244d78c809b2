pub mod catalog;
pub mod config;
pub mod console;
pub mod controllers;
pub mod error;
pub mod models;
pub mod services;

use tracing::info;

// State для всего приложения, владеет каталогом и пользователями
pub struct AppState {
    pub catalog: catalog::Catalog,
    pub users: services::UserStore,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Self, error::AppError> {
        config.validate()?;

        let catalog = catalog::Catalog::seed(config.catalog.seats_per_screen)?;
        let users = services::UserStore::new(config.auth.bcrypt_cost);

        info!("Application state ready ({} environment)", config.app.environment);

        Ok(Self { catalog, users })
    }
}
