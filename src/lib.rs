//! Car inventory: CRUD REST API over a single SQLite `cars` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, BootstrapError, ConfigError};
pub use model::{Car, CarInput};
pub use routes::{app, car_routes, common_routes};
pub use service::RequestValidator;
pub use state::AppState;
pub use store::{CarStore, SeedOutcome};
