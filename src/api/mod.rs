// API routes and handlers

pub mod error;
pub mod health;
pub mod routes;
pub mod session;
pub mod exercise_types;
pub mod workouts;
pub mod performed_sets;
pub mod statistics;

pub use error::ApiError;
pub use routes::{create_routes, AppState};
