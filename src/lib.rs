pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod ui;

pub use routes::{build_router, AppState};
