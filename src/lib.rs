pub mod api;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ui;
pub mod utils;
