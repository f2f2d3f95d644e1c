pub mod config;
pub mod models;
pub mod reservation_client;
pub mod view;
