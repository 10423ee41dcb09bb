pub mod config;
pub mod desk;
pub mod error;
pub mod facility;
pub mod telemetry;
