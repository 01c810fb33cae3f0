pub mod config;
pub mod data;
pub mod error;
pub mod prediction_client;
pub mod request_logger;
