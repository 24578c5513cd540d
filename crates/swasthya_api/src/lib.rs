#![forbid(unsafe_code)]

pub mod config;
pub mod dto;
pub mod health;
pub mod routes;
pub mod validate;

pub use config::{ConfigError, ServerConfig};
pub use routes::app;
pub use validate::{ValidationError, validate};
