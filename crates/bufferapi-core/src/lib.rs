//! Configuration shared by the Buffer API client and its callers.

pub mod client_config;
pub mod config;
pub mod error;

pub use client_config::{ClientConfig, DEFAULT_BASE_URL};
pub use config::{load_client_config, load_client_config_from_env};
pub use error::ConfigError;
