//! Seating Service - table seating and grouping for the restaurant floor
//!
//! # Module structure
//!
//! ```text
//! seating-service/src/
//! ├── core/          # configuration
//! ├── tables/        # command processing, actions, storage
//! └── utils/         # logging
//! ```

pub mod core;
pub mod tables;
pub mod utils;

pub use crate::core::Config;
pub use tables::{SeatingManager, SeatingStorage};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialise logging from the resulting configuration
pub fn setup_environment() -> Config {
    // a missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    tracing::debug!(?config, "Environment loaded");
    config
}
