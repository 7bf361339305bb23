//! Core module - service configuration
//!
//! - [`Config`] - service configuration

pub mod config;

pub use config::Config;
