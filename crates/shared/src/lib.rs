//! Shared types, errors, and configuration for Tillpoint.
//!
//! This crate provides common types used across all other crates:
//! - `MonetaryValue`, a fixed-point amount in a registered currency
//! - The closed currency registry
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, MoneyError, MoneyResult};
pub use types::{CurrencyConfig, MonetaryValue};
