//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling for the service layer
//! - Configuration structures
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
