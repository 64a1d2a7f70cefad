//! Vahan Facade
//!
//! High-level API for registration growth analytics. Re-exports all public
//! types from the vahan stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use vahan_api::*;

// Explicit re-exports for documentation
pub use vahan_api::prelude;

// Re-export core modules for direct access
pub use vahan_core::{aggregate, derive, filter, growth, seasonal, share, summary, trend};

// Re-export SPI traits
pub use vahan_spi::{MetricsSink, RegistrationSource, TrendClassifier};
