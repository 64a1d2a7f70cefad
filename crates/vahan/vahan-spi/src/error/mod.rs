//! Error module

mod vahan_error;

pub use vahan_error::{Result, VahanError};
