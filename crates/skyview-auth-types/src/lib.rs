//! Token types shared across Skyview services.
//!
//! Provides JWT issuing/validation and the bearer-token gate middleware.

pub mod bearer;
pub mod token;
