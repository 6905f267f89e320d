//! Shared plumbing for Skyview services: errors, config loading, health probes,
//! HTTP middleware and tracing setup.

pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod tracing;
