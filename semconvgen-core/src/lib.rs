//! # semconvgen-core
//!
//! Shared foundation for the semconvgen workspace: one error enum per
//! subsystem, layered TOML configuration, and tracing initialization.

pub mod config;
pub mod errors;
pub mod tracing;
