//! Utility modules for common functionality
//!
//! Provides environment variable access and build metadata.

pub mod env;

pub use env::{BuildInfo, EnvUtils};
