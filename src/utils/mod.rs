//! Utility modules
//!
//! - **error**: the crate-wide error type
//! - **logging**: log subscriber setup for binaries

pub mod error;
pub mod logging;
