//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `webhook_validators`: validators for each configuration section
//! - `tests`: test suite for the validators

mod trait_def;
mod webhook_validators;

pub use trait_def::Validate;
pub use webhook_validators::validate_webhook_url;
