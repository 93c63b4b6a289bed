//! Validation trait definition

/// Implemented by every configuration section; errors are human-readable
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
