//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `validators`: Validators for every configuration section
//! - `tests`: Test suite for all validators

mod trait_def;
mod validators;
#[cfg(test)]
mod tests;

pub use trait_def::Validate;
