//! Error handling for the relay
//!
//! This module defines the crate-wide error type and its HTTP rendering.

#![allow(missing_docs)]

mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use response::{ErrorDetail, ErrorResponse};
pub use types::{GatewayError, Result};
