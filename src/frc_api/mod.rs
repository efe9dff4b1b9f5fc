//! Typed client for the FRC Events REST API.
//!
//! This module provides:
//! - The authenticated client ([`FrcApi`])
//! - Endpoint descriptions and path rendering ([`Endpoint`], [`AwardsFilter`])
//! - Credential resolution ([`SecretsProvider`], [`FmsApiSecrets`])
//!
//! Every client method performs exactly one GET and returns the raw
//! [`HttpResponse`](crate::transport::HttpResponse); interpreting the
//! status code is left to the caller.

mod client;
mod endpoint;
mod error;
mod secrets;

#[cfg(test)]
mod secrets_tests;

pub use client::{DEFAULT_BASE_URL, FrcApi};
pub use endpoint::{ALL_TEAMS, AwardsFilter, Endpoint};
pub use error::FrcApiError;
pub use secrets::{FmsApiSecrets, SecretsProvider, encode_auth_token};
