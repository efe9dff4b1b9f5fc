//! HTTP transport shared by the API client and the webhook sender.
//!
//! This module provides:
//! - Request/response value types ([`HttpRequest`], [`HttpResponse`])
//! - The client abstraction both components depend on ([`HttpClient`])
//! - The production implementation backed by reqwest ([`ReqwestClient`])

mod client;
mod error;
mod http;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod http_tests;

pub use client::ReqwestClient;
pub use error::HttpError;
pub use self::http::{HttpClient, HttpRequest, HttpResponse};
