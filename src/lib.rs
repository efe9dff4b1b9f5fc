//! frc-connect: FRC Events API client and webhook sender
//!
//! A library for querying the FIRST FRC Events REST API and for delivering
//! signed notification webhooks to subscriber endpoints.

pub mod config;
pub mod frc_api;
pub mod notification;
pub mod transport;
pub mod webhook;

#[cfg(test)]
mod test_fixtures;
