//! Configuration layer for frc-connect.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`)
//! 3. **Built-in defaults**
//!
//! # Credentials
//!
//! The FRC API token is resolved when the client is built, not here: an
//! explicit `auth_token` wins, otherwise the `username`/`authkey` pair is
//! exchanged for one. The pair is merged field by field, so a username on
//! the command line can be combined with an authkey from the file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{ApiArgs, Cli, Command, EndpointCommand, MessageCommand, WebhookArgs};
pub use error::{ConfigError, field};
pub use self::toml::{TomlConfig, default_config_template};
pub use validated::{Action, ApiSettings, ValidatedConfig, WebhookTarget, write_default_config};
