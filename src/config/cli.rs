//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::defaults;

/// frc-connect: FRC Events API client and webhook notifier
///
/// Queries the FRC Events API and sends signed test notifications to
/// webhook receivers.
#[derive(Debug, Parser)]
#[command(name = "frc-connect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for frc-connect
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Query the FRC Events API and print the response
    Api(ApiArgs),

    /// Send a notification to a webhook receiver
    Webhook(WebhookArgs),
}

/// Options for the `api` subcommand.
#[derive(Debug, Args)]
pub struct ApiArgs {
    /// Pre-obtained authorization token
    #[arg(long = "auth-token")]
    pub auth_token: Option<String>,

    /// FRC API username, exchanged with the authkey for a token
    #[arg(long)]
    pub username: Option<String>,

    /// FRC API authorization key
    #[arg(long)]
    pub authkey: Option<String>,

    /// API root URL
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Endpoint to query
    #[command(subcommand)]
    pub endpoint: EndpointCommand,
}

/// FRC API endpoints reachable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum EndpointCommand {
    /// Service root
    Root,

    /// All events in a season
    Events {
        /// Season
        year: u16,
    },

    /// Events matching a short code
    Event {
        /// Season
        year: u16,
        /// Event short code
        event: String,
    },

    /// Teams attending an event
    Teams {
        /// Season
        year: u16,
        /// Event short code
        event: String,
        /// Page number
        #[arg(long, default_value_t = defaults::PAGE)]
        page: u32,
    },

    /// Avatars of teams attending an event
    Avatars {
        /// Season
        year: u16,
        /// Event short code
        event: String,
        /// Page number
        #[arg(long, default_value_t = defaults::PAGE)]
        page: u32,
    },

    /// Awards by event, team, or both
    Awards {
        /// Season
        year: u16,
        /// Event code
        #[arg(long)]
        event: Option<String>,
        /// Team number
        #[arg(long)]
        team: Option<u32>,
    },

    /// All districts in a season
    Districts {
        /// Season
        year: u16,
    },
}

/// Options for the `webhook` subcommand.
#[derive(Debug, Args)]
pub struct WebhookArgs {
    /// Webhook receiver URL
    #[arg(long)]
    pub url: Option<String>,

    /// Shared secret used to sign the payload
    #[arg(long)]
    pub secret: Option<String>,

    /// Message to send
    #[command(subcommand)]
    pub message: MessageCommand,
}

/// Notifications that can be sent from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum MessageCommand {
    /// Test message
    Ping,

    /// Ownership verification message
    Verification {
        /// Key the receiver must echo back
        #[arg(long)]
        key: String,
    },

    /// Announcement
    Broadcast {
        /// Title
        #[arg(long)]
        title: String,
        /// Description
        #[arg(long)]
        desc: String,
        /// Link included with the announcement
        #[arg(long)]
        link: Option<String>,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
