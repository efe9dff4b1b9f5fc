//! Default values for configuration options.

/// Default FRC API root.
pub const BASE_URL: &str = crate::frc_api::DEFAULT_BASE_URL;

/// Default output path for `frc-connect init`.
pub const CONFIG_FILE: &str = "frc-connect.toml";

/// First page of paginated endpoints.
pub const PAGE: u32 = 1;
