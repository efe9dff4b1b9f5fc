//! FRC API endpoints and their relative paths.

use std::fmt;

use url::form_urlencoded;

use super::FrcApiError;

/// Team number meaning "every team" in the awards endpoint.
///
/// The v3.0 awards endpoint rejects requests without a team segment, so
/// event-wide award listings pass this value instead.
pub const ALL_TEAMS: u32 = 0;

/// Which awards to fetch for a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwardsFilter {
    /// Every award given at an event.
    ByEvent(String),
    /// Every award won by a team during the season.
    ByTeam(u32),
    /// Awards won by one team at one event.
    ByEventAndTeam(String, u32),
}

impl AwardsFilter {
    /// Builds a filter from optional identifiers.
    ///
    /// An empty event code and team number [`ALL_TEAMS`] count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FrcApiError::Validation`] if neither identifier is present.
    pub fn from_parts(event_code: Option<&str>, team_number: Option<u32>) -> Result<Self, FrcApiError> {
        let event_code = event_code.filter(|code| !code.is_empty());
        let team_number = team_number.filter(|&number| number != ALL_TEAMS);

        match (event_code, team_number) {
            (Some(code), Some(number)) => Ok(Self::ByEventAndTeam(code.to_string(), number)),
            (Some(code), None) => Ok(Self::ByEvent(code.to_string())),
            (None, Some(number)) => Ok(Self::ByTeam(number)),
            (None, None) => Err(FrcApiError::Validation(
                "awards expects either an event_code, team_number, or both".to_string(),
            )),
        }
    }
}

/// A single FRC API endpoint with its parameters.
///
/// [`Endpoint::path`] renders the path relative to the API base URL.
///
/// # Example
///
/// ```
/// use frc_connect::frc_api::Endpoint;
///
/// let endpoint = Endpoint::EventTeams {
///     year: 2024,
///     event_short: "CASJ".to_string(),
///     page: 2,
/// };
/// assert_eq!(endpoint.path(), "/2024/teams?eventCode=CASJ&page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Service root (API status)
    Root,
    /// All events in a season
    EventList {
        /// Season
        year: u16,
    },
    /// Events matching a short code
    EventInfo {
        /// Season
        year: u16,
        /// Event short code
        event_short: String,
    },
    /// One page of the teams attending an event
    EventTeams {
        /// Season
        year: u16,
        /// Event short code
        event_short: String,
        /// 1-based page number
        page: u32,
    },
    /// One page of the avatars of teams attending an event
    EventTeamAvatars {
        /// Season
        year: u16,
        /// Event short code
        event_short: String,
        /// 1-based page number
        page: u32,
    },
    /// Awards for an event, a team, or both
    Awards {
        /// Season
        year: u16,
        /// Which awards to fetch
        filter: AwardsFilter,
    },
    /// All districts in a season
    DistrictList {
        /// Season
        year: u16,
    },
}

impl Endpoint {
    /// Returns the path of this endpoint relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::EventList { year } => format!("/{year}/events"),
            Self::EventInfo { year, event_short } => {
                format!("/{year}/events?eventCode={}", query_value(event_short))
            }
            Self::EventTeams {
                year,
                event_short,
                page,
            } => format!(
                "/{year}/teams?eventCode={}&page={page}",
                query_value(event_short)
            ),
            Self::EventTeamAvatars {
                year,
                event_short,
                page,
            } => format!(
                "/{year}/avatars?eventCode={}&page={page}",
                query_value(event_short)
            ),
            Self::Awards { year, filter } => match filter {
                AwardsFilter::ByEventAndTeam(code, number) => {
                    format!("/{year}/awards/{code}/{number}")
                }
                AwardsFilter::ByEvent(code) => format!("/{year}/awards/{code}/{ALL_TEAMS}"),
                AwardsFilter::ByTeam(number) => format!("/{year}/awards/{number}"),
            },
            Self::DistrictList { year } => format!("/{year}/districts"),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
