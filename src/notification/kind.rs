//! Notification types and their wire names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Every notification type a subscriber can receive.
///
/// Each variant has a stable numeric identifier and a wire name, the string
/// sent as `message_type` in webhook payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NotificationType {
    /// A match is about to start
    UpcomingMatch,
    /// A match score was posted
    MatchScore,
    /// A competition level (quals, playoffs) is starting
    LevelStarting,
    /// Alliance selections were completed
    AllianceSelection,
    /// Event awards were posted
    Awards,
    /// New media was posted
    MediaPosted,
    /// District point standings changed
    DistrictPointsUpdated,
    /// The event schedule changed
    ScheduleUpdated,
    /// Final event results are available
    FinalResults,
    /// Test message
    Ping,
    /// Administrator broadcast to all subscribers
    Broadcast,
    /// A video was added to a match
    MatchVideo,
    /// Match videos were added for an event
    EventMatchVideo,
    /// Client-side favorites changed
    UpdateFavorites,
    /// Client-side subscriptions changed
    UpdateSubscriptions,
    /// Webhook ownership verification
    Verification,
}

impl NotificationType {
    /// All notification types, in identifier order.
    pub const ALL: [Self; 16] = [
        Self::UpcomingMatch,
        Self::MatchScore,
        Self::LevelStarting,
        Self::AllianceSelection,
        Self::Awards,
        Self::MediaPosted,
        Self::DistrictPointsUpdated,
        Self::ScheduleUpdated,
        Self::FinalResults,
        Self::Ping,
        Self::Broadcast,
        Self::MatchVideo,
        Self::EventMatchVideo,
        Self::UpdateFavorites,
        Self::UpdateSubscriptions,
        Self::Verification,
    ];

    /// Returns the stable numeric identifier.
    #[must_use]
    pub const fn id(self) -> u16 {
        match self {
            Self::UpcomingMatch => 0,
            Self::MatchScore => 1,
            Self::LevelStarting => 2,
            Self::AllianceSelection => 3,
            Self::Awards => 4,
            Self::MediaPosted => 5,
            Self::DistrictPointsUpdated => 6,
            Self::ScheduleUpdated => 7,
            Self::FinalResults => 8,
            Self::Ping => 9,
            Self::Broadcast => 10,
            Self::MatchVideo => 11,
            Self::EventMatchVideo => 12,
            Self::UpdateFavorites => 100,
            Self::UpdateSubscriptions => 101,
            Self::Verification => 200,
        }
    }

    /// Returns the name sent as `message_type` in webhook payloads.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::UpcomingMatch => "upcoming_match",
            Self::MatchScore => "match_score",
            Self::LevelStarting => "starting_comp_level",
            Self::AllianceSelection => "alliance_selection",
            Self::Awards => "awards_posted",
            Self::MediaPosted => "media_posted",
            Self::DistrictPointsUpdated => "district_points_updated",
            Self::ScheduleUpdated => "schedule_updated",
            Self::FinalResults => "final_results",
            Self::Ping => "ping",
            Self::Broadcast => "broadcast",
            Self::MatchVideo => "match_video",
            Self::EventMatchVideo => "event_match_video",
            Self::UpdateFavorites => "update_favorites",
            Self::UpdateSubscriptions => "update_subscriptions",
            Self::Verification => "verification",
        }
    }

    /// Looks up a type by its numeric identifier.
    #[must_use]
    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A wire name that matches no notification type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown notification type '{0}'")]
pub struct UnknownNotificationType(pub String);

impl FromStr for NotificationType {
    type Err = UnknownNotificationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| UnknownNotificationType(s.to_string()))
    }
}
