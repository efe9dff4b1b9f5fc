//! Tests for `NotificationType`.

use super::{NotificationType, UnknownNotificationType};

#[test]
fn wire_names_match_subscriber_contract() {
    assert_eq!(NotificationType::UpcomingMatch.wire_name(), "upcoming_match");
    assert_eq!(NotificationType::LevelStarting.wire_name(), "starting_comp_level");
    assert_eq!(NotificationType::Awards.wire_name(), "awards_posted");
    assert_eq!(NotificationType::Ping.wire_name(), "ping");
    assert_eq!(NotificationType::Verification.wire_name(), "verification");
}

#[test]
fn ids_are_stable() {
    assert_eq!(NotificationType::UpcomingMatch.id(), 0);
    assert_eq!(NotificationType::Ping.id(), 9);
    assert_eq!(NotificationType::EventMatchVideo.id(), 12);
    assert_eq!(NotificationType::UpdateFavorites.id(), 100);
    assert_eq!(NotificationType::UpdateSubscriptions.id(), 101);
    assert_eq!(NotificationType::Verification.id(), 200);
}

#[test]
fn from_id_inverts_id() {
    for kind in NotificationType::ALL {
        assert_eq!(NotificationType::from_id(kind.id()), Some(kind));
    }
    assert_eq!(NotificationType::from_id(13), None);
}

#[test]
fn from_str_inverts_wire_name() {
    for kind in NotificationType::ALL {
        assert_eq!(kind.wire_name().parse::<NotificationType>(), Ok(kind));
    }
}

#[test]
fn from_str_rejects_unknown_name() {
    let err = "match_scored".parse::<NotificationType>().unwrap_err();

    assert_eq!(err, UnknownNotificationType("match_scored".to_string()));
    assert_eq!(err.to_string(), "Unknown notification type 'match_scored'");
}

#[test]
fn wire_names_and_ids_are_unique() {
    let mut names: Vec<_> = NotificationType::ALL.iter().map(|k| k.wire_name()).collect();
    let mut ids: Vec<_> = NotificationType::ALL.iter().map(|k| k.id()).collect();
    names.sort_unstable();
    names.dedup();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(names.len(), NotificationType::ALL.len());
    assert_eq!(ids.len(), NotificationType::ALL.len());
}

#[test]
fn display_uses_wire_name() {
    assert_eq!(NotificationType::MatchScore.to_string(), "match_score");
}
