use serde_json::json;

use super::{base_payload, payload_from};
use crate::error::payload::PayloadError;
use crate::model::snapshot::{CloseState, ConfirmationSource, SuggestionAuthor};
use crate::service::snapshot::build_snapshot;

/// Orientation for the first-listed team: enemy is side two, first pick ours
#[test]
fn orients_to_first_side() {
    let payload = payload_from(base_payload());

    let snapshot = build_snapshot(&payload, 1).unwrap();

    assert_eq!(snapshot.match_id, 100);
    assert_eq!(snapshot.viewing_team_id, 1);
    assert_eq!(snapshot.enemy_team_id, Some(2));
    assert!(snapshot.has_first_pick);
    assert_eq!(snapshot.match_day, Some(3));
    assert_eq!(snapshot.match_type.as_deref(), Some("league"));
}

/// The same payload viewed by the other side flips every oriented field
#[test]
fn orients_to_second_side() {
    let payload = payload_from(base_payload());

    let snapshot = build_snapshot(&payload, 2).unwrap();

    assert_eq!(snapshot.enemy_team_id, Some(1));
    assert!(!snapshot.has_first_pick);
}

/// Scores swap with orientation; the first component is always ours
#[test]
fn result_is_oriented() {
    let mut value = base_payload();
    value["match"]["match_score_1"] = json!(2);
    value["match"]["match_score_2"] = json!(1);
    let payload = payload_from(value);

    assert_eq!(
        build_snapshot(&payload, 1).unwrap().result.as_deref(),
        Some("2:1")
    );
    assert_eq!(
        build_snapshot(&payload, 2).unwrap().result.as_deref(),
        Some("1:2")
    );
}

/// Zero or absent scores mean the result is unset
#[test]
fn zero_scores_mean_no_result() {
    let mut value = base_payload();
    value["match"]["match_score_1"] = json!(0);
    value["match"]["match_score_2"] = json!(0);
    let payload = payload_from(value);

    assert_eq!(build_snapshot(&payload, 1).unwrap().result, None);
}

/// Scheduling status 0 means no outstanding suggestion
#[test]
fn scheduling_status_zero_is_none() {
    let payload = payload_from(base_payload());

    assert_eq!(
        build_snapshot(&payload, 1).unwrap().suggestion_author,
        SuggestionAuthor::None
    );
}

/// Status 1 names side one; it maps to whichever side we are
#[test]
fn scheduling_status_maps_onto_orientation() {
    let mut value = base_payload();
    value["match"]["match_scheduling_status"] = json!(1);
    let payload = payload_from(value);

    assert_eq!(
        build_snapshot(&payload, 1).unwrap().suggestion_author,
        SuggestionAuthor::Team
    );
    assert_eq!(
        build_snapshot(&payload, 2).unwrap().suggestion_author,
        SuggestionAuthor::Enemy
    );

    let mut value = base_payload();
    value["match"]["match_scheduling_status"] = json!(2);
    let payload = payload_from(value);

    assert_eq!(
        build_snapshot(&payload, 1).unwrap().suggestion_author,
        SuggestionAuthor::Enemy
    );
}

/// Scheduling time 0 is the platform's "agreed" marker
#[test]
fn begin_confirmed_from_scheduling_time() {
    let mut value = base_payload();
    value["match"]["match_scheduling_time"] = json!(0);
    let payload = payload_from(value);
    assert!(build_snapshot(&payload, 1).unwrap().begin_confirmed);

    let payload = payload_from(base_payload());
    assert!(!build_snapshot(&payload, 1).unwrap().begin_confirmed);
}

/// Suggestion slots are collected in order; empty and zero slots are skipped
#[test]
fn suggestions_are_collected() {
    let mut value = base_payload();
    value["match"]["match_scheduling_suggest_0"] = json!(1_641_056_400);
    value["match"]["match_scheduling_suggest_1"] = json!(0);
    value["match"]["match_scheduling_suggest_2"] = json!(1_641_142_800);
    let payload = payload_from(value);

    let suggestions = build_snapshot(&payload, 1).unwrap().suggestions.unwrap();
    assert_eq!(suggestions.len(), 2);
    assert!(suggestions[0] < suggestions[1]);
}

/// Lineup entries split by side; entries without name or handle are dropped
#[test]
fn lineups_split_and_filter() {
    let mut value = base_payload();
    value["line_ups"] = json!([
        { "team_id": 1, "user_id": 11, "user_name": "Alice", "account_value": "alice#euw" },
        { "team_id": 1, "user_id": 12, "user_name": null, "account_value": "ghost#euw" },
        { "team_id": 2, "user_id": 21, "user_name": "Bob", "account_value": "bob#euw" },
        { "team_id": 2, "user_id": 22, "user_name": "NoHandle", "account_value": null }
    ]);
    let payload = payload_from(value);

    let snapshot = build_snapshot(&payload, 1).unwrap();
    let team = snapshot.team_lineup.unwrap();
    let enemy = snapshot.enemy_lineup.unwrap();

    assert_eq!(team.len(), 1);
    assert_eq!(team[0].player_id, 11);
    assert_eq!(enemy.len(), 1);
    assert_eq!(enemy[0].player_id, 21);
}

/// Repeated (comment id, author) pairs collapse to the first occurrence
#[test]
fn comments_are_deduplicated() {
    let mut value = base_payload();
    value["comments"] = json!([
        { "comment_id": 2, "user_id": 1, "content": "a" },
        { "comment_id": 2, "user_id": 1, "content": "a again" },
        { "comment_id": 3, "user_id": 9, "content": "b" }
    ]);
    let payload = payload_from(value);

    let comments = build_snapshot(&payload, 1).unwrap().comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment_id, 2);
    assert_eq!(comments[0].content, "a");
}

/// Match status maps onto the explicit close states
#[test]
fn close_state_mapping() {
    for (status, expected) in [
        (json!("finished"), CloseState::Closed),
        (json!("upcoming"), CloseState::Open),
        (json!("pending"), CloseState::Open),
        (json!(null), CloseState::Unknown),
        (json!("weird"), CloseState::Unknown),
    ] {
        let mut value = base_payload();
        value["match"]["match_status"] = status;
        let payload = payload_from(value);

        assert_eq!(build_snapshot(&payload, 1).unwrap().close_state, expected);
    }
}

/// The newest recognized log entry decides the confirmation source
#[test]
fn newest_recognized_log_entry_wins() {
    let mut value = base_payload();
    value["logs"] = json!([
        { "log_time": 1, "user_id": 11, "log_action": "scheduling_confirm", "log_details": "" },
        { "log_time": 2, "user_id": 0, "log_action": "irrelevant", "log_details": "" },
        { "log_time": 3, "user_id": 0, "log_action": "change_time", "log_details": "" }
    ]);
    let payload = payload_from(value);

    assert_eq!(
        build_snapshot(&payload, 1).unwrap().confirmation_source,
        Some(ConfirmationSource::AdminChange)
    );
}

/// No recognized log entry means no confirmation source
#[test]
fn unrecognized_logs_yield_none() {
    let mut value = base_payload();
    value["logs"] = json!([
        { "log_time": 1, "user_id": 0, "log_action": "created", "log_details": "" }
    ]);
    let payload = payload_from(value);

    assert_eq!(build_snapshot(&payload, 1).unwrap().confirmation_source, None);
}

/// An unresolved bracket leaves the enemy unknown without failing the build
#[test]
fn unknown_enemy_side() {
    let mut value = base_payload();
    value["match"]["team_id_2"] = json!(null);
    let payload = payload_from(value);

    let snapshot = build_snapshot(&payload, 1).unwrap();
    assert_eq!(snapshot.enemy_team_id, None);
}

/// Missing required fields fail the build with the specific error
#[test]
fn malformed_payloads_are_rejected() {
    let payload = payload_from(json!({}));
    assert_eq!(
        build_snapshot(&payload, 1).unwrap_err(),
        PayloadError::MissingMatchSection
    );

    let payload = payload_from(json!({ "match": { "team_id_1": 1 } }));
    assert_eq!(
        build_snapshot(&payload, 1).unwrap_err(),
        PayloadError::MissingMatchId
    );

    let payload = payload_from(json!({ "match": { "match_id": 100 } }));
    assert_eq!(
        build_snapshot(&payload, 1).unwrap_err(),
        PayloadError::MissingTeamIds
    );

    let payload = payload_from(base_payload());
    assert_eq!(
        build_snapshot(&payload, 9).unwrap_err(),
        PayloadError::ViewingTeamNotInMatch {
            viewing_team_id: 9,
            match_id: 100
        }
    );
}
