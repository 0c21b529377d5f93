mod builder;

use serde_json::json;

use crate::model::payload::MatchPayload;

fn payload_from(value: serde_json::Value) -> MatchPayload {
    serde_json::from_value(value).expect("test payload must deserialize")
}

/// A complete payload for match 100, team 1 vs team 2, with one lineup entry
/// per side and a small comment feed.
fn base_payload() -> serde_json::Value {
    json!({
        "match": {
            "match_id": 100,
            "team_id_1": 1,
            "team_id_2": 2,
            "match_playday": 3,
            "match_time": 1_641_056_400,
            "match_scheduling_status": 0,
            "match_scheduling_time": 900,
            "match_scheduling_suggest_0": null,
            "match_scheduling_suggest_1": null,
            "match_scheduling_suggest_2": null,
            "match_score_1": null,
            "match_score_2": null,
            "match_status": "upcoming"
        },
        "stage": { "stage_type": "league" },
        "line_ups": [
            { "team_id": 1, "user_id": 11, "user_name": "Alice", "account_value": "alice#euw" },
            { "team_id": 2, "user_id": 21, "user_name": "Bob", "account_value": "bob#euw" }
        ],
        "comments": [
            { "comment_id": 5, "user_id": 11, "content": "gl hf" }
        ],
        "logs": []
    })
}
