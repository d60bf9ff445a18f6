mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{harness, send};

#[tokio::test]
async fn submit_scores_stores_and_rewards() {
    let h = harness(Some("A gentle summary."));
    let (status, body) = send(
        &h.app,
        "POST",
        "/assessments/PHQ-9/submit",
        Some("user-a"),
        Some(json!({ "responses": [1, 1, 1, 1, 1, 1, 1, 1, 1] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let result = &body["result"];
    assert_eq!(result["assessmentType"], "PHQ-9");
    assert_eq!(result["totalScore"], 9);
    assert_eq!(result["severityLevel"], "Mild");
    assert_eq!(result["narrative"], "A gentle summary.");
    assert_eq!(result["narrativeSource"], "generated");
    assert!(result.get("subscaleScores").is_none());

    let reward = &body["reward"];
    assert_eq!(reward["pointsEarned"], 20);
    assert_eq!(reward["profile"]["totalPoints"], 20);
    assert_eq!(reward["profile"]["currentStreak"], 1);
    let badges: Vec<&str> = reward["newBadges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(badges, vec!["first-steps"]);

    let id = result["id"].as_str().unwrap();
    let (status, listed) = send(&h.app, "GET", "/assessments/results", Some("user-a"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id);

    let path = format!("/assessments/results/{id}");
    let (status, one) = send(&h.app, "GET", &path, Some("user-a"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["totalScore"], 9);

    let (status, _) = send(&h.app, "GET", &path, Some("user-b"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dass21_submission_carries_subscales() {
    let h = harness(None);
    let (status, body) = send(
        &h.app,
        "POST",
        "/assessments/DASS-21/submit",
        Some("user-a"),
        Some(json!({ "responses": vec![1; 21] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let result = &body["result"];
    assert_eq!(result["totalScore"], 42);
    assert_eq!(
        result["subscaleScores"],
        json!({ "depression": 14, "anxiety": 14, "stress": 14 })
    );
    assert_eq!(
        result["severityLevel"],
        json!({ "depression": "Moderate", "anxiety": "Moderate", "stress": "Normal" })
    );
    assert_eq!(
        result["interpretation"],
        "Depression: Moderate, Anxiety: Moderate, Stress: Normal"
    );
    assert_eq!(result["narrativeSource"], "fallback");
    assert!(!result["narrative"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn incomplete_submission_is_rejected_and_not_stored() {
    let h = harness(Some("ok"));
    let (status, body) = send(
        &h.app,
        "POST",
        "/assessments/GAD-7/submit",
        Some("user-a"),
        Some(json!({ "responses": [0, 1, 2, -1, 0, 1, 2] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("question 4"));

    let (_, listed) = send(&h.app, "GET", "/assessments/results", Some("user-a"), None).await;
    assert!(listed.as_array().unwrap().is_empty());
    let (_, profile) = send(&h.app, "GET", "/profile", Some("user-a"), None).await;
    assert_eq!(profile["totalPoints"], 0);
}

#[tokio::test]
async fn wrong_length_and_out_of_scale_values_are_rejected() {
    let h = harness(Some("ok"));
    for responses in [json!([0, 1, 2]), json!([0, 1, 2, 3, 0, 1, 7])] {
        let (status, _) = send(
            &h.app,
            "POST",
            "/assessments/GAD-7/submit",
            Some("user-a"),
            Some(json!({ "responses": responses })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{responses}");
    }
}

#[tokio::test]
async fn unknown_instrument_is_not_found() {
    let h = harness(Some("ok"));
    let (status, _) = send(
        &h.app,
        "POST",
        "/assessments/BDI-II/submit",
        Some("user-a"),
        Some(json!({ "responses": [0] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reward_failure_keeps_the_result() {
    let h = harness(Some("ok"));
    h.store.contend_profile_writes(10).await;

    let (status, body) = send(
        &h.app,
        "POST",
        "/assessments/GAD-7/submit",
        Some("user-a"),
        Some(json!({ "responses": [0, 0, 0, 0, 0, 0, 0] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["result"]["severityLevel"], "Minimal");
    assert!(body["reward"].is_null());

    let (_, listed) = send(&h.app, "GET", "/assessments/results", Some("user-a"), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}
